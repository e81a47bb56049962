// Session cookie plumbing. The cookie carries only the signed admin
// flag; anonymous visitors have no cookie at all.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "shikayat_session";

/// Pull our session cookie's value out of the `Cookie` header, if any.
pub fn session_value(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// `Set-Cookie` value establishing an admin session.
pub fn admin_cookie(value: &str) -> String {
    format!("{SESSION_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value that drops the session.
pub fn clear_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Per-request admin flag, verified from the session cookie. This is the
/// only way handlers learn about admin state; there is no shared
/// "logged in" singleton anywhere.
pub struct AdminFlag(pub bool);

impl FromRequestParts<Arc<AppState>> for AdminFlag {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let is_admin = session_value(&parts.headers)
            .map(|v| state.signer.is_admin(&v))
            .unwrap_or(false);
        Ok(AdminFlag(is_admin))
    }
}
