// Request handlers for the five user-facing flows.

use axum::extract::Query;
use axum::response::Redirect;
use serde::Deserialize;

pub mod admin;
pub mod listing;
pub mod submit;

// User-facing flash strings. The bilingual ones are part of the product,
// not decoration.
pub const MSG_FIELDS_REQUIRED: &str =
    "Please fill all required fields / कृपया सभी आवश्यक विवरण भरें";
pub const MSG_SUBMITTED: &str = "Complaint submitted successfully! / शिकायत दर्ज हो गई";
pub const MSG_LOGGED_IN: &str = "Logged in as admin";
pub const MSG_BAD_PASSWORD: &str = "Invalid password";
pub const MSG_LOGGED_OUT: &str = "Logged out";
pub const MSG_ADMIN_REQUIRED: &str = "Admin login required";

/// Flash message handed across a redirect via the query string.
#[derive(Debug, Deserialize, Default)]
pub struct FlashParams {
    pub msg: Option<String>,
    pub kind: Option<String>,
}

/// Redirect to `path` carrying a flash message.
pub fn redirect_flash(path: &str, kind: &str, msg: &str) -> Redirect {
    Redirect::to(&format!("{path}?kind={kind}&msg={}", urlencoding::encode(msg)))
}

/// GET / just forwards to the submission form, carrying any flash
/// message along so it still gets rendered (logout lands here).
pub async fn home(Query(flash): Query<FlashParams>) -> Redirect {
    match flash.msg.as_deref() {
        Some(msg) => redirect_flash("/submit", flash.kind.as_deref().unwrap_or("info"), msg),
        None => Redirect::to("/submit"),
    }
}
