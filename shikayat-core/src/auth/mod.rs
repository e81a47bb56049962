// src/auth/mod.rs
//
// Admin access is a single shared secret plus a signed session cookie.
// There are no accounts: the gate answers "is this the operator's
// password", and the signer turns a successful login into a cookie value
// the browser carries until logout.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

/// Payload carried by an admin session cookie. The flag is the whole
/// session state, so the payload never varies.
const ADMIN_PAYLOAD: &str = "admin";

/// Verifies login attempts against the configured admin password.
pub struct AdminGate {
    password: String,
}

impl AdminGate {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Exact plaintext match. No lockout, no rate limiting, no hashing.
    pub fn verify(&self, candidate: &str) -> bool {
        candidate == self.password
    }
}

/// Signs and verifies the admin session cookie value.
pub struct SessionSigner {
    secret: Vec<u8>,
}

impl SessionSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    fn signature(&self, payload: &str) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(&self.secret);
        hasher.update([0x1f]);
        hasher.update(payload.as_bytes());
        hasher.finalize().into()
    }

    /// Cookie value for a freshly logged-in admin session.
    pub fn issue_admin(&self) -> String {
        let sig = self.signature(ADMIN_PAYLOAD);
        format!("{}.{}", ADMIN_PAYLOAD, URL_SAFE_NO_PAD.encode(sig))
    }

    /// True iff `cookie_value` is a well-formed admin cookie carrying a
    /// valid signature. Missing, malformed, or tampered values are all
    /// simply "not admin".
    pub fn is_admin(&self, cookie_value: &str) -> bool {
        let Some((payload, sig_b64)) = cookie_value.split_once('.') else {
            return false;
        };
        if payload != ADMIN_PAYLOAD {
            return false;
        }
        let Ok(sig) = URL_SAFE_NO_PAD.decode(sig_b64) else {
            return false;
        };
        constant_time_eq(&sig, &self.signature(payload))
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
