use std::env;

use shikayat_core::Error;
use tracing::warn;

/// Secrets read once at startup. Both are required: running with a known
/// default password is worse than refusing to start.
#[derive(Debug)]
pub struct Config {
    /// Key used to sign the admin session cookie.
    pub secret_key: String,
    /// Shared admin password, compared in plaintext at login.
    pub admin_password: String,
}

impl Config {
    /// Missing variables are reported together so a misconfigured
    /// deployment is fixed in one pass.
    pub fn load() -> Result<Self, Error> {
        let secret_key = var("SECRET_KEY");
        let admin_password = var("ADMIN_PASSWORD");

        match (secret_key, admin_password) {
            (Some(secret_key), Some(admin_password)) => Ok(Self {
                secret_key,
                admin_password,
            }),
            (secret_key, admin_password) => {
                let mut missing = Vec::new();
                if secret_key.is_none() {
                    missing.push("SECRET_KEY");
                }
                if admin_password.is_none() {
                    missing.push("ADMIN_PASSWORD");
                }
                Err(Error::Config(format!("{} must be set", missing.join(" and "))))
            }
        }
    }
}

fn var(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Environment variable {key} not set");
            None
        }
    }
}
