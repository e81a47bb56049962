use std::sync::Arc;

use shikayat_core::Database;
use shikayat_core::auth::{AdminGate, SessionSigner};
use shikayat_core::repositories::SqliteComplaintRepository;

use super::config::Config;

/// Everything a handler needs, shared across requests.
pub struct AppState {
    pub repo: SqliteComplaintRepository,
    pub gate: AdminGate,
    pub signer: SessionSigner,
}

impl AppState {
    pub fn new(db: &Database, config: &Config) -> Arc<Self> {
        Arc::new(Self {
            repo: SqliteComplaintRepository::new(db.pool().clone()),
            gate: AdminGate::new(config.admin_password.clone()),
            signer: SessionSigner::new(&config.secret_key),
        })
    }
}
