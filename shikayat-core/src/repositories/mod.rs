// src/repositories/mod.rs

use async_trait::async_trait;

use crate::Error;
use crate::models::{Complaint, ComplaintFilter, NewComplaint};

pub mod sqlite;

pub use sqlite::complaint::SqliteComplaintRepository;

/// Storage operations over the complaints table. Complaints are never
/// deleted; `status` (plus `updated_at`) is the only thing that mutates
/// after insertion.
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Persist a validated submission. Assigns a fresh id, stamps
    /// `created_at == updated_at == now`, and returns the stored row.
    async fn insert(&self, new: &NewComplaint) -> Result<Complaint, Error>;

    /// Point lookup by id.
    async fn get(&self, id: i64) -> Result<Option<Complaint>, Error>;

    /// Filtered scan, newest first (ties in insertion order).
    async fn list(&self, filter: &ComplaintFilter) -> Result<Vec<Complaint>, Error>;

    /// Set the status of an existing complaint, refreshing `updated_at`,
    /// and return the updated row. `Error::NotFound` if the id is absent.
    async fn update_status(&self, id: i64, new_status: &str) -> Result<Complaint, Error>;
}
