//! Record Store — persists analyzed resumes.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`; production uses
//! `PgResumeStore`, handler tests use the in-memory store.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::resume::StoredResume;
use crate::parser::ParsedRecord;

pub use postgres::PgResumeStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// One row to append.
#[derive(Debug, Clone, Copy)]
pub struct NewResume<'a> {
    pub file_name: &'a str,
    pub record: &'a ParsedRecord,
    pub full_text: &'a str,
}

/// Append-only resume persistence. No update or delete exists.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Creates the table if absent. Safe to call repeatedly.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// Appends one row and returns its identifier.
    async fn insert(&self, resume: NewResume<'_>) -> Result<i32, StoreError>;

    async fn get(&self, id: i32) -> Result<Option<StoredResume>, StoreError>;

    /// Cheap connectivity probe.
    async fn health_check(&self) -> Result<(), StoreError>;
}
