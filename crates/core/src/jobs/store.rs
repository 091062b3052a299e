use async_trait::async_trait;
use thiserror::Error;

use super::StakeJobRecord;

/// Errors that can occur during job store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JobStoreError {
    #[error("Stake job not found: {job_id}")]
    NotFound { job_id: String },
    #[error("Stake job already exists: {job_id}")]
    AlreadyExists { job_id: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for job store operations.
pub type Result<T> = std::result::Result<T, JobStoreError>;

/// Durable store for stake job records.
///
/// Records are written only by the worker owning the job id, but may be
/// read concurrently by observers (the job-status endpoint).
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Inserts a new record. Fails if the job id already exists.
    async fn insert(&self, record: &StakeJobRecord) -> Result<()>;

    /// Replaces the record stored under `record.job_id`.
    async fn update(&self, record: &StakeJobRecord) -> Result<()>;

    /// Gets a record by job id.
    async fn get(&self, job_id: &str) -> Result<Option<StakeJobRecord>>;
}
