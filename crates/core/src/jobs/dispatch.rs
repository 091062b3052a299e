use async_trait::async_trait;
use thiserror::Error;

/// Errors raised when enqueueing a background job.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Failed to enqueue stake job: {0}")]
    Enqueue(String),
}

/// Hand-off point between the read path and the background worker.
///
/// `enqueue` must not block on the job's execution or completion; it mints
/// a job id, queues the work, and returns. The job then runs in its own
/// execution context, independent of the triggering request's lifecycle.
#[async_trait]
pub trait JobDispatcher: Send + Sync {
    /// Enqueues a sentiment-staking job and returns its assigned job id.
    async fn enqueue(&self, netuid: u16, hotkey: &str) -> Result<String, DispatchError>;
}
