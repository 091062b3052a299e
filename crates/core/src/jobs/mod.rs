//! Sentiment-staking background jobs.
//!
//! A job is enqueued from the read path, executed on an independent worker,
//! and leaves a durable [`StakeJobRecord`] behind: inserted as `pending`
//! before any side effect, updated exactly once to a terminal status.

mod dispatch;
mod error;
mod record;
mod runner;
mod store;
mod traits;

pub use dispatch::{DispatchError, JobDispatcher};
pub use error::JobError;
pub use record::{JobStatus, StakeJobRecord};
pub use runner::{run_stake_job, JobContext, SENTIMENT_MAX, SENTIMENT_MIN};
pub use store::{JobStore, JobStoreError};
pub use traits::{EvidenceSource, SentimentScorer, StakeActuator};
