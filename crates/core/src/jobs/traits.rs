use async_trait::async_trait;

use super::JobError;

/// Provider of supporting evidence for a scoring decision.
///
/// The concrete implementation searches recent tweets about the subnet.
#[async_trait]
pub trait EvidenceSource: Send + Sync {
    /// Fetches recent public signals about the given subnet.
    async fn fetch_evidence(&self, netuid: u16) -> Result<Vec<String>, JobError>;
}

/// Derives a scalar sentiment signal from a batch of evidence.
///
/// Contract: the score is an integer in `[SENTIMENT_MIN, SENTIMENT_MAX]`.
/// Implementations report non-integer model output as a
/// [`JobError::Scoring`]; range validation happens in the job runner and is
/// never clamped.
///
/// [`JobError::Scoring`]: super::JobError::Scoring
#[async_trait]
pub trait SentimentScorer: Send + Sync {
    async fn score(&self, evidence: &[String]) -> Result<i32, JobError>;
}

/// Executes stake position changes on the chain.
///
/// The returned boolean is the chain's acceptance of the extrinsic. A `false`
/// return marks the job failed without an error message; only a thrown error
/// carries one.
#[async_trait]
pub trait StakeActuator: Send + Sync {
    /// Adds `amount` TAO of stake for the hotkey on the subnet.
    async fn add_stake(&self, netuid: u16, hotkey: &str, amount: f64) -> Result<bool, JobError>;

    /// Removes `amount` TAO of stake for the hotkey on the subnet.
    async fn remove_stake(&self, netuid: u16, hotkey: &str, amount: f64) -> Result<bool, JobError>;
}
