//! Stake job state machine.
//!
//! One pass, no retries: fetch evidence, score it, decide an amount, move
//! the stake, record the terminal result. Redelivery policy belongs to the
//! dispatcher, not here.

use std::sync::Arc;

use chrono::Utc;

use super::{
    EvidenceSource, JobError, JobStatus, JobStore, SentimentScorer, StakeActuator, StakeJobRecord,
};

/// Inclusive bounds for a valid sentiment score.
pub const SENTIMENT_MIN: i32 = -100;
pub const SENTIMENT_MAX: i32 = 100;

/// Collaborators a stake job needs, injected by the worker.
#[derive(Clone)]
pub struct JobContext {
    pub store: Arc<dyn JobStore>,
    pub evidence: Arc<dyn EvidenceSource>,
    pub scorer: Arc<dyn SentimentScorer>,
    pub actuator: Arc<dyn StakeActuator>,
}

/// Runs one sentiment-staking job to completion.
///
/// A pending record is persisted before any side-effecting call; if that
/// insert fails the job aborts with [`JobError::Persistence`] without
/// touching the chain, so every attempted action has an auditable anchor.
///
/// Evidence, scoring, and actuation errors never escape: they collapse into
/// the returned record's `failed` status. The signed output of
/// `stake_amount_fn` selects the action (positive stakes, non-positive
/// unstakes its absolute value) and is recorded even when the action then
/// fails. If the terminal update cannot be written the in-memory record is
/// still returned; the durable copy may then understate reality, which is
/// logged rather than hidden.
pub async fn run_stake_job<F>(
    ctx: &JobContext,
    netuid: u16,
    hotkey: &str,
    job_id: &str,
    stake_amount_fn: F,
) -> Result<StakeJobRecord, JobError>
where
    F: Fn(i32) -> f64,
{
    let mut record = StakeJobRecord::pending(job_id, netuid, hotkey);
    ctx.store.insert(&record).await.map_err(|err| {
        tracing::error!(job_id, error = %err, "Failed to persist pending stake job");
        JobError::Persistence(err.to_string())
    })?;

    let mut stake_amount = None;
    let outcome: Result<bool, JobError> = async {
        let tweets = ctx.evidence.fetch_evidence(netuid).await?;
        tracing::debug!(job_id, tweet_count = tweets.len(), "Fetched evidence");

        let score = ctx.scorer.score(&tweets).await?;
        if !(SENTIMENT_MIN..=SENTIMENT_MAX).contains(&score) {
            return Err(JobError::Scoring(format!("score out of range: {}", score)));
        }
        tracing::debug!(job_id, score, "Sentiment scored");

        let amount = stake_amount_fn(score);
        stake_amount = Some(amount);
        if amount > 0.0 {
            ctx.actuator.add_stake(netuid, hotkey, amount).await
        } else {
            ctx.actuator.remove_stake(netuid, hotkey, amount.abs()).await
        }
    }
    .await;

    record.stake_amount = stake_amount;
    record.updated_at = Utc::now();
    match outcome {
        Ok(true) => {
            record.status = JobStatus::Success;
        }
        Ok(false) => {
            // The extrinsic was submitted but not accepted; no error message
            // to carry, the status alone records the rejection.
            record.status = JobStatus::Failed;
        }
        Err(err) => {
            tracing::error!(job_id, error = %err, "Stake job failed");
            record.status = JobStatus::Failed;
            record.error = Some(err.to_string());
        }
    }

    if let Err(err) = ctx.store.update(&record).await {
        // The action already happened; return the in-memory outcome and
        // leave a loud trace that the durable record is stale.
        tracing::error!(job_id, error = %err, "Failed to persist terminal stake job state");
    } else {
        tracing::info!(job_id, status = %record.status, "Stake job finished");
    }

    Ok(record)
}
