//! Job queue dispatcher and worker.
//!
//! The dispatcher side hands a `StakeJob` to an unbounded mpsc channel and
//! returns the minted job id immediately; it never waits on execution. The
//! worker side drains the channel on its own task and spawns one task per
//! job, so a slow chain call never blocks the queue or the request that
//! triggered it.

use std::sync::Arc;

use tokio::sync::mpsc;
use uuid::Uuid;

use taodivs_core::jobs::{run_stake_job, DispatchError, JobContext, JobDispatcher};

/// Amount staked per job regardless of score sign's magnitude.
///
/// The score only picks the direction; sizing by sentiment strength is a
/// separate decision the default keeps out of the loop.
pub fn default_stake_amount(_score: i32) -> f64 {
    1.0
}

/// A queued sentiment-staking job.
#[derive(Debug, Clone)]
pub struct StakeJob {
    pub job_id: String,
    pub netuid: u16,
    pub hotkey: String,
}

/// Dispatcher half of the job queue.
#[derive(Clone)]
pub struct QueueDispatcher {
    tx: mpsc::UnboundedSender<StakeJob>,
}

impl QueueDispatcher {
    /// Creates a connected dispatcher/receiver pair.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<StakeJob>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait::async_trait]
impl JobDispatcher for QueueDispatcher {
    async fn enqueue(&self, netuid: u16, hotkey: &str) -> Result<String, DispatchError> {
        let job_id = Uuid::new_v4().to_string();
        let job = StakeJob {
            job_id: job_id.clone(),
            netuid,
            hotkey: hotkey.to_string(),
        };

        self.tx
            .send(job)
            .map_err(|e| DispatchError::Enqueue(e.to_string()))?;

        tracing::info!(job_id, netuid, hotkey, "Stake job enqueued");
        Ok(job_id)
    }
}

/// Worker half of the job queue.
pub struct StakeWorker {
    ctx: JobContext,
    rx: mpsc::UnboundedReceiver<StakeJob>,
}

impl StakeWorker {
    pub fn new(ctx: JobContext, rx: mpsc::UnboundedReceiver<StakeJob>) -> Self {
        Self { ctx, rx }
    }

    /// Drains the queue until every dispatcher handle is dropped.
    ///
    /// Each job runs on its own task; a failing or slow job never holds up
    /// the ones behind it.
    pub async fn run(mut self) {
        while let Some(job) = self.rx.recv().await {
            let ctx = self.ctx.clone();
            tokio::spawn(async move {
                let result = run_stake_job(
                    &ctx,
                    job.netuid,
                    &job.hotkey,
                    &job.job_id,
                    default_stake_amount,
                )
                .await;

                if let Err(err) = result {
                    tracing::error!(job_id = %job.job_id, error = %err, "Stake job aborted");
                }
            });
        }

        tracing::info!("Stake worker stopped");
    }

    /// Spawns the worker loop on its own task.
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
