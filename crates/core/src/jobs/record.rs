use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a stake job.
///
/// `Pending` transitions to exactly one of `Success` or `Failed`; terminal
/// states are never revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Success,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }

    /// Parses a status from its stored string form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "success" => Some(Self::Success),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable record of one sentiment-staking job.
///
/// Keyed by the dispatcher-assigned job id. Written twice by the worker
/// owning the job: the pending insert before any side effect, then the
/// terminal update. Never deleted by this subsystem; retention is an
/// operator concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeJobRecord {
    pub job_id: String,
    pub status: JobStatus,
    pub netuid: u16,
    pub hotkey: String,
    /// Signed amount the decision step produced, recorded even when the
    /// actuation afterwards fails so operators can see what would have
    /// happened.
    pub stake_amount: Option<f64>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StakeJobRecord {
    /// Creates a fresh pending record with both timestamps set to now.
    pub fn pending(job_id: impl Into<String>, netuid: u16, hotkey: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            job_id: job_id.into(),
            status: JobStatus::Pending,
            netuid,
            hotkey: hotkey.into(),
            stake_amount: None,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }
}
