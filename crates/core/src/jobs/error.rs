use thiserror::Error;

/// Errors occurring inside a stake job run.
///
/// None of these propagate beyond the job boundary: evidence, scoring, and
/// actuation failures collapse into the job's terminal `failed` record, and
/// `Persistence` only escapes [`run_stake_job`](super::run_stake_job) when
/// the initial pending insert cannot be written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error("Evidence fetch failed: {0}")]
    Evidence(String),
    #[error("Sentiment scoring failed: {0}")]
    Scoring(String),
    #[error("Stake actuation failed: {0}")]
    Actuation(String),
    #[error("Job persistence unavailable: {0}")]
    Persistence(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evidence_display() {
        let error = JobError::Evidence("datura 500".to_string());
        assert_eq!(error.to_string(), "Evidence fetch failed: datura 500");
    }

    #[test]
    fn test_scoring_display() {
        let error = JobError::Scoring("score out of range: 250".to_string());
        assert_eq!(
            error.to_string(),
            "Sentiment scoring failed: score out of range: 250"
        );
    }

    #[test]
    fn test_actuation_display() {
        let error = JobError::Actuation("insufficient balance".to_string());
        assert_eq!(
            error.to_string(),
            "Stake actuation failed: insufficient balance"
        );
    }

    #[test]
    fn test_persistence_display() {
        let error = JobError::Persistence("db locked".to_string());
        assert_eq!(error.to_string(), "Job persistence unavailable: db locked");
    }
}
