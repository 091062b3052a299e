//! In-memory job store.
//!
//! HashMap behind a tokio RwLock. Records vanish on restart, which is fine
//! for tests and local development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use taodivs_core::jobs::{JobStore, JobStoreError, StakeJobRecord};

type Result<T> = std::result::Result<T, JobStoreError>;

/// In-memory job store keyed by job id.
#[derive(Debug, Clone, Default)]
pub struct MemoryJobStore {
    records: Arc<RwLock<HashMap<String, StakeJobRecord>>>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn insert(&self, record: &StakeJobRecord) -> Result<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.job_id) {
            return Err(JobStoreError::AlreadyExists {
                job_id: record.job_id.clone(),
            });
        }
        records.insert(record.job_id.clone(), record.clone());
        Ok(())
    }

    async fn update(&self, record: &StakeJobRecord) -> Result<()> {
        let mut records = self.records.write().await;
        match records.get_mut(&record.job_id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(JobStoreError::NotFound {
                job_id: record.job_id.clone(),
            }),
        }
    }

    async fn get(&self, job_id: &str) -> Result<Option<StakeJobRecord>> {
        Ok(self.records.read().await.get(job_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taodivs_core::jobs::JobStatus;

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = MemoryJobStore::new();
        let record = StakeJobRecord::pending("job1", 18, "hotkey");

        store.insert(&record).await.unwrap();

        let found = store.get("job1").await.unwrap().unwrap();
        assert_eq!(found.status, JobStatus::Pending);
        assert_eq!(found.netuid, 18);
    }

    #[tokio::test]
    async fn test_get_unknown_returns_none() {
        let store = MemoryJobStore::new();

        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_insert_rejected() {
        let store = MemoryJobStore::new();
        let record = StakeJobRecord::pending("job1", 18, "hotkey");

        store.insert(&record).await.unwrap();
        let err = store.insert(&record).await.unwrap_err();

        assert!(matches!(err, JobStoreError::AlreadyExists { job_id } if job_id == "job1"));
    }

    #[tokio::test]
    async fn test_pending_then_terminal() {
        let store = MemoryJobStore::new();
        let mut record = StakeJobRecord::pending("job1", 18, "hotkey");
        store.insert(&record).await.unwrap();

        record.status = JobStatus::Success;
        record.stake_amount = Some(1.0);
        store.update(&record).await.unwrap();

        let found = store.get("job1").await.unwrap().unwrap();
        assert_eq!(found.status, JobStatus::Success);
        assert_eq!(found.stake_amount, Some(1.0));
    }

    #[tokio::test]
    async fn test_update_missing_record() {
        let store = MemoryJobStore::new();
        let record = StakeJobRecord::pending("ghost", 18, "hotkey");

        let err = store.update(&record).await.unwrap_err();

        assert!(matches!(err, JobStoreError::NotFound { job_id } if job_id == "ghost"));
    }
}
