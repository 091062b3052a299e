//! Stake job status handler.

use axum::{
    extract::{Path, State},
    Json,
};

use taodivs_core::jobs::{JobStoreError, StakeJobRecord};

use super::AppError;
use crate::state::AppState;

/// GET /api/v1/stake_jobs/{job_id} - Fetch a stake job record.
///
/// Returns the stored record in whatever state it is in; a job id the store
/// has never seen is a 404.
#[axum::debug_handler]
pub async fn get_stake_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<StakeJobRecord>, AppError> {
    match state.job_store.get(&job_id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(JobStoreError::NotFound { job_id }.into()),
    }
}
