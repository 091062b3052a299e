//! Dividend query handler.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use taodivs_core::dividends::DividendResponse;

use super::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DividendParams {
    pub netuid: Option<u16>,
    pub hotkey: Option<String>,
    #[serde(default)]
    pub trade: bool,
}

/// GET /api/v1/tao_dividends - Resolve the current dividend for a hotkey.
///
/// `netuid` and `hotkey` fall back to configured defaults. With `trade=true`
/// a sentiment-staking job is enqueued; the response reports the trigger,
/// not the job's outcome.
#[axum::debug_handler]
pub async fn get_tao_dividends(
    State(state): State<AppState>,
    Query(params): Query<DividendParams>,
) -> Result<Json<DividendResponse>, AppError> {
    let netuid = params.netuid.unwrap_or(state.default_netuid);
    let hotkey = params
        .hotkey
        .unwrap_or_else(|| state.default_hotkey.to_string());

    tracing::info!(netuid, %hotkey, trade = params.trade, "Processing dividend request");

    let response = state.resolver.resolve(netuid, &hotkey, params.trade).await?;

    Ok(Json(response))
}
