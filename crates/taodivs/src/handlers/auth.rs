//! API key middleware.
//!
//! All `/api` routes require the configured secret in the `X-API-Key`
//! header. Failures are reported uniformly; the response never says whether
//! the header was missing or merely wrong.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if provided == Some(state.api_key.as_ref()) {
        return next.run(request).await;
    }

    tracing::warn!("Rejected request with invalid or missing API key");
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "detail": "Invalid or missing API key" })),
    )
        .into_response()
}
