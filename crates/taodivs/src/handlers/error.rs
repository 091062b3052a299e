use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use taodivs_core::dividends::DividendError;
use taodivs_core::jobs::JobStoreError;

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if self.0.downcast_ref::<DividendError>().is_some() {
            StatusCode::SERVICE_UNAVAILABLE
        } else if matches!(
            self.0.downcast_ref::<JobStoreError>(),
            Some(JobStoreError::NotFound { .. })
        ) {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (
            status_code,
            Json(serde_json::json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
