use std::time::Duration;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        auth::{require_api_key, API_KEY_HEADER},
        dividends::get_tao_dividends,
        health::{healthz, livez},
        jobs::get_stake_job,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(API_KEY_HEADER),
        ]);

    // API routes behind the key check, with CORS
    let api_routes = Router::new()
        .route("/v1/tao_dividends", get(get_tao_dividends))
        .route("/v1/stake_jobs/{job_id}", get(get_stake_job))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .layer(cors);

    // Main application router; probes stay outside the key check
    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::state::testing::state_with_source;
    use taodivs_core::jobs::{JobStatus, JobStore, StakeJobRecord};

    fn authed(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("X-API-Key", "test-secret")
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_livez_needs_no_key() {
        let (state, _) = state_with_source(Ok(1.0));
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_reports_service() {
        let (state, _) = state_with_source(Ok(1.0));
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "taodivs");
    }

    #[tokio::test]
    async fn test_missing_api_key_is_unauthorized() {
        let (state, _) = state_with_source(Ok(1.0));
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/tao_dividends")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = json_body(response).await;
        assert_eq!(json["detail"], "Invalid or missing API key");
    }

    #[tokio::test]
    async fn test_wrong_api_key_is_unauthorized() {
        let (state, _) = state_with_source(Ok(1.0));
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/tao_dividends")
                    .header("X-API-Key", "wrong")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_dividends_miss_then_hit() {
        let (state, _) = state_with_source(Ok(123.45));
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(authed("/api/v1/tao_dividends?netuid=18&hotkey=5FFApa"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["netuid"], 18);
        assert_eq!(json["hotkey"], "5FFApa");
        assert_eq!(json["dividend"], 123.45);
        assert_eq!(json["cached"], false);
        assert_eq!(json["stake_tx_triggered"], false);

        // Same key again - served from cache
        let response = app
            .oneshot(authed("/api/v1/tao_dividends?netuid=18&hotkey=5FFApa"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["dividend"], 123.45);
        assert_eq!(json["cached"], true);
    }

    #[tokio::test]
    async fn test_dividends_defaults_applied() {
        let (state, _) = state_with_source(Ok(0.5));
        let app = create_app(state);

        let response = app.oneshot(authed("/api/v1/tao_dividends")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["netuid"], 18);
        assert_eq!(
            json["hotkey"],
            "5FFApaS75bv5pJHfAp2FVLBj9ZaXuFDjEypsaBNc1wCfe52v"
        );
    }

    #[tokio::test]
    async fn test_dividends_trade_reports_trigger() {
        let (state, _) = state_with_source(Ok(1.0));
        let app = create_app(state);

        let response = app
            .oneshot(authed("/api/v1/tao_dividends?netuid=1&hotkey=hk&trade=true"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["stake_tx_triggered"], true);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_service_unavailable() {
        let (state, _) = state_with_source(Err("connection refused".to_string()));
        let app = create_app(state);

        let response = app
            .oneshot(authed("/api/v1/tao_dividends?netuid=1&hotkey=hk"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = json_body(response).await;
        assert!(json["detail"]
            .as_str()
            .unwrap()
            .contains("Failed to query blockchain"));
    }

    #[tokio::test]
    async fn test_unknown_stake_job_is_not_found() {
        let (state, _) = state_with_source(Ok(1.0));
        let app = create_app(state);

        let response = app
            .oneshot(authed("/api/v1/stake_jobs/no-such-job"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stake_job_round_trip() {
        let (state, job_store) = state_with_source(Ok(1.0));
        let app = create_app(state);

        let mut record = StakeJobRecord::pending("job1", 18, "hotkey");
        record.status = JobStatus::Success;
        record.stake_amount = Some(1.0);
        job_store.insert(&record).await.unwrap();

        let response = app.oneshot(authed("/api/v1/stake_jobs/job1")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["job_id"], "job1");
        assert_eq!(json["status"], "success");
        assert_eq!(json["stake_amount"], 1.0);
    }
}
