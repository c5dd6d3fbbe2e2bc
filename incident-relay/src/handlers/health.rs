use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "incident-relay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe. The relay has no backing stores, so ready == alive.
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}
