use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, Method, StatusCode},
};
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::models::IncidentNotification;
use crate::services::{to_chat_message, DeliveryError};
use crate::startup::AppState;
use relay_core::error::AppError;

#[derive(Debug, Deserialize)]
pub struct NotifyParams {
    #[serde(default)]
    pub auth_token: Option<String>,
}

/// Single inbound route: validate, decode, transform, deliver.
///
/// Checks run in a fixed order and the pipeline stops at the first
/// failure; the request body is never inspected before validation
/// passes, and the destination is contacted at most once.
#[tracing::instrument(skip_all)]
pub async fn notify(
    State(state): State<AppState>,
    method: Method,
    Query(params): Query<NotifyParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, &'static str), AppError> {
    let secret = state.config.auth_token.expose_secret();
    if secret.is_empty() {
        tracing::error!("AUTH_TOKEN is not set in the environment");
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "AUTH_TOKEN is not set"
        )));
    }

    if params.auth_token.as_deref() != Some(secret.as_str()) {
        tracing::error!("Invalid auth_token provided");
        return Err(AppError::BadRequest(anyhow::anyhow!("Invalid Request")));
    }

    if state.config.destination_url.is_empty() {
        tracing::error!("DESTINATION_WEBHOOK_URL is not set in the environment");
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "DESTINATION_WEBHOOK_URL is not set"
        )));
    }

    let destination = reqwest::Url::parse(&state.config.destination_url).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse DESTINATION_WEBHOOK_URL");
        AppError::ConfigError(anyhow::anyhow!("DESTINATION_WEBHOOK_URL is malformed"))
    })?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    if method != Method::POST || content_type != Some("application/json") {
        tracing::error!(
            method = %method,
            content_type = content_type.unwrap_or("<none>"),
            "Invalid request method or content type"
        );
        return Err(AppError::BadRequest(anyhow::anyhow!("Invalid Request")));
    }

    let notification: IncidentNotification = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "Failed to decode notification payload");
        AppError::BadRequest(anyhow::anyhow!("Bad Request"))
    })?;

    let message = to_chat_message(&notification);

    let payload = serde_json::to_string(&message).map_err(|e| {
        tracing::error!(error = %e, "Failed to serialize chat message");
        AppError::InternalError(anyhow::Error::new(e))
    })?;

    if let Err(e) = state.webhook.deliver(destination, payload.clone()).await {
        match &e {
            DeliveryError::Rejected(status) => tracing::error!(
                status = *status,
                payload = %payload,
                "Destination webhook rejected notification"
            ),
            DeliveryError::Connection(msg) => tracing::error!(
                error = %msg,
                payload = %payload,
                "Failed to reach destination webhook"
            ),
        }
        return Err(AppError::BadGateway("Failed to send notification".into()));
    }

    tracing::info!(
        incident_id = %notification.incident.incident_id,
        state = %notification.incident.state,
        "Notification relayed"
    );

    Ok((StatusCode::OK, "OK"))
}
