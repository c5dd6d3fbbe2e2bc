//! Application startup and lifecycle management.
//!
//! The listener is bound in [`Application::build`] so tests can pass
//! port 0 and read the assigned port back before spawning the server.

use crate::config::RelayConfig;
use crate::handlers::{health_check, notify, readiness_check};
use crate::services::{HttpWebhookSender, WebhookSender};
use axum::routing::{any, get};
use axum::Router;
use relay_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state: immutable configuration plus the outbound
/// sender (with its pooled HTTP client), both created once per process.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub webhook: Arc<dyn WebhookSender>,
}

/// Build the service router.
///
/// `/notify` is registered with `any` so that non-POST methods reach the
/// handler and get the same 400 as other malformed requests instead of a
/// routing-level 405.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/notify", any(notify))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: RelayConfig) -> Result<Self, AppError> {
        let webhook = HttpWebhookSender::new().map_err(|e| {
            tracing::error!("Failed to build outbound HTTP client: {}", e);
            AppError::InternalError(e)
        })?;

        let state = AppState {
            config: Arc::new(config),
            webhook: Arc::new(webhook),
        };

        // Port 0 = random port for testing.
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped or signalled.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
