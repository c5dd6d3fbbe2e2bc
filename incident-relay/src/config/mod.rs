use relay_core::config as core_config;
use relay_core::error::AppError;
use secrecy::{ExposeSecret, Secret};
use std::env;

/// Service configuration, read once at startup and injected into handlers.
///
/// `AUTH_TOKEN` and `DESTINATION_WEBHOOK_URL` are tolerated missing at
/// load time: the notify handler reports them per request as 500s, which
/// keeps misconfiguration observable to callers and testable with an
/// explicitly empty config.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    /// Shared secret callers must present in the `auth_token` query parameter.
    pub auth_token: Secret<String>,
    /// Destination chat webhook receiving the transformed messages.
    pub destination_url: String,
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(RelayConfig {
            common,
            auth_token: Secret::new(env::var("AUTH_TOKEN").unwrap_or_default()),
            destination_url: env::var("DESTINATION_WEBHOOK_URL").unwrap_or_default(),
        })
    }

    /// Warn about unset values once at startup. Requests will still be
    /// answered (with 500s) so probes keep working.
    pub fn warn_if_incomplete(&self) {
        if self.auth_token.expose_secret().is_empty() {
            tracing::warn!("AUTH_TOKEN is not set; all notify requests will be rejected");
        }
        if self.destination_url.is_empty() {
            tracing::warn!(
                "DESTINATION_WEBHOOK_URL is not set; all notify requests will be rejected"
            );
        }
    }
}
