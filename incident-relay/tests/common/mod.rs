use incident_relay::config::RelayConfig;
use incident_relay::startup::Application;
use relay_core::config::Config as CoreConfig;
use secrecy::Secret;

pub const TEST_TOKEN: &str = "test-secret";

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the relay on a random port with an explicit configuration.
    pub async fn spawn_with(auth_token: &str, destination_url: &str) -> Self {
        let config = RelayConfig {
            common: CoreConfig {
                port: 0,
                log_level: "info".to_string(),
            },
            auth_token: Secret::new(auth_token.to_string()),
            destination_url: destination_url.to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
        }
    }

    /// Spawn with the default test token.
    pub async fn spawn(destination_url: &str) -> Self {
        Self::spawn_with(TEST_TOKEN, destination_url).await
    }

    pub fn notify_url(&self, token: &str) -> String {
        format!("{}/notify?auth_token={}", self.address, token)
    }
}
