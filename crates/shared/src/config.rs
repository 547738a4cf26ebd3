//! Application configuration management.
//!
//! Configuration is flat and environment-driven. Every key can also be set
//! from an optional `config/default` file, but the environment variable
//! names (`PORT`, `DATABASE_URL`, `TELLER_ACCESS_TOKEN`, ...) are the
//! canonical interface.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database connection URL. Required; startup fails without it.
    pub database_url: String,
    /// Shared secret protecting `POST /admin/refresh`. Refresh always
    /// answers 401 while this is unset.
    #[serde(default)]
    pub admin_refresh_secret: Option<String>,
    /// Base URL of the Teller API.
    #[serde(default = "default_teller_base_url")]
    pub teller_base_url: String,
    /// Teller access token (Basic auth, token as username, empty password).
    #[serde(default)]
    pub teller_access_token: Option<String>,
    /// Teller API key, paired with the access token when both are set.
    #[serde(default)]
    pub teller_api_key: Option<String>,
    /// Teller bearer token.
    #[serde(default)]
    pub teller_token: Option<String>,
    /// Teller application id (Basic auth with the application secret).
    #[serde(default)]
    pub teller_application_id: Option<String>,
    /// Teller application secret.
    #[serde(default)]
    pub teller_application_secret: Option<String>,
    /// Account id used by the live transactions endpoint.
    #[serde(default)]
    pub teller_account_id: Option<String>,
    /// Path to a PEM client certificate for mutual TLS.
    #[serde(default)]
    pub teller_client_cert_path: Option<String>,
    /// Path to the PEM private key belonging to the client certificate.
    #[serde(default)]
    pub teller_client_key_path: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    10000
}

fn default_teller_base_url() -> String {
    "https://api.teller.io".to_string()
}

impl AppConfig {
    /// Loads configuration from the environment and optional config files.
    ///
    /// # Errors
    ///
    /// Returns an error if a required value (`DATABASE_URL`) is missing or a
    /// value cannot be deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::default())
            .build()?;

        config.try_deserialize()
    }
}
