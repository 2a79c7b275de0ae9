//! Backend gateway configuration.
//!
//! Loaded via the `config` crate from environment variables, e.g.
//! `BACKEND__BASE_URL=http://localhost:8080`.

use serde::Deserialize;

/// Configuration for reaching the application backend.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the backend, e.g. "http://localhost:8080".
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Environment wrapper so gateway settings nest under `BACKEND__`.
#[derive(Debug, Deserialize)]
struct GatewayEnv {
    backend: GatewayConfig,
}

impl GatewayConfig {
    /// Creates a configuration with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: default_timeout_seconds(),
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let env: GatewayEnv = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(env.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_default_timeout() {
        let config = GatewayConfig::new("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn timeout_default_applies_when_omitted() {
        let config: GatewayConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:8080"}"#)
                .expect("deserialize");
        assert_eq!(config.timeout_seconds, 30);
    }
}
