// src/config.rs
//! Settings for the demo controller.
//!
//! Values are layered, later sources overriding earlier ones:
//! 1. built-in defaults
//! 2. an optional `acapy-demo.toml` in the working directory
//! 3. environment variables prefixed with `ACAPY`, using `__` as the
//!    section separator (`ACAPY_AGENT__URL`, `ACAPY_WEBHOOK__PORT`, ...)
//!
//! A `.env` file is loaded into the environment first when present.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Connection details for the agent's admin API.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentSettings {
    /// Admin API URL, e.g. `http://localhost:11000`
    pub url: String,
    /// Sent as `X-API-KEY` when set
    pub api_key: Option<String>,
    #[serde(default)]
    pub tracing: bool,
    #[serde(default)]
    pub preserve_exchange_records: bool,
    #[serde(default)]
    pub auto_respond_credential_offer: bool,
}

/// Development ledger (von-network style) used to register DIDs.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerSettings {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookSettings {
    /// Port the webhook receiver listens on
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub agent: AgentSettings,
    pub ledger: LedgerSettings,
    pub webhook: WebhookSettings,
    /// Label used when registering a DID and creating invitations
    pub label: String,
}

impl Settings {
    /// Loads settings from defaults, `acapy-demo.toml` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::builder()?
            .add_source(File::with_name("acapy-demo").required(false))
            .add_source(
                Environment::with_prefix("ACAPY")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("agent.url", "http://localhost:11000")?
            .set_default("agent.tracing", false)?
            .set_default("agent.preserve_exchange_records", false)?
            .set_default("agent.auto_respond_credential_offer", false)?
            .set_default("ledger.url", "http://localhost:9000")?
            .set_default("webhook.port", 4455_i64)?
            .set_default("label", "Alice")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let settings: Settings = Settings::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.agent.url, "http://localhost:11000");
        assert!(settings.agent.api_key.is_none());
        assert_eq!(settings.ledger.url, "http://localhost:9000");
        assert_eq!(settings.webhook.port, 4455);
        assert_eq!(settings.label, "Alice");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let settings: Settings = Settings::builder()
            .unwrap()
            .set_override("agent.api_key", "secret")
            .unwrap()
            .set_override("webhook.port", 8000_i64)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.agent.api_key.as_deref(), Some("secret"));
        assert_eq!(settings.webhook.port, 8000);
    }
}
