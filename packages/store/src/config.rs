//! # Dashboard configuration: `Dashboard.toml`
//!
//! Defines the TOML configuration compiled into the web binary. It tells the
//! client where the backend lives and how long to wait for it.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"   # REST endpoints
//! public_url = "http://localhost:8000"     # HTML report viewer
//! timeout_secs = 10                        # 0 disables the timeout
//!
//! [chat]
//! ask_url = "http://localhost:5005/ask"    # question-answering service
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DashboardConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | REST backend location and request timeout (default **10 seconds**). |
//! | [`ChatConfig`] | Chat assistant endpoint. |
//!
//! Every field has a default so a missing or empty file is equivalent to the
//! default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::StoreError;

/// Top-level configuration stored in `Dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

/// REST backend configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every REST path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Public site URL serving rendered HTML reports.
    #[serde(default = "default_public_url")]
    pub public_url: String,
    /// Upper bound for a single request, in seconds. 0 disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_public_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            public_url: default_public_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Chat assistant configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_ask_url")]
    pub ask_url: String,
}

fn default_ask_url() -> String {
    "http://localhost:5005/ask".to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            ask_url: default_ask_url(),
        }
    }
}

impl DashboardConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "Dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse `s`, falling back to defaults when it does not decode.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("Using default configuration: {}", e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = DashboardConfig::from_toml(
            r#"
            [api]
            base_url = "https://scanlink.example.com/api"
            timeout_secs = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://scanlink.example.com/api");
        assert_eq!(config.api.public_url, "http://localhost:8000");
        assert!(config.api.timeout().is_none());
        assert_eq!(config.chat.ask_url, "http://localhost:5005/ask");
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let config = DashboardConfig::from_toml_or_default("[api\nbase_url = 3");
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_to_toml_parses_back() {
        let config = DashboardConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(DashboardConfig::from_toml(&text).unwrap(), config);
    }
}
