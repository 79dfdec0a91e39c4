use crate::analysis::{default_rules, ClassificationRule};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Google API Discovery Service directory listing
pub const DEFAULT_DISCOVERY_URL: &str = "https://www.googleapis.com/discovery/v1/apis";

/// Per-request timeout
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Pause after every probe so the scan stays under upstream rate limits
pub const DEFAULT_DELAY_MS: u64 = 50;

pub const DEFAULT_USER_AGENT: &str = concat!("keyscan/", env!("CARGO_PKG_VERSION"));

/// Main configuration structure for a key scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Global configuration settings
    pub global: Option<GlobalConfig>,
    /// Ordered classification rules, replacing the built-in table when present
    pub rules: Option<Vec<ClassificationRule>>,
}

/// Global configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GlobalConfig {
    /// Catalog listing the APIs to probe
    pub discovery_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Pause after each probe in milliseconds
    pub delay_ms: Option<u64>,
    /// Skip TLS certificate and hostname verification
    pub insecure_tls: Option<bool>,
    /// User-Agent header sent with every request
    pub user_agent: Option<String>,
}

/// Default implementation for GlobalConfig
impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            discovery_url: Some(DEFAULT_DISCOVERY_URL.to_string()),
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECONDS),
            delay_ms: Some(DEFAULT_DELAY_MS),
            insecure_tls: Some(false),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
        }
    }
}

impl ScanConfig {
    pub fn discovery_url(&self) -> &str {
        self.global
            .as_ref()
            .and_then(|g| g.discovery_url.as_deref())
            .unwrap_or(DEFAULT_DISCOVERY_URL)
    }

    pub fn timeout(&self) -> Duration {
        let seconds = self
            .global
            .as_ref()
            .and_then(|g| g.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        Duration::from_secs(seconds)
    }

    pub fn delay(&self) -> Duration {
        let millis = self
            .global
            .as_ref()
            .and_then(|g| g.delay_ms)
            .unwrap_or(DEFAULT_DELAY_MS);
        Duration::from_millis(millis)
    }

    pub fn insecure_tls(&self) -> bool {
        self.global
            .as_ref()
            .and_then(|g| g.insecure_tls)
            .unwrap_or(false)
    }

    pub fn user_agent(&self) -> &str {
        self.global
            .as_ref()
            .and_then(|g| g.user_agent.as_deref())
            .unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Configured rule table, or the built-in Google rules
    pub fn classification_rules(&self) -> Vec<ClassificationRule> {
        self.rules.clone().unwrap_or_else(default_rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_global_section() {
        let config = ScanConfig::default();

        assert_eq!(config.discovery_url(), DEFAULT_DISCOVERY_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.delay(), Duration::from_millis(50));
        assert!(!config.insecure_tls());
        assert!(config.user_agent().starts_with("keyscan/"));
        assert_eq!(config.classification_rules(), default_rules());
    }

    #[test]
    fn test_partial_global_section_falls_back_per_field() {
        let config = ScanConfig {
            global: Some(GlobalConfig {
                discovery_url: None,
                timeout_seconds: Some(3),
                delay_ms: None,
                insecure_tls: Some(true),
                user_agent: None,
            }),
            rules: None,
        };

        assert_eq!(config.discovery_url(), DEFAULT_DISCOVERY_URL);
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.delay(), Duration::from_millis(DEFAULT_DELAY_MS));
        assert!(config.insecure_tls());
    }
}
