use crate::analysis::ClassificationRule;
use crate::config::types::{GlobalConfig, ScanConfig};
use crate::error::Result;

/// Builder for ScanConfig, used to layer CLI flags over a loaded file
pub struct ScanConfigBuilder {
    global: Option<GlobalConfig>,
    rules: Option<Vec<ClassificationRule>>,
}

impl ScanConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self {
            global: None,
            rules: None,
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: ScanConfig) -> Self {
        Self {
            global: config.global,
            rules: config.rules,
        }
    }

    fn update_global(mut self, update: impl FnOnce(&mut GlobalConfig)) -> Self {
        let mut global = self.global.unwrap_or_default();
        update(&mut global);
        self.global = Some(global);
        self
    }

    /// Set the discovery catalog URL
    #[must_use]
    pub fn discovery_url<S: Into<String>>(self, url: S) -> Self {
        let url = url.into();
        self.update_global(|g| g.discovery_url = Some(url))
    }

    /// Set timeout in seconds
    #[must_use]
    pub fn timeout(self, seconds: u64) -> Self {
        self.update_global(|g| g.timeout_seconds = Some(seconds))
    }

    /// Set the pause after each probe
    #[must_use]
    pub fn delay_ms(self, millis: u64) -> Self {
        self.update_global(|g| g.delay_ms = Some(millis))
    }

    /// Skip TLS verification
    #[must_use]
    pub fn insecure_tls(self, insecure: bool) -> Self {
        self.update_global(|g| g.insecure_tls = Some(insecure))
    }

    #[must_use]
    pub fn user_agent<S: Into<String>>(self, user_agent: S) -> Self {
        let user_agent = user_agent.into();
        self.update_global(|g| g.user_agent = Some(user_agent))
    }

    /// Replace the classification rule table
    #[must_use]
    pub fn rules(mut self, rules: Vec<ClassificationRule>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ScanConfig> {
        let config = ScanConfig {
            global: self.global,
            rules: self.rules,
        };

        config.validate()?;
        Ok(config)
    }
}

impl Default for ScanConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
