use crate::config::types::ScanConfig;
use crate::error::{Result, ScanError};
use crate::traits::ConfigValidator;
use std::path::Path;

/// Configuration validator implementation
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = ScanConfig;

    fn validate(&self, config: &ScanConfig) -> Result<()> {
        self.validate_with_context(config, "configuration")
    }
}

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validation naming the config source in error messages
    pub fn validate_with_context<P: AsRef<Path>>(
        &self,
        config: &ScanConfig,
        config_path: P,
    ) -> Result<()> {
        let config_path_str = config_path.as_ref().to_string_lossy();

        let discovery_url = config.discovery_url();
        if discovery_url.trim().is_empty() {
            return Err(ScanError::invalid_config(format!(
                "Empty discovery_url in {}",
                config_path_str
            )));
        }

        if let Err(e) = url::Url::parse(discovery_url) {
            return Err(ScanError::invalid_config(format!(
                "Invalid discovery_url '{}' in {}: {}",
                discovery_url, config_path_str, e
            )));
        }

        if config.timeout().is_zero() {
            return Err(ScanError::invalid_config(format!(
                "timeout_seconds must be greater than zero in {}",
                config_path_str
            )));
        }

        if let Some(rules) = &config.rules {
            if rules.is_empty() {
                return Err(ScanError::invalid_config(format!(
                    "Empty [[rules]] table in {}. Remove it to use the built-in rules.",
                    config_path_str
                )));
            }

            for (index, rule) in rules.iter().enumerate() {
                if rule.patterns.is_empty() {
                    return Err(ScanError::invalid_config(format!(
                        "Rule #{} ({:?}) in {} has no patterns",
                        index + 1,
                        rule.category,
                        config_path_str
                    )));
                }

                // A blank pattern is a substring of every message
                if rule.patterns.iter().any(|p| p.trim().is_empty()) {
                    return Err(ScanError::invalid_config(format!(
                        "Rule #{} ({:?}) in {} has a blank pattern",
                        index + 1,
                        rule.category,
                        config_path_str
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidatorImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ClassificationRule, DenialCategory};
    use crate::config::GlobalConfig;

    fn config_with_global(global: GlobalConfig) -> ScanConfig {
        ScanConfig {
            global: Some(global),
            rules: None,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let validator = ConfigValidatorImpl::new();
        assert!(validator.validate(&ScanConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let validator = ConfigValidatorImpl::new();
        let config = config_with_global(GlobalConfig {
            timeout_seconds: Some(0),
            ..GlobalConfig::default()
        });

        let error = validator.validate(&config).unwrap_err();
        assert!(error.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn test_bad_discovery_url_rejected() {
        let validator = ConfigValidatorImpl::new();

        let config = config_with_global(GlobalConfig {
            discovery_url: Some("   ".to_string()),
            ..GlobalConfig::default()
        });
        assert!(validator.validate(&config).is_err());

        let config = config_with_global(GlobalConfig {
            discovery_url: Some("not a url".to_string()),
            ..GlobalConfig::default()
        });
        assert!(validator.validate(&config).is_err());
    }

    #[test]
    fn test_rules_need_patterns() {
        let validator = ConfigValidatorImpl::new();

        let empty_table = ScanConfig {
            global: None,
            rules: Some(vec![]),
        };
        assert!(validator.validate(&empty_table).is_err());

        let empty_patterns = ScanConfig {
            global: None,
            rules: Some(vec![ClassificationRule::new(
                DenialCategory::CredentialInvalid,
                vec![""],
            )]),
        };
        let error = validator
            .validate_with_context(&empty_patterns, "keyscan.toml")
            .unwrap_err();
        assert!(error.to_string().contains("Rule #1"));
        assert!(error.to_string().contains("keyscan.toml"));

        let no_patterns = ScanConfig {
            global: None,
            rules: Some(vec![ClassificationRule::new(
                DenialCategory::CredentialInvalid,
                Vec::<String>::new(),
            )]),
        };
        assert!(validator.validate(&no_patterns).is_err());
    }

    #[test]
    fn test_blank_pattern_next_to_real_one_rejected() {
        let validator = ConfigValidatorImpl::new();

        for blank in ["", "   "] {
            let config = ScanConfig {
                global: None,
                rules: Some(vec![
                    ClassificationRule::new(DenialCategory::InformativeDenial, vec!["is disabled"]),
                    ClassificationRule::new(
                        DenialCategory::CredentialInvalid,
                        vec![blank, "API key not valid"],
                    ),
                ]),
            };

            let error = validator.validate(&config).unwrap_err();
            assert!(error.to_string().contains("Rule #2"));
            assert!(error.to_string().contains("blank pattern"));
        }
    }
}
