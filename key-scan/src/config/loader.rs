use crate::config::types::ScanConfig;
use crate::config::validator::ConfigValidatorImpl;
use crate::error::{Result, ScanError};
use crate::traits::ConfigValidator;
use std::path::Path;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ScanConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<ScanConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a TOML file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ScanConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| ScanError::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        })?;

        let config: ScanConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load and validate, naming the file in every error
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<ScanConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ScanError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(ScanError::Io)?;

        let config: ScanConfig = toml::from_str(&content).map_err(|e| {
            ScanError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        ConfigValidatorImpl::new().validate_with_context(&config, path_ref)?;
        Ok(config)
    }
}

// Convenience functions maintaining the API
impl ScanConfig {
    /// Create a new config builder
    pub fn builder() -> crate::config::builder::ScanConfigBuilder {
        crate::config::builder::ScanConfigBuilder::new()
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration and validate it
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        ConfigValidatorImpl::new().validate(self)
    }
}
