use crate::error::{Result, ScanError};
use std::path::Path;

/// Generate the default keyscan.toml template
pub fn generate_default_config_template() -> String {
    r#"# keyscan configuration
# Every setting is optional; command line flags override this file.

[global]
# Catalog listing the APIs to probe
discovery_url = "https://www.googleapis.com/discovery/v1/apis"
# Request timeout in seconds
timeout_seconds = 10
# Pause after each probe in milliseconds
delay_ms = 50
# Skip TLS certificate and hostname verification (not recommended)
insecure_tls = false

# Classification rules, checked in order against the error message of every
# non-2xx response. The first rule with a matching pattern wins.
# Categories: informative_denial, credential_invalid, auth_scheme_unsupported
[[rules]]
category = "informative_denial"
patterns = ["API has not been used", "is disabled"]

[[rules]]
category = "credential_invalid"
patterns = ["API key not valid"]

[[rules]]
category = "auth_scheme_unsupported"
patterns = ["API keys are not supported"]
"#
    .to_string()
}

/// Write the default template to `path`.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn write_default_config<P: AsRef<Path>>(path: P, force: bool) -> Result<()> {
    let path = path.as_ref();

    if path.exists() && !force {
        return Err(ScanError::invalid_config(format!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        )));
    }

    std::fs::write(path, generate_default_config_template())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::default_rules;
    use crate::config::ScanConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_matches_builtin_defaults() {
        let config: ScanConfig = toml::from_str(&generate_default_config_template()).unwrap();

        assert_eq!(config.classification_rules(), default_rules());
        assert_eq!(config.timeout().as_secs(), 10);
        assert_eq!(config.delay().as_millis(), 50);
        assert!(!config.insecure_tls());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_write_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("keyscan.toml");

        write_default_config(&path, false).unwrap();
        assert!(path.exists());

        assert!(write_default_config(&path, false).is_err());
        assert!(write_default_config(&path, true).is_ok());
    }
}
