use crate::error::{CliError, Result};
use log::LevelFilter;

/// Parse a `--log-level` value
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(CliError::InvalidLogLevel(other.to_string())),
    }
}

/// Initialise env_logger on stderr; `--verbose` raises the floor to debug
pub fn init(level: &str, verbose: bool) -> Result<()> {
    let mut level = parse_level(level)?;
    if verbose && level < LevelFilter::Debug {
        level = LevelFilter::Debug;
    }

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module("key_scan", level)
        .filter_module("keyscan", level)
        .format_timestamp(None)
        .try_init()
        .map_err(|e| CliError::Other(format!("Failed to initialise logging: {e}")))
}
