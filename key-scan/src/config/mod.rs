pub mod types;
pub mod loader;
pub mod builder;
pub mod validator;
pub mod templates;

pub use types::{
    GlobalConfig, ScanConfig, DEFAULT_DELAY_MS, DEFAULT_DISCOVERY_URL, DEFAULT_TIMEOUT_SECONDS,
    DEFAULT_USER_AGENT,
};
pub use loader::{ConfigLoader, DefaultConfigLoader};
pub use builder::ScanConfigBuilder;
pub use validator::ConfigValidatorImpl;
pub use templates::{generate_default_config_template, write_default_config};
