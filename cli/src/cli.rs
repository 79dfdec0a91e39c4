use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keyscan")]
#[command(
    author,
    version,
    about = "Scan all discoverable Google APIs with a given key to check for permissions"
)]
pub struct Cli {
    /// The API key to test
    #[clap(short, long, required_unless_present = "init_config")]
    pub key: Option<String>,

    /// Optional path to save the report to a file
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file with scan settings and classification rules
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Override the API catalog URL
    #[clap(long)]
    pub discovery_url: Option<String>,

    /// Per-request timeout in seconds (defaults to 10)
    #[clap(long)]
    pub timeout: Option<u64>,

    /// Pause after each probe in milliseconds (defaults to 50)
    #[clap(long)]
    pub delay_ms: Option<u64>,

    /// Disable TLS certificate and hostname verification
    #[clap(long, default_value_t = false)]
    pub insecure: bool,

    /// Report format
    #[clap(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// List APIs that failed with an unclassified error in the report
    #[clap(short = 'E', long, default_value_t = false)]
    pub show_errors: bool,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Log level for diagnostics on stderr (error, warn, info, debug, trace)
    #[clap(long, default_value = "warn")]
    pub log_level: String,

    /// Write a default configuration file to this path and exit
    #[clap(long, value_name = "PATH")]
    pub init_config: Option<PathBuf>,

    /// Overwrite an existing file with --init-config
    #[clap(long, default_value_t = false, requires = "init_config")]
    pub force: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    /// Sectioned plain text report - default
    Text,

    /// Sorted buckets as a JSON object
    Json,
}
