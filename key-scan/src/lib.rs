//! Key Scan - probe discoverable APIs with an API key and classify the answers
//!
//! This crate fetches a catalog of API endpoints, issues one GET per endpoint
//! with the key as a query parameter, and sorts every response into
//! accessible, informative denial, invalid key, requires OAuth2 or other error.

// Core modules
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Main functionality modules
pub mod analysis;
pub mod catalog;
pub mod execution;
pub mod http;
pub mod renderers;
pub mod testing;

// Re-export main types for convenience
pub use analysis::{ClassificationRule, DenialCategory, ErrorClassifier, RuleClassifier};
pub use catalog::{parse_catalog, CatalogClient};
pub use config::{GlobalConfig, ScanConfig, ScanConfigBuilder};
pub use error::{Result, ScanError};
pub use execution::{DefaultScanRunner, ProgressCallback, ProgressTracker, ScanRunner};
pub use http::{DefaultProber, HttpProber};
pub use renderers::{JsonRenderer, OutputRenderer, TextRenderer};
pub use traits::{CatalogSource, Prober};
pub use types::{Credential, Outcome, OutcomeKind, ProbeResponse, ProbeTarget, ScanResults};

/// Fetch the catalog from `catalog` and probe every target with `runner`
pub async fn scan_catalog<C, P>(
    catalog: &C,
    runner: &ScanRunner<P>,
    credential: &Credential,
) -> Result<ScanResults>
where
    C: CatalogSource,
    P: Prober,
{
    let targets = catalog.fetch_catalog().await?;
    Ok(runner.execute(&targets, credential).await)
}

/// Execute a complete scan with the given configuration
pub async fn run_scan(config: &ScanConfig, credential: &Credential) -> Result<ScanResults> {
    let catalog = CatalogClient::new(config)?;
    let runner = DefaultScanRunner::from_config(config)?;
    scan_catalog(&catalog, &runner, credential).await
}
