//! Discovery catalog retrieval
//!
//! The catalog is a JSON document with an `items` array. Each item names an
//! API (`title`, falling back to `name` and `id`) and its base endpoint
//! (`baseUrl`, falling back to `rootUrl`). Items without an endpoint are
//! skipped.

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::http::build_client;
use crate::traits::CatalogSource;
use crate::types::ProbeTarget;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// The directory listing is much larger than a probe response
const CATALOG_TIMEOUT: Duration = Duration::from_secs(30);

const UNNAMED_API: &str = "Unnamed API";

#[derive(Debug, Deserialize)]
struct DiscoveryDirectory {
    #[serde(default)]
    items: Vec<DiscoveryItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiscoveryItem {
    id: Option<String>,
    name: Option<String>,
    title: Option<String>,
    base_url: Option<String>,
    root_url: Option<String>,
}

impl DiscoveryItem {
    fn into_target(self) -> Option<ProbeTarget> {
        let endpoint = non_empty(self.base_url).or_else(|| non_empty(self.root_url))?;
        let name = non_empty(self.title)
            .or_else(|| non_empty(self.name))
            .or_else(|| non_empty(self.id))
            .unwrap_or_else(|| UNNAMED_API.to_string());

        Some(ProbeTarget { name, endpoint })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a catalog payload into probe targets, in catalog order
pub fn parse_catalog(body: &str) -> Result<Vec<ProbeTarget>> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        ScanError::catalog_unavailable(format!("unexpected catalog payload: {}", e))
    })?;

    // serde accepts a sequence for a struct, so `[]` would pass as an empty directory
    if !value.is_object() {
        return Err(ScanError::catalog_unavailable(
            "unexpected catalog payload: expected a JSON object",
        ));
    }

    let directory: DiscoveryDirectory = serde_json::from_value(value).map_err(|e| {
        ScanError::catalog_unavailable(format!("unexpected catalog payload: {}", e))
    })?;

    let total = directory.items.len();
    let targets: Vec<ProbeTarget> = directory
        .items
        .into_iter()
        .filter_map(DiscoveryItem::into_target)
        .collect();

    if targets.len() < total {
        debug!(
            "Skipped {} catalog entries without a base endpoint",
            total - targets.len()
        );
    }

    Ok(targets)
}

/// Fetches the catalog over HTTP
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    url: String,
}

impl CatalogClient {
    /// Create a catalog client for the configured discovery URL
    pub fn new(config: &ScanConfig) -> Result<Self> {
        let client = build_client(config)?;
        Ok(Self::with_client(client, config.discovery_url()))
    }

    /// Reuse an existing reqwest client
    pub fn with_client<S: Into<String>>(client: Client, url: S) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for CatalogClient {
    async fn fetch_catalog(&self) -> Result<Vec<ProbeTarget>> {
        let response = self
            .client
            .get(&self.url)
            .timeout(CATALOG_TIMEOUT)
            .send()
            .await
            .map_err(|e| ScanError::catalog_unavailable(format!("{}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::catalog_unavailable(format!("HTTP {}", status.as_u16())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScanError::catalog_unavailable(format!("{}", e)))?;

        parse_catalog(&body)
    }
}
