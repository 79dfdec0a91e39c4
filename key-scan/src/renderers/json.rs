//! JSON renderer for structured output

use super::OutputRenderer;
use crate::types::{OutcomeKind, ScanResults};
use serde::Serialize;

/// Buckets in report order, each sorted like the text report
#[derive(Serialize)]
struct SortedResults<'a> {
    accessible: Vec<&'a str>,
    informative_denials: Vec<&'a str>,
    key_invalid: Vec<&'a str>,
    requires_oauth: Vec<&'a str>,
    other_errors: Vec<&'a str>,
    total: usize,
}

impl<'a> From<&'a ScanResults> for SortedResults<'a> {
    fn from(results: &'a ScanResults) -> Self {
        Self {
            accessible: results.sorted_entries(OutcomeKind::Accessible),
            informative_denials: results.sorted_entries(OutcomeKind::InformativeDenial),
            key_invalid: results.sorted_entries(OutcomeKind::CredentialInvalid),
            requires_oauth: results.sorted_entries(OutcomeKind::AuthSchemeUnsupported),
            other_errors: results.sorted_entries(OutcomeKind::OtherError),
            total: results.total(),
        }
    }
}

/// JSON renderer that produces pretty-printed JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, results: &ScanResults) -> String {
        serde_json::to_string_pretty(&SortedResults::from(results))
            .unwrap_or_else(|_| "{}".to_string())
    }
}
