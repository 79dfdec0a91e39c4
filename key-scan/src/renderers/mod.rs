//! Report renderers for different output formats
//!
//! Renderers only read [`ScanResults`]; they sort on output so a report
//! depends on the recorded entries, never on probe order.

use crate::types::ScanResults;

/// Simple trait for rendering scan results in different formats
pub trait OutputRenderer {
    /// Render scan results to a string in the specific format
    fn render(&self, results: &ScanResults) -> String;
}

// Sub-modules
pub mod json;
pub mod text;

// Re-exports for convenience
pub use json::JsonRenderer;
pub use text::TextRenderer;
