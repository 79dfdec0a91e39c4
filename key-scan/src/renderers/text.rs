//! Plain text report, identical on stdout and in the saved file

use crate::renderers::OutputRenderer;
use crate::types::{OutcomeKind, ScanResults};

const REPORT_TITLE: &str = "--- Google API Key Scan Report ---";
const REPORT_FOOTER: &str = "Scan complete.";

struct Section {
    kind: OutcomeKind,
    heading: &'static str,
    underline: usize,
    description: &'static str,
}

const SECTIONS: [Section; 5] = [
    Section {
        kind: OutcomeKind::Accessible,
        heading: "[+] ACCESSIBLE APIS",
        underline: 20,
        description: "The key has some level of access to the following APIs:",
    },
    Section {
        kind: OutcomeKind::InformativeDenial,
        heading: "[*] ACTIONABLE INTELLIGENCE: INFORMATIVE DENIALS",
        underline: 50,
        description: "The key was denied, but the error messages reveal the key's associated project ID and that the following APIs could potentially be enabled:",
    },
    Section {
        kind: OutcomeKind::CredentialInvalid,
        heading: "[-] DENIED: API KEY INVALID",
        underline: 28,
        description: "The key was explicitly rejected by these APIs.",
    },
    Section {
        kind: OutcomeKind::AuthSchemeUnsupported,
        heading: "[*] INFO: REQUIRES OAUTH2",
        underline: 25,
        description: "These APIs do not support API keys for authentication and require OAuth2.",
    },
    Section {
        kind: OutcomeKind::OtherError,
        heading: "[!] OTHER ERRORS",
        underline: 16,
        description: "These APIs failed in a way no classification rule recognised:",
    },
];

/// Text renderer producing the operator report
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    /// Whether to render the other-errors section
    pub include_errors: bool,
}

impl TextRenderer {
    /// Create a renderer for the four standard sections
    pub fn new() -> Self {
        Self::default()
    }

    /// Also list targets that ended in an unclassified error
    pub fn with_errors() -> Self {
        Self {
            include_errors: true,
        }
    }
}

impl OutputRenderer for TextRenderer {
    fn render(&self, results: &ScanResults) -> String {
        let mut output = vec![REPORT_TITLE.to_string()];

        for section in &SECTIONS {
            if section.kind == OutcomeKind::OtherError && !self.include_errors {
                continue;
            }

            let entries = results.sorted_entries(section.kind);
            if entries.is_empty() {
                continue;
            }

            output.push(format!("\n{}", section.heading));
            output.push("=".repeat(section.underline));
            output.push(section.description.to_string());
            output.extend(entries.iter().map(|item| format!("  - {}", item)));
        }

        output.push(format!("\n{}", REPORT_FOOTER));
        output.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome;

    fn sample_results() -> ScanResults {
        let mut results = ScanResults::new();
        results.record(&Outcome::CredentialInvalid, "Maps API");
        results.record(&Outcome::Accessible, "Drive API");
        results.record(&Outcome::Accessible, "Books API");
        results.record(&Outcome::transport_failure("Timeout"), "Slow API");
        results
    }

    #[test]
    fn test_exact_layout() {
        let report = TextRenderer::new().render(&sample_results());

        let expected = "--- Google API Key Scan Report ---\n\
\n\
[+] ACCESSIBLE APIS\n\
====================\n\
The key has some level of access to the following APIs:\n  - Books API\n  - Drive API\n\
\n\
[-] DENIED: API KEY INVALID\n\
============================\n\
The key was explicitly rejected by these APIs.\n  - Maps API\n\
\n\
Scan complete.";

        assert_eq!(report, expected);
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let report = TextRenderer::new().render(&sample_results());

        assert!(!report.contains("INFORMATIVE DENIALS"));
        assert!(!report.contains("REQUIRES OAUTH2"));
        assert!(!report.contains("OTHER ERRORS"));
        assert!(!report.contains("Slow API"));
    }

    #[test]
    fn test_empty_results() {
        let report = TextRenderer::new().render(&ScanResults::new());
        assert_eq!(report, "--- Google API Key Scan Report ---\n\nScan complete.");
    }

    #[test]
    fn test_section_order_is_fixed() {
        let mut results = ScanResults::new();
        results.record(&Outcome::AuthSchemeUnsupported, "Gmail API");
        results.record(&Outcome::CredentialInvalid, "Maps API");
        results.record(
            &Outcome::InformativeDenial { project_id: Some("p-1".to_string()) },
            "Sheets API",
        );
        results.record(&Outcome::Accessible, "Drive API");

        let report = TextRenderer::new().render(&results);
        let positions: Vec<usize> = [
            "ACCESSIBLE APIS",
            "INFORMATIVE DENIALS",
            "DENIED: API KEY INVALID",
            "REQUIRES OAUTH2",
        ]
        .iter()
        .map(|heading| report.find(heading).unwrap())
        .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(report.contains("  - Sheets API (Project: p-1)"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut shuffled = ScanResults::new();
        shuffled.record(&Outcome::Accessible, "Books API");
        shuffled.record(&Outcome::CredentialInvalid, "Maps API");
        shuffled.record(&Outcome::Accessible, "Drive API");

        let renderer = TextRenderer::new();
        assert_eq!(renderer.render(&sample_results()), renderer.render(&sample_results()));
        assert_eq!(
            renderer.render(&sample_results()),
            renderer.render(&shuffled),
            "insertion order must not leak into the report"
        );
    }

    #[test]
    fn test_other_errors_section_when_enabled() {
        let report = TextRenderer::with_errors().render(&sample_results());

        assert!(report.contains("[!] OTHER ERRORS\n================\n"));
        assert!(report.contains("  - Slow API: ERROR (Timeout)"));
        assert!(report.find("OTHER ERRORS").unwrap() > report.find("API KEY INVALID").unwrap());
        assert!(report.ends_with("Scan complete."));
    }
}
