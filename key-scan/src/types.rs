use serde::{Deserialize, Serialize};
use std::fmt;

/// One discoverable service endpoint to be tested with the credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeTarget {
    /// Human readable API name, used in every report line
    pub name: String,
    /// Base URL the credential is appended to
    pub endpoint: String,
}

impl ProbeTarget {
    pub fn new<S: Into<String>>(name: S, endpoint: S) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }
}

/// The API key under test.
///
/// The raw value is only reachable through [`Credential::expose`]; both
/// `Debug` and `Display` print the masked form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self(key.into())
    }

    /// Raw key, as sent on the wire
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Last four characters prefixed with an ellipsis, e.g. `...wXyZ`
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("...{}", tail)
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

/// Classified result of probing one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Any 2xx response
    Accessible,
    /// Denied, but the message leaks project context
    InformativeDenial { project_id: Option<String> },
    /// The key was explicitly rejected
    CredentialInvalid,
    /// The API does not accept API keys at all
    AuthSchemeUnsupported,
    /// Everything else, with a one-line description
    OtherError { detail: String },
}

impl Outcome {
    /// Non-2xx response that matched none of the classification rules
    pub fn http_failure(status: u16, message: &str) -> Self {
        Self::OtherError {
            detail: format!("FAILED (HTTP {}): {}", status, message),
        }
    }

    /// The request never produced a usable response
    pub fn transport_failure(category: &str) -> Self {
        Self::OtherError {
            detail: format!("ERROR ({})", category),
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Accessible => OutcomeKind::Accessible,
            Self::InformativeDenial { .. } => OutcomeKind::InformativeDenial,
            Self::CredentialInvalid => OutcomeKind::CredentialInvalid,
            Self::AuthSchemeUnsupported => OutcomeKind::AuthSchemeUnsupported,
            Self::OtherError { .. } => OutcomeKind::OtherError,
        }
    }

    /// Report line for this outcome
    pub fn display_line(&self, target_name: &str) -> String {
        match self {
            Self::InformativeDenial { project_id } => format!(
                "{} (Project: {})",
                target_name,
                project_id.as_deref().unwrap_or("Unknown")
            ),
            Self::OtherError { detail } => format!("{}: {}", target_name, detail),
            Self::Accessible | Self::CredentialInvalid | Self::AuthSchemeUnsupported => {
                target_name.to_string()
            }
        }
    }
}

/// Bucket discriminant shared by the aggregator and the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Accessible,
    InformativeDenial,
    CredentialInvalid,
    AuthSchemeUnsupported,
    OtherError,
}

impl OutcomeKind {
    /// Report order, other errors last
    pub const ALL: [OutcomeKind; 5] = [
        OutcomeKind::Accessible,
        OutcomeKind::InformativeDenial,
        OutcomeKind::CredentialInvalid,
        OutcomeKind::AuthSchemeUnsupported,
        OutcomeKind::OtherError,
    ];
}

/// Aggregated display lines for a whole scan, one list per outcome kind.
///
/// Every probed target lands in exactly one list. Lists keep insertion
/// order; renderers sort on output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResults {
    pub accessible: Vec<String>,
    pub informative_denials: Vec<String>,
    pub key_invalid: Vec<String>,
    pub requires_oauth: Vec<String>,
    pub other_errors: Vec<String>,
}

impl ScanResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the display line for `outcome` to its bucket
    pub fn record(&mut self, outcome: &Outcome, target_name: &str) {
        let line = outcome.display_line(target_name);
        self.bucket_mut(outcome.kind()).push(line);
    }

    pub fn entries(&self, kind: OutcomeKind) -> &[String] {
        match kind {
            OutcomeKind::Accessible => &self.accessible,
            OutcomeKind::InformativeDenial => &self.informative_denials,
            OutcomeKind::CredentialInvalid => &self.key_invalid,
            OutcomeKind::AuthSchemeUnsupported => &self.requires_oauth,
            OutcomeKind::OtherError => &self.other_errors,
        }
    }

    /// Entries of one bucket in lexicographic order
    pub fn sorted_entries(&self, kind: OutcomeKind) -> Vec<&str> {
        let mut entries: Vec<&str> = self.entries(kind).iter().map(String::as_str).collect();
        entries.sort_unstable();
        entries
    }

    /// Total number of recorded outcomes
    pub fn total(&self) -> usize {
        OutcomeKind::ALL.iter().map(|kind| self.entries(*kind).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn bucket_mut(&mut self, kind: OutcomeKind) -> &mut Vec<String> {
        match kind {
            OutcomeKind::Accessible => &mut self.accessible,
            OutcomeKind::InformativeDenial => &mut self.informative_denials,
            OutcomeKind::CredentialInvalid => &mut self.key_invalid,
            OutcomeKind::AuthSchemeUnsupported => &mut self.requires_oauth,
            OutcomeKind::OtherError => &mut self.other_errors,
        }
    }
}

/// Raw probe response handed to the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

impl ProbeResponse {
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check if the response indicates success (2xx status)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
