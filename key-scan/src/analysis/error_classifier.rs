//! Classification of probe responses into outcomes
//! No I/O here - takes a status code and a body, returns an [`Outcome`]

use crate::types::{Outcome, ProbeResponse};
use serde::{Deserialize, Serialize};

/// Message used when an error body is JSON but carries no message
pub const MISSING_MESSAGE: &str = "No error message.";

/// Literal that precedes the project identifier in informative denials
const PROJECT_MARKER: &str = "project: ";

/// Outcome a rule maps a matching error message to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialCategory {
    InformativeDenial,
    CredentialInvalid,
    AuthSchemeUnsupported,
}

/// One entry of the ordered rule table.
///
/// A rule matches when the message contains any of its patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRule {
    pub category: DenialCategory,
    pub patterns: Vec<String>,
}

impl ClassificationRule {
    pub fn new<S: Into<String>>(category: DenialCategory, patterns: Vec<S>) -> Self {
        Self {
            category,
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, message: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| message.contains(pattern.as_str()))
    }
}

/// Rules matching the wording of Google API error messages.
///
/// Order matters: a message may satisfy several rules and the first one wins.
pub fn default_rules() -> Vec<ClassificationRule> {
    vec![
        ClassificationRule::new(
            DenialCategory::InformativeDenial,
            vec!["API has not been used", "is disabled"],
        ),
        ClassificationRule::new(DenialCategory::CredentialInvalid, vec!["API key not valid"]),
        ClassificationRule::new(
            DenialCategory::AuthSchemeUnsupported,
            vec!["API keys are not supported"],
        ),
    ]
}

/// Trait for response classification
pub trait ErrorClassifier: Send + Sync {
    /// Classify a complete probe response
    fn classify(&self, response: &ProbeResponse) -> Outcome;

    /// Classify an error message extracted from a non-2xx response
    fn classify_message(&self, status: u16, message: &str) -> Outcome;
}

/// Rule-table classifier
#[derive(Debug, Clone)]
pub struct RuleClassifier {
    rules: Vec<ClassificationRule>,
}

impl RuleClassifier {
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }
}

impl Default for RuleClassifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl ErrorClassifier for RuleClassifier {
    fn classify(&self, response: &ProbeResponse) -> Outcome {
        if response.is_success() {
            return Outcome::Accessible;
        }

        match extract_error_message(&response.body) {
            Some(message) => self.classify_message(response.status, &message),
            None => Outcome::http_failure(response.status, reason_phrase(response.status)),
        }
    }

    fn classify_message(&self, status: u16, message: &str) -> Outcome {
        let category = self
            .rules
            .iter()
            .find(|rule| rule.matches(message))
            .map(|rule| rule.category);

        match category {
            Some(DenialCategory::InformativeDenial) => Outcome::InformativeDenial {
                project_id: extract_project_id(message),
            },
            Some(DenialCategory::CredentialInvalid) => Outcome::CredentialInvalid,
            Some(DenialCategory::AuthSchemeUnsupported) => Outcome::AuthSchemeUnsupported,
            None => Outcome::http_failure(status, message),
        }
    }
}

/// Pull `error.message` out of a Google style error body.
///
/// Returns `None` when the body is not a JSON object or its `error` member
/// is not an object; such bodies fall back to the HTTP reason phrase.
pub fn extract_error_message(body: &str) -> Option<String> {
    let json_value: serde_json::Value = serde_json::from_str(body).ok()?;
    let obj = json_value.as_object()?;

    let error = match obj.get("error") {
        Some(error) => error.as_object()?,
        None => return Some(MISSING_MESSAGE.to_string()),
    };

    let message = match error.get("message") {
        Some(serde_json::Value::String(message)) => message.clone(),
        Some(other) => other.to_string(),
        None => MISSING_MESSAGE.to_string(),
    };

    Some(message)
}

/// Token after the last `project: ` up to the next space
pub fn extract_project_id(message: &str) -> Option<String> {
    let (_, rest) = message.rsplit_once(PROJECT_MARKER)?;
    let token = rest.split(' ').next().unwrap_or_default();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Canonical reason phrase for a status code
pub fn reason_phrase(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown Status")
}
