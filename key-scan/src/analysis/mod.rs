//! Probe response classification - pure business logic only
//!
//! Error text from the probed APIs is free-form, so classification is an
//! ordered substring rule table that can be swapped out through the config
//! file when the upstream wording changes.

pub mod error_classifier;

pub use error_classifier::{
    default_rules, extract_error_message, extract_project_id, reason_phrase, ClassificationRule,
    DenialCategory, ErrorClassifier, RuleClassifier, MISSING_MESSAGE,
};
