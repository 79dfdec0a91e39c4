use crate::analysis::{ErrorClassifier, RuleClassifier};
use crate::config::ScanConfig;
use crate::error::Result;
use crate::http::request_builder::{build_client, build_probe_url};
use crate::http::ResponseConverterImpl;
use crate::traits::Prober;
use crate::types::{Credential, Outcome, ProbeTarget};
use log::debug;
use reqwest::Client;

/// Type alias for the prober used by the CLI
pub type DefaultProber = HttpProber<RuleClassifier>;

/// Prober issuing one GET per target, no retries
#[derive(Clone)]
pub struct HttpProber<K: ErrorClassifier> {
    client: Client,
    classifier: K,
    response_converter: ResponseConverterImpl,
}

impl HttpProber<RuleClassifier> {
    /// Create a prober with the rule table from configuration
    pub fn new(config: &ScanConfig) -> Result<Self> {
        let classifier = RuleClassifier::new(config.classification_rules());
        Self::with_classifier(config, classifier)
    }
}

impl<K: ErrorClassifier> HttpProber<K> {
    /// Create a prober with a custom classifier
    pub fn with_classifier(config: &ScanConfig, classifier: K) -> Result<Self> {
        let client = build_client(config)?;
        Ok(Self::from_parts(client, classifier))
    }

    /// Reuse an existing reqwest client
    pub fn from_parts(client: Client, classifier: K) -> Self {
        Self {
            client,
            classifier,
            response_converter: ResponseConverterImpl::new(),
        }
    }
}

impl<K: ErrorClassifier> Prober for HttpProber<K> {
    async fn probe(&self, target: &ProbeTarget, credential: &Credential) -> Outcome {
        let url = match build_probe_url(&target.endpoint, credential) {
            Ok(url) => url,
            Err(e) => {
                debug!("{}: {}", target.name, e);
                return Outcome::transport_failure("InvalidEndpoint");
            }
        };

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                let category = transport_category(&e);
                debug!("{}: request failed: {}", target.name, e.without_url());
                return Outcome::transport_failure(category);
            }
        };

        let outcome = match self.response_converter.convert_response(response).await {
            Ok(probe_response) => self.classifier.classify(&probe_response),
            Err(e) => Outcome::transport_failure(transport_category(&e)),
        };

        debug!("{}: {:?}", target.name, outcome);
        outcome
    }
}

/// Category name reported for a request that produced no usable response
pub fn transport_category(error: &reqwest::Error) -> &'static str {
    if error.is_timeout() {
        "Timeout"
    } else if error.is_connect() {
        "ConnectError"
    } else if error.is_redirect() {
        "RedirectError"
    } else if error.is_body() {
        "BodyError"
    } else if error.is_decode() {
        "DecodeError"
    } else if error.is_builder() {
        "BuilderError"
    } else {
        "RequestError"
    }
}
