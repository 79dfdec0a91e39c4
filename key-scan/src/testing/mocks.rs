use crate::error::{Result, ScanError};
use crate::traits::{CatalogSource, Prober};
use crate::types::{Credential, Outcome, ProbeTarget};
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock prober answering from a name -> outcome table
#[derive(Default)]
pub struct MockProber {
    pub outcomes: HashMap<String, Outcome>,
    calls: Mutex<Vec<String>>,
}

impl MockProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(mut self, target_name: &str, outcome: Outcome) -> Self {
        self.outcomes.insert(target_name.to_string(), outcome);
        self
    }

    /// Target names probed so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl Prober for MockProber {
    async fn probe(&self, target: &ProbeTarget, _credential: &Credential) -> Outcome {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(target.name.clone());
        }

        self.outcomes
            .get(&target.name)
            .cloned()
            .unwrap_or_else(|| Outcome::transport_failure("MockError"))
    }
}

/// Mock catalog returning a fixed target list or failing
pub struct MockCatalog {
    pub targets: Vec<ProbeTarget>,
    pub should_fail: bool,
}

impl MockCatalog {
    pub fn new(targets: Vec<ProbeTarget>) -> Self {
        Self {
            targets,
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            targets: Vec::new(),
            should_fail: true,
        }
    }
}

impl CatalogSource for MockCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<ProbeTarget>> {
        if self.should_fail {
            return Err(ScanError::catalog_unavailable("Mock failure"));
        }
        Ok(self.targets.clone())
    }
}
