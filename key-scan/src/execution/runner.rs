use crate::config::ScanConfig;
use crate::error::Result;
use crate::execution::progress::{ProgressCallback, ProgressTracker};
use crate::http::DefaultProber;
use crate::traits::Prober;
use crate::types::{Credential, ProbeTarget, ScanResults};
use log::info;
use std::time::Duration;

/// Type alias for the most common concrete runner
pub type DefaultScanRunner = ScanRunner<DefaultProber>;

/// Sequential scan driver.
///
/// Probes targets one at a time in catalog order, folds each outcome into
/// the results straight away, then pauses for `delay` before the next one.
pub struct ScanRunner<P: Prober> {
    prober: P,
    delay: Duration,
}

impl DefaultScanRunner {
    /// Create a runner with the HTTP prober described by `config`
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        let prober = DefaultProber::new(config)?;
        Ok(ScanRunner::new(prober, config.delay()))
    }
}

impl<P: Prober> ScanRunner<P> {
    /// Create a new scan runner
    pub fn new(prober: P, delay: Duration) -> Self {
        Self { prober, delay }
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Probe every target and return the aggregated results
    pub async fn execute(&self, targets: &[ProbeTarget], credential: &Credential) -> ScanResults {
        self.execute_with_progress(targets, credential, None)
            .await
            .0
    }

    /// Probe every target, reporting progress before and after each probe
    pub async fn execute_with_progress(
        &self,
        targets: &[ProbeTarget],
        credential: &Credential,
        progress_callback: Option<Box<ProgressCallback>>,
    ) -> (ScanResults, ProgressTracker) {
        let mut progress = ProgressTracker::new(targets.len());
        let mut results = ScanResults::new();

        if let Some(ref callback) = progress_callback {
            callback(&progress);
        }

        for (index, target) in targets.iter().enumerate() {
            progress.target_started(index, &target.name);
            if let Some(ref callback) = progress_callback {
                callback(&progress);
            }

            let outcome = self.prober.probe(target, credential).await;
            results.record(&outcome, &target.name);
            progress.target_completed(&outcome);

            if let Some(ref callback) = progress_callback {
                callback(&progress);
            }

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        info!(
            "Probed {} targets in {:.1}s: {} accessible, {} unclassified errors",
            progress.completed_targets,
            progress.elapsed_time().as_secs_f64(),
            progress.accessible_targets,
            progress.failed_targets
        );

        (results, progress)
    }
}
