use crate::types::{Outcome, OutcomeKind};
use std::time::Instant;

/// Progress tracking for a sequential scan
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProgressTracker {
    pub total_targets: usize,
    pub completed_targets: usize,
    /// Targets that answered with a 2xx
    pub accessible_targets: usize,
    /// Targets that ended in an unclassified error
    pub failed_targets: usize,
    /// 1-based position of the target being probed
    pub current_index: usize,
    pub current_target: Option<String>,
    #[serde(skip)]
    pub start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_targets: usize) -> Self {
        Self {
            total_targets,
            completed_targets: 0,
            accessible_targets: 0,
            failed_targets: 0,
            current_index: 0,
            current_target: None,
            start_time: Instant::now(),
        }
    }

    /// Mark the target at `index` (0-based) as in flight
    pub fn target_started(&mut self, index: usize, name: &str) {
        self.current_index = index + 1;
        self.current_target = Some(name.to_string());
    }

    pub fn target_completed(&mut self, outcome: &Outcome) {
        self.completed_targets += 1;
        match outcome.kind() {
            OutcomeKind::Accessible => self.accessible_targets += 1,
            OutcomeKind::OtherError => self.failed_targets += 1,
            _ => {}
        }
    }

    pub fn progress_percentage(&self) -> f64 {
        if self.total_targets == 0 {
            0.0
        } else {
            (self.completed_targets as f64 / self.total_targets as f64) * 100.0
        }
    }

    pub fn elapsed_time(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    pub fn estimated_remaining(&self) -> Option<std::time::Duration> {
        if self.completed_targets == 0 || self.completed_targets >= self.total_targets {
            return None;
        }

        let elapsed = self.elapsed_time();
        let avg_time_per_target = elapsed.as_secs_f64() / self.completed_targets as f64;
        let remaining_targets = self.total_targets - self.completed_targets;
        let estimated_seconds = avg_time_per_target * remaining_targets as f64;

        Some(std::time::Duration::from_secs_f64(estimated_seconds))
    }
}

/// Alias for progress callback to reduce type complexity lint
pub type ProgressCallback = dyn Fn(&ProgressTracker) + Send + Sync;
