use crate::ui;
use std::time::{Duration, Instant};

/// Numbered step tracker for the scan phases
pub struct ProgressTracker {
    operation_name: String,
    start_time: Instant,
    steps: Vec<&'static str>,
    current_step: usize,
}

impl ProgressTracker {
    /// Create a new progress tracker with the given operation name
    pub fn new(operation_name: &str, steps: Vec<&'static str>) -> Self {
        ui::section_header(operation_name);
        Self {
            operation_name: operation_name.to_string(),
            start_time: Instant::now(),
            steps,
            current_step: 0,
        }
    }

    /// Announce the next step as `Step n/total: ...`
    pub fn start_step(&self) {
        if let Some(step) = self.steps.get(self.current_step) {
            ui::step_message(self.current_step + 1, self.steps.len(), step);
        }
    }

    /// Complete the current step
    pub fn complete_step(&mut self) {
        if self.current_step < self.steps.len() {
            self.current_step += 1;
        }
    }

    /// Complete the operation
    pub fn complete(&self) {
        ui::success_message(&format!(
            "{} completed in {}",
            self.operation_name,
            format_duration(self.start_time.elapsed())
        ));
    }
}

/// Format a duration in a human-readable way
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs();
    if seconds < 60 {
        format!("{seconds} seconds")
    } else if seconds < 3600 {
        format!(
            "{} minutes {seconds_remainder} seconds",
            seconds / 60,
            seconds_remainder = seconds % 60
        )
    } else {
        format!(
            "{hours} hours {minutes} minutes",
            hours = seconds / 3600,
            minutes = (seconds % 3600) / 60
        )
    }
}
