pub mod progress;
pub mod runner;

pub use progress::{ProgressCallback, ProgressTracker};
pub use runner::{DefaultScanRunner, ScanRunner};
