pub mod severity;
pub mod thresholds;
pub mod verdict;

pub use severity::Severity;
pub use thresholds::ThresholdSet;
pub use verdict::{Verdict, VitalField};
