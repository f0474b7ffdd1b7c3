use serde::{Deserialize, Serialize};

use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::verdict::Verdict;

/// Result of classifying one reading: per-field verdicts plus the reduced
/// overall severity. Verdicts keep canonical field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub severity: Severity,
    pub verdicts: Vec<Verdict>,
}

impl Evaluation {
    /// The evaluation of "no data yet": normal, no messages.
    #[must_use]
    pub const fn normal() -> Self {
        Self {
            severity: Severity::Normal,
            verdicts: Vec::new(),
        }
    }

    /// Builds an evaluation from collected verdicts, reducing severity via max.
    #[must_use]
    pub fn from_verdicts(verdicts: Vec<Verdict>) -> Self {
        let severity = verdicts
            .iter()
            .map(|v| v.severity)
            .max()
            .unwrap_or(Severity::Normal);
        Self { severity, verdicts }
    }

    /// Messages of every triggered rule, in field order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.verdicts.iter().map(|v| v.message.as_str())
    }

    /// Semicolon-joined messages, as rendered in the alerts report.
    #[must_use]
    pub fn joined_messages(&self) -> String {
        self.messages().collect::<Vec<_>>().join("; ")
    }

    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.severity.is_flagged()
    }
}
