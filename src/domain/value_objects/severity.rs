use serde::{Deserialize, Serialize};

/// Aggregate clinical risk classification of a single reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Warning,
    Alert,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Warning => write!(f, "warning"),
            Self::Alert => write!(f, "alert"),
        }
    }
}

impl Severity {
    /// True for any severity that should surface on the alerts views
    #[must_use]
    pub fn is_flagged(self) -> bool {
        self > Self::Normal
    }
}
