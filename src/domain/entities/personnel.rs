use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked person. The name doubles as the join key for vitals import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personnel {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub agency: String,
    pub dob: Option<NaiveDate>,
}
