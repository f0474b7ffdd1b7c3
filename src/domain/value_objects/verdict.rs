use serde::{Deserialize, Serialize};

use super::severity::Severity;

/// Vital field a verdict refers to, in canonical evaluation order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VitalField {
    HeartRate,
    BloodPressure,
    Temperature,
    Spo2,
    Carboxyhemoglobin,
}

impl std::fmt::Display for VitalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HeartRate => write!(f, "heart_rate"),
            Self::BloodPressure => write!(f, "blood_pressure"),
            Self::Temperature => write!(f, "temperature"),
            Self::Spo2 => write!(f, "spo2"),
            Self::Carboxyhemoglobin => write!(f, "carboxyhemoglobin"),
        }
    }
}

/// Outcome of evaluating one vital field against its threshold bands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub field: VitalField,
    pub severity: Severity,
    pub message: String,
}
