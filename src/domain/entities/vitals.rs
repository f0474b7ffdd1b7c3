use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable vital-sign reading belonging to a person.
///
/// Every measurement is independently optional; absence means "not taken",
/// never zero. Blood pressure stays a raw "systolic/diastolic" string and is
/// only interpreted at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsReading {
    pub id: i64,
    pub personnel_id: i64,
    pub timestamp: DateTime<Utc>,
    pub heart_rate: Option<i32>,
    pub blood_pressure: Option<String>,
    pub temperature: Option<f64>,
    pub spo2: Option<i32>,
    pub carboxyhemoglobin: Option<f64>,
}
