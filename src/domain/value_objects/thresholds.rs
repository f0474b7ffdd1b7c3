use serde::{Deserialize, Serialize};

/// Named threshold bounds for every monitored vital.
///
/// Critical bounds delimit the outer (alert) band, warning bounds the inner
/// (borderline) band. A value strictly outside the critical band is an alert;
/// outside the warning band but inside the critical band is a warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    /// Heart rate below this is critical (bpm)
    pub heart_rate_critical_low: i32,
    /// Heart rate above this is critical (bpm)
    pub heart_rate_critical_high: i32,
    /// Heart rate below this is borderline (bpm)
    pub heart_rate_warning_low: i32,
    /// Heart rate above this is borderline (bpm)
    pub heart_rate_warning_high: i32,
    /// Systolic pressure below this is critical (mmHg)
    pub systolic_critical_low: i32,
    /// Systolic pressure above this is critical (mmHg)
    pub systolic_critical_high: i32,
    /// Systolic pressure below this is borderline (mmHg)
    pub systolic_warning_low: i32,
    /// Systolic pressure above this is borderline (mmHg)
    pub systolic_warning_high: i32,
    /// Diastolic pressure below this is critical (mmHg)
    pub diastolic_critical_low: i32,
    /// Diastolic pressure above this is critical (mmHg)
    pub diastolic_critical_high: i32,
    /// Diastolic pressure below this is borderline (mmHg)
    pub diastolic_warning_low: i32,
    /// Diastolic pressure above this is borderline (mmHg)
    pub diastolic_warning_high: i32,
    /// Body temperature below this is critical (°C)
    pub temperature_critical_low: f64,
    /// Body temperature above this is critical (°C)
    pub temperature_critical_high: f64,
    /// Body temperature below this is borderline (°C)
    pub temperature_warning_low: f64,
    /// Body temperature above this is borderline (°C)
    pub temperature_warning_high: f64,
    /// Oxygen saturation below this is critical (%)
    pub spo2_critical_min: i32,
    /// Oxygen saturation below this is borderline (%)
    pub spo2_warning_min: i32,
    /// Carboxyhemoglobin above this is critical (%)
    pub carboxyhemoglobin_critical_max: f64,
    /// Carboxyhemoglobin above this is borderline (%)
    pub carboxyhemoglobin_warning_max: f64,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            heart_rate_critical_low: 55,
            heart_rate_critical_high: 110,
            heart_rate_warning_low: 60,
            heart_rate_warning_high: 100,
            systolic_critical_low: 95,
            systolic_critical_high: 160,
            systolic_warning_low: 100,
            systolic_warning_high: 140,
            diastolic_critical_low: 55,
            diastolic_critical_high: 100,
            diastolic_warning_low: 60,
            diastolic_warning_high: 90,
            temperature_critical_low: 35.5,
            temperature_critical_high: 38.5,
            temperature_warning_low: 36.0,
            temperature_warning_high: 37.5,
            spo2_critical_min: 90,
            spo2_warning_min: 94,
            carboxyhemoglobin_critical_max: 10.0,
            carboxyhemoglobin_warning_max: 2.0,
        }
    }
}
