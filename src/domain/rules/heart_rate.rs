use crate::domain::entities::vitals::VitalsReading;
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::domain::value_objects::verdict::{Verdict, VitalField};

use super::VitalRule;

pub struct HeartRateRule;

impl VitalRule for HeartRateRule {
    fn name(&self) -> &'static str {
        "heart_rate"
    }

    fn evaluate(&self, reading: &VitalsReading, thresholds: &ThresholdSet) -> Option<Verdict> {
        let hr = reading.heart_rate?;
        if hr < thresholds.heart_rate_critical_low || hr > thresholds.heart_rate_critical_high {
            Some(Verdict {
                field: VitalField::HeartRate,
                severity: Severity::Alert,
                message: format!("Critical heart rate: {hr} bpm"),
            })
        } else if hr < thresholds.heart_rate_warning_low || hr > thresholds.heart_rate_warning_high
        {
            Some(Verdict {
                field: VitalField::HeartRate,
                severity: Severity::Warning,
                message: format!("Borderline heart rate: {hr} bpm"),
            })
        } else {
            None
        }
    }
}
