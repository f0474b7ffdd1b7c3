use crate::domain::entities::vitals::VitalsReading;
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::domain::value_objects::verdict::{Verdict, VitalField};

use super::VitalRule;

/// Oxygen saturation only degrades downward, so the bands are one-sided.
pub struct Spo2Rule;

impl VitalRule for Spo2Rule {
    fn name(&self) -> &'static str {
        "spo2"
    }

    fn evaluate(&self, reading: &VitalsReading, thresholds: &ThresholdSet) -> Option<Verdict> {
        let spo2 = reading.spo2?;
        if spo2 < thresholds.spo2_critical_min {
            Some(Verdict {
                field: VitalField::Spo2,
                severity: Severity::Alert,
                message: format!("Critical SpO₂: {spo2}%"),
            })
        } else if spo2 < thresholds.spo2_warning_min {
            Some(Verdict {
                field: VitalField::Spo2,
                severity: Severity::Warning,
                message: format!("Borderline SpO₂: {spo2}%"),
            })
        } else {
            None
        }
    }
}
