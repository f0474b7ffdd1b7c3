use crate::domain::entities::vitals::VitalsReading;
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::domain::value_objects::verdict::{Verdict, VitalField};

use super::VitalRule;

/// Carboxyhemoglobin only degrades upward (smoke/CO exposure).
pub struct CarboxyhemoglobinRule;

impl VitalRule for CarboxyhemoglobinRule {
    fn name(&self) -> &'static str {
        "carboxyhemoglobin"
    }

    fn evaluate(&self, reading: &VitalsReading, thresholds: &ThresholdSet) -> Option<Verdict> {
        let cohb = reading.carboxyhemoglobin?;
        if cohb > thresholds.carboxyhemoglobin_critical_max {
            Some(Verdict {
                field: VitalField::Carboxyhemoglobin,
                severity: Severity::Alert,
                message: format!("Critical Carboxyhemoglobin: {cohb}%"),
            })
        } else if cohb > thresholds.carboxyhemoglobin_warning_max {
            Some(Verdict {
                field: VitalField::Carboxyhemoglobin,
                severity: Severity::Warning,
                message: format!("Borderline Carboxyhemoglobin: {cohb}%"),
            })
        } else {
            None
        }
    }
}
