use crate::domain::entities::vitals::VitalsReading;
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::domain::value_objects::verdict::{Verdict, VitalField};

use super::VitalRule;

/// Parses a raw blood pressure string as exactly two integers joined by "/".
///
/// Anything else (missing part, third part, non-integer) is unparseable.
#[must_use]
pub fn parse_blood_pressure(raw: &str) -> Option<(i32, i32)> {
    let mut parts = raw.split('/');
    let systolic = parts.next()?.trim().parse().ok()?;
    let diastolic = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((systolic, diastolic))
}

pub struct BloodPressureRule;

impl VitalRule for BloodPressureRule {
    fn name(&self) -> &'static str {
        "blood_pressure"
    }

    fn evaluate(&self, reading: &VitalsReading, thresholds: &ThresholdSet) -> Option<Verdict> {
        let raw = reading.blood_pressure.as_deref()?;
        let Some((systolic, diastolic)) = parse_blood_pressure(raw) else {
            // Unparseable input is flagged, never a hard error
            return Some(Verdict {
                field: VitalField::BloodPressure,
                severity: Severity::Warning,
                message: format!("Invalid blood pressure format: {raw}"),
            });
        };

        if systolic < thresholds.systolic_critical_low
            || systolic > thresholds.systolic_critical_high
            || diastolic < thresholds.diastolic_critical_low
            || diastolic > thresholds.diastolic_critical_high
        {
            Some(Verdict {
                field: VitalField::BloodPressure,
                severity: Severity::Alert,
                message: format!("Critical blood pressure: {raw}"),
            })
        } else if systolic < thresholds.systolic_warning_low
            || systolic > thresholds.systolic_warning_high
            || diastolic < thresholds.diastolic_warning_low
            || diastolic > thresholds.diastolic_warning_high
        {
            Some(Verdict {
                field: VitalField::BloodPressure,
                severity: Severity::Warning,
                message: format!("Borderline blood pressure: {raw}"),
            })
        } else {
            None
        }
    }
}
