use crate::domain::entities::vitals::VitalsReading;
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::domain::value_objects::verdict::{Verdict, VitalField};

use super::VitalRule;

pub struct TemperatureRule;

impl VitalRule for TemperatureRule {
    fn name(&self) -> &'static str {
        "temperature"
    }

    fn evaluate(&self, reading: &VitalsReading, thresholds: &ThresholdSet) -> Option<Verdict> {
        let temp = reading.temperature?;
        if temp < thresholds.temperature_critical_low || temp > thresholds.temperature_critical_high
        {
            Some(Verdict {
                field: VitalField::Temperature,
                severity: Severity::Alert,
                message: format!("Critical temperature: {temp} °C"),
            })
        } else if temp < thresholds.temperature_warning_low
            || temp > thresholds.temperature_warning_high
        {
            Some(Verdict {
                field: VitalField::Temperature,
                severity: Severity::Warning,
                message: format!("Borderline temperature: {temp} °C"),
            })
        } else {
            None
        }
    }
}
