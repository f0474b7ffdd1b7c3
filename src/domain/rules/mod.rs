pub mod blood_pressure;
pub mod carboxyhemoglobin;
pub mod heart_rate;
pub mod spo2;
pub mod temperature;

use crate::domain::entities::evaluation::Evaluation;
use crate::domain::entities::vitals::VitalsReading;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::domain::value_objects::verdict::Verdict;

/// A deterministic check of one vital field against its threshold bands.
/// Rules are pure functions: reading + thresholds in, optional verdict out.
pub trait VitalRule: Send + Sync {
    /// Returns the unique name of this rule
    fn name(&self) -> &'static str;

    /// Evaluates the rule against a reading using the given thresholds
    fn evaluate(&self, reading: &VitalsReading, thresholds: &ThresholdSet) -> Option<Verdict>;
}

/// Returns all vital rules in canonical field order: heart rate, blood
/// pressure, temperature, SpO₂, carboxyhemoglobin. Message order in an
/// evaluation follows this order.
#[must_use]
pub fn default_rules() -> Vec<Box<dyn VitalRule>> {
    vec![
        Box::new(heart_rate::HeartRateRule),
        Box::new(blood_pressure::BloodPressureRule),
        Box::new(temperature::TemperatureRule),
        Box::new(spo2::Spo2Rule),
        Box::new(carboxyhemoglobin::CarboxyhemoglobinRule),
    ]
}

/// Engine that classifies readings by running every rule and reducing the
/// per-field verdicts to an overall severity via max. Evaluation order never
/// affects the result; it only fixes message order.
pub struct Evaluator {
    rules: Vec<Box<dyn VitalRule>>,
}

impl Evaluator {
    #[must_use]
    pub fn new(rules: Vec<Box<dyn VitalRule>>) -> Self {
        Self { rules }
    }

    /// Classifies a single reading; `None` means "no data yet" and is normal.
    #[must_use]
    pub fn evaluate(
        &self,
        reading: Option<&VitalsReading>,
        thresholds: &ThresholdSet,
    ) -> Evaluation {
        let Some(reading) = reading else {
            return Evaluation::normal();
        };
        let verdicts: Vec<Verdict> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(reading, thresholds))
            .collect();
        Evaluation::from_verdicts(verdicts)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(default_rules())
    }
}
