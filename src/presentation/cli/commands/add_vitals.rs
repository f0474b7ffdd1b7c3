use colored::Colorize;

use crate::application::parsing::{ingestion_timestamp, parse_timestamp};
use crate::domain::entities::vitals::VitalsReading;
use crate::domain::ports::store::{NewVitals, RecordStore};
use crate::domain::rules::Evaluator;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::presentation::cli::formatters::roster_fmt::severity_badge;

/// Arguments of one manually entered reading.
#[derive(Debug, Default)]
pub struct VitalsInput<'a> {
    pub heart_rate: Option<i32>,
    pub blood_pressure: Option<&'a str>,
    pub temperature: Option<f64>,
    pub spo2: Option<i32>,
    pub carboxyhemoglobin: Option<f64>,
    pub timestamp: Option<&'a str>,
}

/// Records one reading for a person and immediately shows its evaluation.
/// An absent or unparseable timestamp falls back to ingestion time.
///
/// # Errors
///
/// Returns an error if the person does not exist or the store write fails.
pub fn run_add_vitals(
    store: &dyn RecordStore,
    evaluator: &Evaluator,
    thresholds: &ThresholdSet,
    person_id: i64,
    input: &VitalsInput<'_>,
) -> anyhow::Result<()> {
    let Some(person) = store
        .get_personnel(person_id)
        .map_err(|e| anyhow::anyhow!("failed to look up person: {e}"))?
    else {
        anyhow::bail!("personnel {person_id} not found");
    };

    let timestamp = input
        .timestamp
        .and_then(parse_timestamp)
        .unwrap_or_else(ingestion_timestamp);

    let reading = NewVitals {
        personnel_id: person.id,
        timestamp,
        heart_rate: input.heart_rate,
        blood_pressure: input
            .blood_pressure
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string),
        temperature: input.temperature,
        spo2: input.spo2,
        carboxyhemoglobin: input.carboxyhemoglobin,
    };
    let id = store
        .create_vitals(&reading)
        .map_err(|e| anyhow::anyhow!("failed to record vitals: {e}"))?;

    // Echo the classification so critical entries are visible immediately
    let stored = VitalsReading {
        id,
        personnel_id: reading.personnel_id,
        timestamp: reading.timestamp,
        heart_rate: reading.heart_rate,
        blood_pressure: reading.blood_pressure.clone(),
        temperature: reading.temperature,
        spo2: reading.spo2,
        carboxyhemoglobin: reading.carboxyhemoglobin,
    };
    let evaluation = evaluator.evaluate(Some(&stored), thresholds);

    println!(
        "{} Recorded vitals for {} {}",
        "✔".green().bold(),
        person.name.bold(),
        severity_badge(evaluation.severity)
    );
    for message in evaluation.messages() {
        println!("  • {message}");
    }
    Ok(())
}
