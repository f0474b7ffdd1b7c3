use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

use crate::application::services::roster::{RosterEntry, RosterService};
use crate::domain::entities::vitals::VitalsReading;
use crate::domain::ports::store::{RecordStore, StoreError};
use crate::domain::rules::Evaluator;
use crate::domain::value_objects::thresholds::ThresholdSet;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("personnel {0} not found")]
    PersonnelNotFound(i64),
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer error: {0}")]
    Buffer(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

const ROSTER_HEADER: [&str; 10] = [
    "Name",
    "Role",
    "Agency",
    "Heart Rate",
    "Blood Pressure",
    "Temperature",
    "SpO2",
    "Carboxyhemoglobin",
    "Status",
    "Timestamp",
];

const ALERTS_HEADER: [&str; 11] = [
    "Name",
    "Role",
    "Agency",
    "Heart Rate",
    "Blood Pressure",
    "Temperature",
    "SpO2",
    "Carboxyhemoglobin",
    "Status",
    "Alerts",
    "Timestamp",
];

const HISTORY_HEADER: [&str; 7] = [
    "Timestamp",
    "Heart Rate",
    "Blood Pressure",
    "Temperature",
    "SpO2",
    "Carboxyhemoglobin",
    "Status",
];

/// Flattens roster and history views into the three CSV report variants.
/// Pure read + format: nothing is mutated and absent fields render as empty
/// strings, never "None" or zero.
pub struct ExportService<'a> {
    roster: RosterService<'a>,
}

impl<'a> ExportService<'a> {
    #[must_use]
    pub fn new(
        store: &'a dyn RecordStore,
        evaluator: &'a Evaluator,
        thresholds: &'a ThresholdSet,
    ) -> Self {
        Self {
            roster: RosterService::new(store, evaluator, thresholds),
        }
    }

    /// One row per person, using the latest reading or empty placeholders.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if a store read or the CSV encoding fails.
    pub fn full_roster(&self) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(ROSTER_HEADER)?;
        for entry in self.roster.dashboard()? {
            writer.write_record(roster_cells(&entry))?;
        }
        into_csv_string(writer)
    }

    /// Flagged people only, with the triggered messages joined into an
    /// `Alerts` column. People without readings never appear.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if a store read or the CSV encoding fails.
    pub fn alerts_only(&self) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(ALERTS_HEADER)?;
        for entry in self.roster.alerts()? {
            let mut cells = roster_cells(&entry);
            cells.insert(9, entry.evaluation.joined_messages());
            writer.write_record(cells)?;
        }
        into_csv_string(writer)
    }

    /// Every reading of one person, newest first, each row re-classified
    /// on its own.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::PersonnelNotFound` for an unknown id, or
    /// `ExportError` if a store read or the CSV encoding fails.
    pub fn person_history(&self, personnel_id: i64) -> Result<String, ExportError> {
        let history = self
            .roster
            .history(personnel_id)?
            .ok_or(ExportError::PersonnelNotFound(personnel_id))?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HISTORY_HEADER)?;
        for entry in &history.entries {
            writer.write_record([
                format_timestamp(entry.reading.timestamp),
                opt_int(entry.reading.heart_rate),
                opt_str(entry.reading.blood_pressure.as_deref()),
                opt_float(entry.reading.temperature),
                opt_int(entry.reading.spo2),
                opt_float(entry.reading.carboxyhemoglobin),
                entry.evaluation.severity.to_string(),
            ])?;
        }
        into_csv_string(writer)
    }
}

fn roster_cells(entry: &RosterEntry) -> Vec<String> {
    let reading = entry.latest.as_ref();
    vec![
        entry.person.name.clone(),
        entry.person.role.clone(),
        entry.person.agency.clone(),
        opt_int(reading.and_then(|r| r.heart_rate)),
        opt_str(reading.and_then(|r| r.blood_pressure.as_deref())),
        opt_float(reading.and_then(|r| r.temperature)),
        opt_int(reading.and_then(|r| r.spo2)),
        opt_float(reading.and_then(|r| r.carboxyhemoglobin)),
        entry.evaluation.severity.to_string(),
        reading.map_or_else(String::new, |r: &VitalsReading| format_timestamp(r.timestamp)),
    ]
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn opt_int(value: Option<i32>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

fn opt_float(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

fn opt_str(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn into_csv_string(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))
}
