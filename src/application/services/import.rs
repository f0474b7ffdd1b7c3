use std::collections::HashMap;
use std::io::Read;

use thiserror::Error;

use crate::application::parsing::{ingestion_timestamp, parse_date, parse_timestamp};
use crate::application::services::matcher::NameMatcher;
use crate::domain::ports::store::{NewPersonnel, NewVitals, RecordStore, StoreError};

#[derive(Error, Debug)]
pub enum ImportError {
    /// A numeric cell failed to parse; the whole batch is rejected.
    #[error("row {row}: invalid {column} value '{value}'")]
    Validation {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("csv read failed: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a vitals upload: rows attached vs rows with no matching name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VitalsImportReport {
    pub added: usize,
    pub skipped: usize,
}

/// Bulk CSV ingestion. Rows are normalized (headers lower-cased and trimmed,
/// BOM stripped, values trimmed), staged, and fully validated before anything
/// is written; the store then commits each batch in one transaction.
pub struct ImportService<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> ImportService<'a> {
    #[must_use]
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Imports personnel rows (`name, role, agency, dob`). Every row becomes
    /// a new record; there is no de-duplication by name. An unparseable dob
    /// stores no date instead of failing the batch.
    ///
    /// # Errors
    ///
    /// Returns `ImportError` if the CSV is unreadable or the batch write fails.
    pub fn import_personnel<R: Read>(&self, input: R) -> Result<usize, ImportError> {
        let rows = read_rows(input)?;

        let mut staged = Vec::with_capacity(rows.len());
        for row in &rows {
            staged.push(NewPersonnel {
                name: field(row, "name").to_string(),
                role: field(row, "role").to_string(),
                agency: field(row, "agency").to_string(),
                dob: parse_date(field(row, "dob")),
            });
        }

        let count = self.store.create_personnel_batch(&staged)?;
        Ok(count)
    }

    /// Imports vitals rows (`name, timestamp, heart_rate, blood_pressure,
    /// temperature, spo2, carboxyhemoglobin`), attaching each row to an
    /// existing person by name. Unmatched rows are skipped and counted; a bad
    /// numeric cell in a matched row aborts the whole batch. Missing or
    /// unparseable timestamps fall back to ingestion time.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::Validation` on the first malformed numeric cell,
    /// or `ImportError` if the CSV is unreadable or the batch write fails.
    pub fn import_vitals<R: Read>(&self, input: R) -> Result<VitalsImportReport, ImportError> {
        let rows = read_rows(input)?;
        let matcher = NameMatcher::new(self.store);

        let mut staged = Vec::with_capacity(rows.len());
        let mut skipped = 0;
        for (index, row) in rows.iter().enumerate() {
            let row_number = index + 1;

            // Match before parsing: an unmatched row is a skip even when its
            // numeric cells are malformed.
            let Some(person) = matcher.resolve(field(row, "name"))? else {
                skipped += 1;
                continue;
            };

            let timestamp =
                parse_timestamp(field(row, "timestamp")).unwrap_or_else(ingestion_timestamp);

            staged.push(NewVitals {
                personnel_id: person.id,
                timestamp,
                heart_rate: parse_cell(row, "heart_rate", row_number)?,
                blood_pressure: optional_string(field(row, "blood_pressure")),
                temperature: parse_cell(row, "temperature", row_number)?,
                spo2: parse_cell(row, "spo2", row_number)?,
                carboxyhemoglobin: parse_cell(row, "carboxyhemoglobin", row_number)?,
            });
        }

        let added = self.store.create_vitals_batch(&staged)?;
        Ok(VitalsImportReport { added, skipped })
    }
}

type Row = HashMap<String, String>;

/// Reads every record into a header-keyed map. Headers are lower-cased,
/// trimmed, and stripped of a UTF-8 BOM; values are trimmed by the reader.
fn read_rows<R: Read>(input: R) -> Result<Vec<Row>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = Row::new();
        for (i, value) in record.iter().enumerate() {
            if let Some(key) = headers.get(i) {
                row.entry(key.clone()).or_insert_with(|| value.to_string());
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

fn field<'r>(row: &'r Row, key: &str) -> &'r str {
    row.get(key).map_or("", String::as_str)
}

fn optional_string(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parses an optional numeric cell. Empty means absent; a present value that
/// fails to parse is a validation error attributed to its row and column.
fn parse_cell<T: std::str::FromStr>(
    row: &Row,
    column: &'static str,
    row_number: usize,
) -> Result<Option<T>, ImportError> {
    let value = field(row, column);
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ImportError::Validation {
            row: row_number,
            column,
            value: value.to_string(),
        })
}
