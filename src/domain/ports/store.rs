use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::domain::entities::personnel::Personnel;
use crate::domain::entities::vitals::VitalsReading;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage read failed: {0}")]
    ReadFailed(String),
    #[error("storage write failed: {0}")]
    WriteFailed(String),
    #[error("entry not found: {0}")]
    NotFound(String),
}

/// Fields of a person about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPersonnel {
    pub name: String,
    pub role: String,
    pub agency: String,
    pub dob: Option<NaiveDate>,
}

/// Fields of a reading about to be inserted. The timestamp is already
/// resolved by the caller (ingestion time when the source had none).
#[derive(Debug, Clone, PartialEq)]
pub struct NewVitals {
    pub personnel_id: i64,
    pub timestamp: DateTime<Utc>,
    pub heart_rate: Option<i32>,
    pub blood_pressure: Option<String>,
    pub temperature: Option<f64>,
    pub spo2: Option<i32>,
    pub carboxyhemoglobin: Option<f64>,
}

/// Persistence port for personnel records and their readings.
///
/// Readings are immutable and never deleted; there are no update paths.
pub trait RecordStore: Send + Sync {
    /// Insert one person, returning the assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write operation fails.
    fn create_personnel(&self, person: &NewPersonnel) -> Result<i64, StoreError>;

    /// Insert a batch of people atomically, returning how many were written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails; no rows are kept in that case.
    fn create_personnel_batch(&self, people: &[NewPersonnel]) -> Result<usize, StoreError>;

    /// Insert one reading, returning the assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write operation fails.
    fn create_vitals(&self, reading: &NewVitals) -> Result<i64, StoreError>;

    /// Insert a batch of readings atomically, returning how many were written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails; no rows are kept in that case.
    fn create_vitals_batch(&self, readings: &[NewVitals]) -> Result<usize, StoreError>;

    /// Fetch one person by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn get_personnel(&self, id: i64) -> Result<Option<Personnel>, StoreError>;

    /// Every person with exactly this name, in creation order (ascending id).
    /// Callers resolve duplicates; the store just reports them.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn find_personnel_by_name(&self, name: &str) -> Result<Vec<Personnel>, StoreError>;

    /// Every person, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn list_personnel(&self) -> Result<Vec<Personnel>, StoreError>;

    /// All readings for a person, newest first (timestamp descending, id
    /// breaks ties so last-inserted wins).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn list_vitals_for(&self, personnel_id: i64) -> Result<Vec<VitalsReading>, StoreError>;

    /// The person's latest reading, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn latest_vitals_for(&self, personnel_id: i64) -> Result<Option<VitalsReading>, StoreError>;
}
