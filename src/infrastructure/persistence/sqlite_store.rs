use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection};

use crate::domain::entities::personnel::Personnel;
use crate::domain::entities::vitals::VitalsReading;
use crate::domain::ports::store::{NewPersonnel, NewVitals, RecordStore, StoreError};

use super::migrations;

/// SQLite-backed persistent store for personnel and their readings.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Create a new `SQLite` store at the given path.
    ///
    /// Expands `~`, creates parent directories, opens connection,
    /// sets WAL mode and pragmas, and initializes schema.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the database cannot be opened or initialized.
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let expanded = shellexpand::tilde(path);
        let db_path = PathBuf::from(expanded.as_ref());

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        }

        let conn =
            Connection::open(&db_path).map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        conn.pragma_update(None, "synchronous", "NORMAL")
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        conn.pragma_update(None, "busy_timeout", 5000)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        migrations::initialize_schema(&conn).map_err(|e| StoreError::WriteFailed(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

const DOB_FORMAT: &str = "%Y-%m-%d";

fn insert_personnel(conn: &Connection, person: &NewPersonnel) -> Result<i64, StoreError> {
    conn.execute(
        "INSERT INTO personnel (name, role, agency, dob) VALUES (?1, ?2, ?3, ?4)",
        params![
            person.name,
            person.role,
            person.agency,
            person.dob.map(|d| d.format(DOB_FORMAT).to_string()),
        ],
    )
    .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

fn insert_vitals(conn: &Connection, reading: &NewVitals) -> Result<i64, StoreError> {
    conn.execute(
        "INSERT INTO vitals (personnel_id, recorded_at, heart_rate, blood_pressure, \
         temperature, spo2, carboxyhemoglobin) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            reading.personnel_id,
            reading.timestamp.to_rfc3339(),
            reading.heart_rate,
            reading.blood_pressure,
            reading.temperature,
            reading.spo2,
            reading.carboxyhemoglobin,
        ],
    )
    .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

fn parse_personnel_row(row: &rusqlite::Row<'_>) -> Result<Personnel, rusqlite::Error> {
    let dob_str: Option<String> = row.get(4)?;
    let dob = match dob_str {
        Some(raw) => Some(NaiveDate::parse_from_str(&raw, DOB_FORMAT).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?),
        None => None,
    };
    Ok(Personnel {
        id: row.get(0)?,
        name: row.get(1)?,
        role: row.get(2)?,
        agency: row.get(3)?,
        dob,
    })
}

fn parse_vitals_row(row: &rusqlite::Row<'_>) -> Result<VitalsReading, rusqlite::Error> {
    let recorded_at: String = row.get(2)?;
    let timestamp = DateTime::parse_from_rfc3339(&recorded_at)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(VitalsReading {
        id: row.get(0)?,
        personnel_id: row.get(1)?,
        timestamp,
        heart_rate: row.get(3)?,
        blood_pressure: row.get(4)?,
        temperature: row.get(5)?,
        spo2: row.get(6)?,
        carboxyhemoglobin: row.get(7)?,
    })
}

const PERSONNEL_COLUMNS: &str = "id, name, role, agency, dob";
const VITALS_COLUMNS: &str =
    "id, personnel_id, recorded_at, heart_rate, blood_pressure, temperature, spo2, carboxyhemoglobin";

impl RecordStore for SqliteStore {
    fn create_personnel(&self, person: &NewPersonnel) -> Result<i64, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;
        insert_personnel(&conn, person)
    }

    fn create_personnel_batch(&self, people: &[NewPersonnel]) -> Result<usize, StoreError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;
        let tx = conn
            .transaction()
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        for person in people {
            insert_personnel(&tx, person)?;
        }
        tx.commit()
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        Ok(people.len())
    }

    fn create_vitals(&self, reading: &NewVitals) -> Result<i64, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;
        insert_vitals(&conn, reading)
    }

    fn create_vitals_batch(&self, readings: &[NewVitals]) -> Result<usize, StoreError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;
        let tx = conn
            .transaction()
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        for reading in readings {
            insert_vitals(&tx, reading)?;
        }
        tx.commit()
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        Ok(readings.len())
    }

    fn get_personnel(&self, id: i64) -> Result<Option<Personnel>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?;

        let result = conn.query_row(
            &format!("SELECT {PERSONNEL_COLUMNS} FROM personnel WHERE id = ?1"),
            params![id],
            parse_personnel_row,
        );

        match result {
            Ok(person) => Ok(Some(person)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::ReadFailed(e.to_string())),
        }
    }

    fn find_personnel_by_name(&self, name: &str) -> Result<Vec<Personnel>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {PERSONNEL_COLUMNS} FROM personnel WHERE name = ?1 ORDER BY id ASC"
            ))
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        let people = stmt
            .query_map(params![name], parse_personnel_row)
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        drop(stmt);
        drop(conn);
        Ok(people)
    }

    fn list_personnel(&self) -> Result<Vec<Personnel>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {PERSONNEL_COLUMNS} FROM personnel ORDER BY id ASC"
            ))
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        let people = stmt
            .query_map([], parse_personnel_row)
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        drop(stmt);
        drop(conn);
        Ok(people)
    }

    fn list_vitals_for(&self, personnel_id: i64) -> Result<Vec<VitalsReading>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {VITALS_COLUMNS} FROM vitals WHERE personnel_id = ?1 \
                 ORDER BY recorded_at DESC, id DESC"
            ))
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        let readings = stmt
            .query_map(params![personnel_id], parse_vitals_row)
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;

        drop(stmt);
        drop(conn);
        Ok(readings)
    }

    fn latest_vitals_for(&self, personnel_id: i64) -> Result<Option<VitalsReading>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?;

        let result = conn.query_row(
            &format!(
                "SELECT {VITALS_COLUMNS} FROM vitals WHERE personnel_id = ?1 \
                 ORDER BY recorded_at DESC, id DESC LIMIT 1"
            ),
            params![personnel_id],
            parse_vitals_row,
        );

        match result {
            Ok(reading) => Ok(Some(reading)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::ReadFailed(e.to_string())),
        }
    }
}
