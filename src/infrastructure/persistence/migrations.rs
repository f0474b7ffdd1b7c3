use rusqlite::Connection;

/// Initialize the database schema, creating tables if they don't exist.
///
/// # Errors
/// Returns `rusqlite::Error` if any SQL statement fails.
pub fn initialize_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS personnel (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            name    TEXT    NOT NULL,
            role    TEXT    NOT NULL,
            agency  TEXT    NOT NULL,
            dob     TEXT
        );

        CREATE TABLE IF NOT EXISTS vitals (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            personnel_id       INTEGER NOT NULL REFERENCES personnel(id),
            recorded_at        TEXT    NOT NULL,
            heart_rate         INTEGER,
            blood_pressure     TEXT,
            temperature        REAL,
            spo2               INTEGER,
            carboxyhemoglobin  REAL
        );

        CREATE INDEX IF NOT EXISTS idx_personnel_name ON personnel(name);
        CREATE INDEX IF NOT EXISTS idx_vitals_personnel ON vitals(personnel_id, recorded_at);",
    )?;
    Ok(())
}
