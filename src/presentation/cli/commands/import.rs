use std::fs::File;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use crate::application::services::import::ImportService;
use crate::domain::ports::store::RecordStore;

/// Bulk-imports personnel rows from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the CSV is unreadable,
/// or the batch write fails.
pub fn run_import_personnel(store: &dyn RecordStore, path: &Path) -> anyhow::Result<()> {
    let file = File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let count = ImportService::new(store).import_personnel(file)?;
    println!(
        "{} Imported {} personnel record(s)",
        "✔".green().bold(),
        count.to_string().bold()
    );
    Ok(())
}

/// Bulk-imports vitals rows from a CSV file, matching each row to an
/// existing person by name. The whole batch is rejected on the first
/// malformed numeric cell.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the CSV is unreadable,
/// a numeric cell is malformed, or the batch write fails.
pub fn run_import_vitals(store: &dyn RecordStore, path: &Path) -> anyhow::Result<()> {
    let file = File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let report = ImportService::new(store).import_vitals(file)?;
    println!(
        "{} Imported {} vitals row(s), skipped {} (no matching name)",
        "✔".green().bold(),
        report.added.to_string().bold(),
        report.skipped
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    use colored::control;

    use crate::domain::ports::store::NewPersonnel;
    use crate::infrastructure::persistence::in_memory_store::InMemoryStore;

    fn disable_colors() {
        control::set_override(false);
    }

    fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).expect("create csv");
        file.write_all(content.as_bytes()).expect("write csv");
        path
    }

    #[test]
    fn imports_personnel_file() {
        disable_colors();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(
            &dir,
            "roster.csv",
            "name,role,agency,dob\nDana Reyes,Paramedic,County EMS,14/03/1988\n",
        );

        let store = InMemoryStore::new();
        run_import_personnel(&store, &path).expect("import");
        assert_eq!(store.list_personnel().expect("list").len(), 1);
    }

    #[test]
    fn imports_vitals_file() {
        disable_colors();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(
            &dir,
            "vitals.csv",
            "name,timestamp,heart_rate,blood_pressure,temperature,spo2,carboxyhemoglobin\n\
             Dana Reyes,2024-06-01 08:00:00,72,120/80,36.6,98,0.8\n",
        );

        let store = InMemoryStore::new();
        store
            .create_personnel(&NewPersonnel {
                name: "Dana Reyes".to_string(),
                role: "Paramedic".to_string(),
                agency: "County EMS".to_string(),
                dob: None,
            })
            .expect("create");
        run_import_vitals(&store, &path).expect("import");
        assert_eq!(store.list_vitals_for(1).expect("list").len(), 1);
    }

    #[test]
    fn missing_file_fails_with_context() {
        disable_colors();
        let store = InMemoryStore::new();
        let result = run_import_personnel(&store, Path::new("/nonexistent/roster.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_vitals_file_fails() {
        disable_colors();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_csv(
            &dir,
            "vitals.csv",
            "name,heart_rate\nDana Reyes,not-a-number\n",
        );

        let store = InMemoryStore::new();
        store
            .create_personnel(&NewPersonnel {
                name: "Dana Reyes".to_string(),
                role: String::new(),
                agency: String::new(),
                dob: None,
            })
            .expect("create");
        let result = run_import_vitals(&store, &path);
        assert!(result.is_err());
        assert!(store.list_vitals_for(1).expect("list").is_empty());
    }
}
