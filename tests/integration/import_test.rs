#![allow(clippy::expect_used)]

use std::fs::File;
use std::path::PathBuf;

use pulsewatch::application::services::import::{ImportError, ImportService};
use pulsewatch::domain::ports::store::RecordStore;
use pulsewatch::infrastructure::persistence::in_memory_store::InMemoryStore;

fn fixture(name: &str) -> File {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    File::open(&path).expect("failed to open fixture")
}

fn store_with_roster() -> InMemoryStore {
    let store = InMemoryStore::new();
    ImportService::new(&store)
        .import_personnel(fixture("personnel.csv"))
        .expect("personnel import");
    store
}

#[test]
fn personnel_fixture_imports_every_row() {
    let store = store_with_roster();
    let people = store.list_personnel().expect("list");
    assert_eq!(people.len(), 3);

    assert_eq!(people[0].name, "Dana Reyes");
    assert_eq!(people[0].role, "Paramedic");
    assert_eq!(people[0].agency, "County EMS");
    assert!(people[0].dob.is_some(), "day-first dob should parse");

    assert!(people[2].dob.is_none(), "empty dob stays absent");
}

#[test]
fn vitals_fixture_matches_by_name_and_skips_unknowns() {
    let store = store_with_roster();
    let report = ImportService::new(&store)
        .import_vitals(fixture("vitals.csv"))
        .expect("vitals import");

    assert_eq!(report.added, 3);
    assert_eq!(report.skipped, 1, "Unknown Person row is skipped");

    let dana = &store.find_personnel_by_name("Dana Reyes").expect("find")[0];
    let readings = store.list_vitals_for(dana.id).expect("list");
    assert_eq!(readings.len(), 2);

    // Newest first: the 14:00 reading leads
    assert_eq!(readings[0].heart_rate, Some(45));
    assert_eq!(readings[0].blood_pressure.as_deref(), Some("180/110"));
    assert!(readings[0].carboxyhemoglobin.is_none());
    assert_eq!(readings[1].heart_rate, Some(72));
    assert_eq!(readings[1].temperature, Some(36.6));
}

#[test]
fn reimporting_personnel_duplicates_rows() {
    let store = store_with_roster();
    ImportService::new(&store)
        .import_personnel(fixture("personnel.csv"))
        .expect("second import");
    assert_eq!(store.list_personnel().expect("list").len(), 6);
}

#[test]
fn malformed_numeric_cell_aborts_whole_batch() {
    let store = store_with_roster();
    let err = ImportService::new(&store)
        .import_vitals(fixture("vitals_malformed.csv"))
        .expect_err("must fail");

    match err {
        ImportError::Validation { row, column, value } => {
            assert_eq!(row, 2);
            assert_eq!(column, "heart_rate");
            assert_eq!(value, "not-a-number");
        }
        other => panic!("unexpected error: {other}"),
    }

    // Atomicity: the valid first row was not committed either
    let dana = &store.find_personnel_by_name("Dana Reyes").expect("find")[0];
    assert!(store.list_vitals_for(dana.id).expect("list").is_empty());
}

#[test]
fn duplicate_names_attach_to_earliest_record() {
    let store = store_with_roster();
    // Second roster import creates a same-named duplicate of everyone
    ImportService::new(&store)
        .import_personnel(fixture("personnel.csv"))
        .expect("second import");

    ImportService::new(&store)
        .import_vitals(fixture("vitals.csv"))
        .expect("vitals import");

    let matches = store.find_personnel_by_name("Dana Reyes").expect("find");
    assert_eq!(matches.len(), 2);
    assert_eq!(
        store.list_vitals_for(matches[0].id).expect("list").len(),
        2,
        "readings go to the earliest record"
    );
    assert!(store.list_vitals_for(matches[1].id).expect("list").is_empty());
}
