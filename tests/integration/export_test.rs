#![allow(clippy::expect_used)]

use std::fs::File;
use std::path::PathBuf;

use pulsewatch::application::services::export::ExportService;
use pulsewatch::application::services::import::ImportService;
use pulsewatch::domain::ports::store::{NewVitals, RecordStore};
use pulsewatch::domain::rules::Evaluator;
use pulsewatch::domain::value_objects::thresholds::ThresholdSet;
use pulsewatch::infrastructure::persistence::in_memory_store::InMemoryStore;

fn fixture(name: &str) -> File {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    File::open(&path).expect("failed to open fixture")
}

fn populated_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    let importer = ImportService::new(&store);
    importer
        .import_personnel(fixture("personnel.csv"))
        .expect("personnel import");
    importer
        .import_vitals(fixture("vitals.csv"))
        .expect("vitals import");
    store
}

#[test]
fn full_roster_has_one_row_per_person() {
    let store = populated_store();
    let evaluator = Evaluator::default();
    let thresholds = ThresholdSet::default();
    let csv = ExportService::new(&store, &evaluator, &thresholds)
        .full_roster()
        .expect("export");

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "Name,Role,Agency,Heart Rate,Blood Pressure,Temperature,SpO2,Carboxyhemoglobin,Status,Timestamp"
    );
    assert_eq!(lines.len(), 4, "header plus three people");

    // Dana's latest (14:00) reading is critical
    assert_eq!(
        lines[1],
        "Dana Reyes,Paramedic,County EMS,45,180/110,37,96,,alert,2024-06-01T14:00:00Z"
    );
    // Mira has no readings: empty cells, normal status, empty timestamp
    assert_eq!(lines[3], "Mira Chen,Logistics,Red Crescent,,,,,,normal,");
}

#[test]
fn alerts_report_filters_to_flagged_people_and_joins_messages() {
    let store = populated_store();
    let evaluator = Evaluator::default();
    let thresholds = ThresholdSet::default();
    let csv = ExportService::new(&store, &evaluator, &thresholds)
        .alerts_only()
        .expect("export");

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "Name,Role,Agency,Heart Rate,Blood Pressure,Temperature,SpO2,Carboxyhemoglobin,Status,Alerts,Timestamp"
    );
    // Dana (alert) and K. Osei (warning+alert fields); Mira excluded entirely
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Dana Reyes,"));
    assert!(lines[1].contains("Critical heart rate: 45 bpm; Critical blood pressure: 180/110"));
    assert!(lines[2].starts_with("K. Osei,"));
    assert!(lines[2].contains("Borderline Carboxyhemoglobin: 3.2%"));
}

#[test]
fn person_history_reproduces_every_stored_field_exactly() {
    let store = populated_store();
    let dana = &store.find_personnel_by_name("Dana Reyes").expect("find")[0];

    let evaluator = Evaluator::default();
    let thresholds = ThresholdSet::default();
    let csv = ExportService::new(&store, &evaluator, &thresholds)
        .person_history(dana.id)
        .expect("export");

    let stored = store.list_vitals_for(dana.id).expect("list");
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("parse exported csv");
    assert_eq!(rows.len(), stored.len());

    for (row, reading) in rows.iter().zip(&stored) {
        let cell = |i: usize| row.get(i).expect("cell");
        assert_eq!(
            cell(0),
            reading
                .timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        );
        let parse_opt_int = |i: usize| {
            let v = cell(i);
            if v.is_empty() {
                None
            } else {
                Some(v.parse::<i32>().expect("int"))
            }
        };
        let parse_opt_float = |i: usize| {
            let v = cell(i);
            if v.is_empty() {
                None
            } else {
                Some(v.parse::<f64>().expect("float"))
            }
        };
        assert_eq!(parse_opt_int(1), reading.heart_rate);
        let bp = cell(2);
        assert_eq!(
            if bp.is_empty() { None } else { Some(bp.to_string()) },
            reading.blood_pressure
        );
        assert_eq!(parse_opt_float(3), reading.temperature);
        assert_eq!(parse_opt_int(4), reading.spo2);
        assert_eq!(parse_opt_float(5), reading.carboxyhemoglobin);
    }
}

#[test]
fn person_history_classifies_each_reading_alone() {
    let store = populated_store();
    let dana = &store.find_personnel_by_name("Dana Reyes").expect("find")[0];

    // A fresh in-range reading must come out normal even though the
    // previous one was critical
    store
        .create_vitals(&NewVitals {
            personnel_id: dana.id,
            timestamp: pulsewatch::application::parsing::parse_timestamp("2024-06-02 08:00:00")
                .expect("ts"),
            heart_rate: Some(72),
            blood_pressure: None,
            temperature: None,
            spo2: None,
            carboxyhemoglobin: None,
        })
        .expect("create");

    let evaluator = Evaluator::default();
    let thresholds = ThresholdSet::default();
    let csv = ExportService::new(&store, &evaluator, &thresholds)
        .person_history(dana.id)
        .expect("export");

    let lines: Vec<&str> = csv.lines().collect();
    assert!(lines[1].ends_with(",normal"), "newest reading is normal");
    assert!(lines[2].ends_with(",alert"), "earlier reading stays alert");
}

#[test]
fn exports_do_not_mutate_the_store() {
    let store = populated_store();
    let evaluator = Evaluator::default();
    let thresholds = ThresholdSet::default();
    let service = ExportService::new(&store, &evaluator, &thresholds);

    let before_people = store.list_personnel().expect("list").len();
    service.full_roster().expect("roster");
    service.alerts_only().expect("alerts");
    assert_eq!(store.list_personnel().expect("list").len(), before_people);
}
