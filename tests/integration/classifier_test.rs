#![allow(clippy::expect_used)]

use chrono::{TimeZone, Utc};
use pulsewatch::domain::entities::vitals::VitalsReading;
use pulsewatch::domain::rules::{default_rules, Evaluator};
use pulsewatch::domain::value_objects::severity::Severity;
use pulsewatch::domain::value_objects::thresholds::ThresholdSet;

fn make_reading(build: impl FnOnce(&mut VitalsReading)) -> VitalsReading {
    let mut reading = VitalsReading {
        id: 1,
        personnel_id: 1,
        timestamp: Utc
            .with_ymd_and_hms(2024, 6, 1, 8, 0, 0)
            .single()
            .expect("timestamp"),
        heart_rate: None,
        blood_pressure: None,
        temperature: None,
        spo2: None,
        carboxyhemoglobin: None,
    };
    build(&mut reading);
    reading
}

fn evaluate(build: impl FnOnce(&mut VitalsReading)) -> (Severity, Vec<String>) {
    let evaluator = Evaluator::new(default_rules());
    let evaluation = evaluator.evaluate(Some(&make_reading(build)), &ThresholdSet::default());
    let messages = evaluation.messages().map(ToString::to_string).collect();
    (evaluation.severity, messages)
}

#[test]
fn absent_reading_is_normal_with_no_messages() {
    let evaluator = Evaluator::new(default_rules());
    let evaluation = evaluator.evaluate(None, &ThresholdSet::default());
    assert_eq!(evaluation.severity, Severity::Normal);
    assert_eq!(evaluation.messages().count(), 0);
}

#[test]
fn all_fields_absent_is_normal() {
    let (severity, messages) = evaluate(|_| {});
    assert_eq!(severity, Severity::Normal);
    assert!(messages.is_empty());
}

#[test]
fn each_field_alone_in_critical_band_yields_alert_with_one_message() {
    let cases: Vec<Box<dyn FnOnce(&mut VitalsReading)>> = vec![
        Box::new(|r: &mut VitalsReading| r.heart_rate = Some(45)),
        Box::new(|r: &mut VitalsReading| r.blood_pressure = Some("180/110".to_string())),
        Box::new(|r: &mut VitalsReading| r.temperature = Some(39.5)),
        Box::new(|r: &mut VitalsReading| r.spo2 = Some(85)),
        Box::new(|r: &mut VitalsReading| r.carboxyhemoglobin = Some(12.0)),
    ];
    for case in cases {
        let (severity, messages) = evaluate(case);
        assert_eq!(severity, Severity::Alert);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Critical"));
    }
}

#[test]
fn severity_is_monotone_under_additional_out_of_range_fields() {
    let (base, _) = evaluate(|r| r.heart_rate = Some(58));
    let (extended, _) = evaluate(|r| {
        r.heart_rate = Some(58);
        r.temperature = Some(39.5);
    });
    assert!(extended >= base);

    let (alert_base, _) = evaluate(|r| r.spo2 = Some(85));
    let (alert_extended, _) = evaluate(|r| {
        r.spo2 = Some(85);
        r.temperature = Some(37.8);
    });
    assert!(alert_extended >= alert_base);
}

#[test]
fn evaluation_is_idempotent() {
    let evaluator = Evaluator::new(default_rules());
    let reading = make_reading(|r| {
        r.heart_rate = Some(45);
        r.blood_pressure = Some("not-a-number".to_string());
        r.spo2 = Some(92);
    });
    let thresholds = ThresholdSet::default();
    let first = evaluator.evaluate(Some(&reading), &thresholds);
    let second = evaluator.evaluate(Some(&reading), &thresholds);
    assert_eq!(first, second);
}

#[test]
fn heart_rate_boundaries() {
    let (severity, _) = evaluate(|r| r.heart_rate = Some(55));
    assert_eq!(severity, Severity::Warning, "55 bpm is borderline, not critical");

    let (severity, _) = evaluate(|r| r.heart_rate = Some(54));
    assert_eq!(severity, Severity::Alert);
}

#[test]
fn spo2_boundaries() {
    let (severity, messages) = evaluate(|r| r.spo2 = Some(94));
    assert_eq!(severity, Severity::Normal);
    assert!(messages.is_empty());

    let (severity, _) = evaluate(|r| r.spo2 = Some(89));
    assert_eq!(severity, Severity::Alert);
}

#[test]
fn mixed_reading_reports_only_triggered_fields() {
    let (severity, messages) = evaluate(|r| {
        r.heart_rate = Some(45);
        r.blood_pressure = Some("180/110".to_string());
        r.temperature = Some(37.0);
        r.spo2 = Some(96);
    });
    assert_eq!(severity, Severity::Alert);
    assert_eq!(
        messages,
        vec![
            "Critical heart rate: 45 bpm".to_string(),
            "Critical blood pressure: 180/110".to_string(),
        ]
    );
}

#[test]
fn invalid_blood_pressure_is_at_least_warning() {
    let (severity, messages) = evaluate(|r| r.blood_pressure = Some("not-a-number".to_string()));
    assert!(severity >= Severity::Warning);
    assert_eq!(
        messages,
        vec!["Invalid blood pressure format: not-a-number".to_string()]
    );
}
