use colored::Colorize;

use crate::application::services::roster::{HistoryEntry, RosterEntry};
use crate::domain::entities::vitals::VitalsReading;
use crate::domain::value_objects::severity::Severity;

/// Colored status badge for terminal output.
#[must_use]
pub fn severity_badge(severity: Severity) -> String {
    let label = format!(" {} ", severity.to_string().to_uppercase());
    match severity {
        Severity::Alert => format!("{}", label.on_red().white().bold()),
        Severity::Warning => format!("{}", label.on_yellow().black().bold()),
        Severity::Normal => format!("{}", label.on_green().black()),
    }
}

fn cell_int(value: Option<i32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn cell_float(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

fn cell_str(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn reading_cells(reading: Option<&VitalsReading>) -> (String, String, String, String, String) {
    (
        cell_int(reading.and_then(|r| r.heart_rate)),
        cell_str(reading.and_then(|r| r.blood_pressure.as_deref())),
        cell_float(reading.and_then(|r| r.temperature)),
        cell_int(reading.and_then(|r| r.spo2)),
        cell_float(reading.and_then(|r| r.carboxyhemoglobin)),
    )
}

/// Formats the roster as an aligned table, one row per person.
///
/// # Returns
///
/// A multi-line string with header, separator, and personnel rows.
#[must_use]
pub fn format_roster_table(entries: &[RosterEntry]) -> String {
    let header = format!(
        "{:<4} {:<20} {:<14} {:<14} {:>5} {:>8} {:>6} {:>5} {:>6} {:<8}",
        "ID", "NAME", "ROLE", "AGENCY", "HR", "BP", "TEMP", "SPO2", "COHB", "STATUS"
    );
    let separator = "─".repeat(header.chars().count());

    let mut rows = vec![header, separator];

    for entry in entries {
        let name: String = entry.person.name.chars().take(19).collect();
        let role: String = entry.person.role.chars().take(13).collect();
        let agency: String = entry.person.agency.chars().take(13).collect();
        let (hr, bp, temp, spo2, cohb) = reading_cells(entry.latest.as_ref());
        let row = format!(
            "{:<4} {:<20} {:<14} {:<14} {:>5} {:>8} {:>6} {:>5} {:>6} {:<8}",
            entry.person.id,
            name,
            role,
            agency,
            hr,
            bp,
            temp,
            spo2,
            cohb,
            entry.evaluation.severity
        );
        match entry.evaluation.severity {
            Severity::Alert => rows.push(row.red().to_string()),
            Severity::Warning => rows.push(row.yellow().to_string()),
            Severity::Normal => rows.push(row),
        }
    }

    rows.join("\n")
}

/// Formats one person's reading history as an aligned table, newest first.
#[must_use]
pub fn format_history_table(entries: &[HistoryEntry]) -> String {
    let header = format!(
        "{:<20} {:>5} {:>8} {:>6} {:>5} {:>6} {:<8}",
        "TIMESTAMP", "HR", "BP", "TEMP", "SPO2", "COHB", "STATUS"
    );
    let separator = "─".repeat(header.chars().count());

    let mut rows = vec![header, separator];

    for entry in entries {
        let (hr, bp, temp, spo2, cohb) = reading_cells(Some(&entry.reading));
        let row = format!(
            "{:<20} {:>5} {:>8} {:>6} {:>5} {:>6} {:<8}",
            entry.reading.timestamp.format("%Y-%m-%d %H:%M:%S"),
            hr,
            bp,
            temp,
            spo2,
            cohb,
            entry.evaluation.severity
        );
        match entry.evaluation.severity {
            Severity::Alert => rows.push(row.red().to_string()),
            Severity::Warning => rows.push(row.yellow().to_string()),
            Severity::Normal => rows.push(row),
        }
    }

    rows.join("\n")
}

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}
