use colored::Colorize;

use crate::application::services::roster::RosterEntry;
use crate::presentation::cli::formatters::roster_fmt::severity_badge;

/// Strips ANSI/OSC escape sequences from a string to prevent terminal injection.
fn sanitize_terminal(input: &str) -> String {
    input.chars().filter(|c| *c != '\x1b').collect()
}

/// Prints flagged roster entries with their triggered messages.
pub fn format_alert_entries(entries: &[RosterEntry]) {
    for entry in entries {
        println!();
        println!(
            "{} {} — {}",
            severity_badge(entry.evaluation.severity),
            sanitize_terminal(&entry.person.name).bold(),
            sanitize_terminal(&entry.person.agency).dimmed()
        );
        for message in entry.evaluation.messages() {
            println!("  • {}", sanitize_terminal(message));
        }
    }
    println!();
}

pub fn print_no_alerts() {
    println!();
    println!(
        "{}",
        "✅ All personnel within normal ranges — no alerts".green().bold()
    );
    println!();
}
