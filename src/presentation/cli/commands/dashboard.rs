use colored::Colorize;

use crate::application::services::roster::RosterService;
use crate::domain::ports::store::RecordStore;
use crate::domain::rules::Evaluator;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::presentation::cli::formatters::roster_fmt::{format_roster_table, print_section_header};

/// Shows every person with their latest reading and status.
///
/// # Errors
///
/// Returns an error if the store query fails or JSON serialization fails.
pub fn run_dashboard(
    store: &dyn RecordStore,
    evaluator: &Evaluator,
    thresholds: &ThresholdSet,
    json: bool,
) -> anyhow::Result<()> {
    let service = RosterService::new(store, evaluator, thresholds);
    let entries = service
        .dashboard()
        .map_err(|e| anyhow::anyhow!("failed to read roster: {e}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    print_section_header("Personnel dashboard");
    if entries.is_empty() {
        println!("{}", "No personnel registered yet".dimmed());
        return Ok(());
    }

    println!("{}", format_roster_table(&entries));

    let flagged = entries.iter().filter(|e| e.evaluation.is_flagged()).count();
    println!();
    if flagged == 0 {
        println!("{}", "All readings within normal ranges".green());
    } else {
        println!(
            "{}",
            format!("{flagged} of {} flagged — see `pulsewatch alerts`", entries.len()).yellow()
        );
    }
    Ok(())
}
