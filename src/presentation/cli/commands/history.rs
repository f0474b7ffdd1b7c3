use colored::Colorize;

use crate::application::services::roster::RosterService;
use crate::domain::ports::store::RecordStore;
use crate::domain::rules::Evaluator;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::presentation::cli::formatters::roster_fmt::{
    format_history_table, print_section_header,
};

/// Shows one person's reading history, newest first, each reading
/// classified on its own.
///
/// # Errors
///
/// Returns an error if the person does not exist, the store query fails,
/// or JSON serialization fails.
pub fn run_history(
    store: &dyn RecordStore,
    evaluator: &Evaluator,
    thresholds: &ThresholdSet,
    person_id: i64,
    json: bool,
) -> anyhow::Result<()> {
    let service = RosterService::new(store, evaluator, thresholds);
    let Some(history) = service
        .history(person_id)
        .map_err(|e| anyhow::anyhow!("failed to read history: {e}"))?
    else {
        anyhow::bail!("personnel {person_id} not found");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    print_section_header(&format!(
        "Vitals history — {} ({})",
        history.person.name, history.person.agency
    ));
    if history.entries.is_empty() {
        println!("{}", "No readings recorded yet".dimmed());
    } else {
        println!("{}", format_history_table(&history.entries));
    }
    Ok(())
}
