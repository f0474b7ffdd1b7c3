use crate::application::services::roster::RosterService;
use crate::domain::ports::store::RecordStore;
use crate::domain::rules::Evaluator;
use crate::domain::value_objects::thresholds::ThresholdSet;
use crate::presentation::cli::formatters::alert_fmt::{format_alert_entries, print_no_alerts};
use crate::presentation::cli::formatters::roster_fmt::print_section_header;

/// Shows only people whose latest reading triggered at least one rule.
///
/// # Errors
///
/// Returns an error if the store query fails or JSON serialization fails.
pub fn run_alerts(
    store: &dyn RecordStore,
    evaluator: &Evaluator,
    thresholds: &ThresholdSet,
    json: bool,
) -> anyhow::Result<()> {
    let service = RosterService::new(store, evaluator, thresholds);
    let entries = service
        .alerts()
        .map_err(|e| anyhow::anyhow!("failed to read alerts: {e}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    print_section_header("Active alerts");
    if entries.is_empty() {
        print_no_alerts();
    } else {
        format_alert_entries(&entries);
    }
    Ok(())
}
