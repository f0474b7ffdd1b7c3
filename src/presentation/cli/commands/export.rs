use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use crate::application::services::export::ExportService;
use crate::domain::ports::store::RecordStore;
use crate::domain::rules::Evaluator;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// The three CSV report variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Roster,
    Alerts,
    History { person_id: i64 },
}

/// Produces one CSV report, written to `output` or printed to stdout.
///
/// # Errors
///
/// Returns an error if the report cannot be generated or the file cannot
/// be written.
pub fn run_export(
    store: &dyn RecordStore,
    evaluator: &Evaluator,
    thresholds: &ThresholdSet,
    kind: ReportKind,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let service = ExportService::new(store, evaluator, thresholds);
    let csv = match kind {
        ReportKind::Roster => service.full_roster()?,
        ReportKind::Alerts => service.alerts_only()?,
        ReportKind::History { person_id } => service.person_history(person_id)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, &csv)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "{} Report written to {}",
                "✔".green().bold(),
                path.display().to_string().bold()
            );
        }
        None => print!("{csv}"),
    }
    Ok(())
}
