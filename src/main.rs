use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use pulsewatch::application::config::AppConfig;
use pulsewatch::domain::rules::Evaluator;
use pulsewatch::domain::value_objects::thresholds::ThresholdSet;
use pulsewatch::infrastructure::persistence::sqlite_store::SqliteStore;
use pulsewatch::presentation::cli::app::{Cli, Commands, ExportTarget, ImportTarget};
use pulsewatch::presentation::cli::commands::add_person::run_add_person;
use pulsewatch::presentation::cli::commands::add_vitals::{run_add_vitals, VitalsInput};
use pulsewatch::presentation::cli::commands::alerts::run_alerts;
use pulsewatch::presentation::cli::commands::dashboard::run_dashboard;
use pulsewatch::presentation::cli::commands::export::{run_export, ReportKind};
use pulsewatch::presentation::cli::commands::history::run_history;
use pulsewatch::presentation::cli::commands::import::{run_import_personnel, run_import_vitals};

fn print_banner() {
    println!("{}", "━".repeat(44).cyan());
    println!("{}", "  PULSEWATCH — Personnel Vitals Monitor".bold().cyan());
    println!("{}", "━".repeat(44).cyan());
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Load configuration
    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };

    // Manual DI — main.rs is the only place that knows concrete types
    let store = SqliteStore::new(&config.database.path)?;
    let evaluator = Evaluator::default();
    let thresholds = ThresholdSet::from(&config.thresholds);

    match cli.command {
        Some(Commands::Dashboard { json }) => {
            run_dashboard(&store, &evaluator, &thresholds, json)?;
        }
        None => {
            print_banner();
            run_dashboard(&store, &evaluator, &thresholds, false)?;
        }
        Some(Commands::Alerts { json }) => {
            run_alerts(&store, &evaluator, &thresholds, json)?;
        }
        Some(Commands::History { person_id, json }) => {
            run_history(&store, &evaluator, &thresholds, person_id, json)?;
        }
        Some(Commands::AddPerson {
            name,
            role,
            agency,
            dob,
        }) => {
            run_add_person(&store, &name, &role, &agency, dob.as_deref())?;
        }
        Some(Commands::AddVitals {
            person_id,
            heart_rate,
            blood_pressure,
            temperature,
            spo2,
            carboxyhemoglobin,
            timestamp,
        }) => {
            let input = VitalsInput {
                heart_rate,
                blood_pressure: blood_pressure.as_deref(),
                temperature,
                spo2,
                carboxyhemoglobin,
                timestamp: timestamp.as_deref(),
            };
            run_add_vitals(&store, &evaluator, &thresholds, person_id, &input)?;
        }
        Some(Commands::Import(ImportTarget::Personnel { file })) => {
            run_import_personnel(&store, &file)?;
        }
        Some(Commands::Import(ImportTarget::Vitals { file })) => {
            run_import_vitals(&store, &file)?;
        }
        Some(Commands::Export(ExportTarget::Roster { output })) => {
            run_export(
                &store,
                &evaluator,
                &thresholds,
                ReportKind::Roster,
                output.as_deref(),
            )?;
        }
        Some(Commands::Export(ExportTarget::Alerts { output })) => {
            run_export(
                &store,
                &evaluator,
                &thresholds,
                ReportKind::Alerts,
                output.as_deref(),
            )?;
        }
        Some(Commands::Export(ExportTarget::History { person_id, output })) => {
            run_export(
                &store,
                &evaluator,
                &thresholds,
                ReportKind::History { person_id },
                output.as_deref(),
            )?;
        }
    }

    Ok(())
}
