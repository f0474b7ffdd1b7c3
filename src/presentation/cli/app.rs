use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pulsewatch — personnel vitals tracking and clinical alerting
///
/// Records vital-sign readings per person, classifies them against
/// threshold bands, and imports/exports CSV reports.
#[derive(Parser, Debug)]
#[command(name = "pulsewatch")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every person with their latest reading and status
    #[command(alias = "d")]
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show only people whose latest reading triggered a rule
    #[command(alias = "a")]
    Alerts {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one person's reading history, newest first
    #[command(alias = "h")]
    History {
        /// Personnel id to inspect
        person_id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new person
    #[command(alias = "ap")]
    AddPerson {
        /// Full name (also the vitals import join key)
        #[arg(long)]
        name: String,

        /// Role or position
        #[arg(long, default_value = "")]
        role: String,

        /// Agency or unit
        #[arg(long, default_value = "")]
        agency: String,

        /// Date of birth, day-first (e.g. 14/03/1988)
        #[arg(long)]
        dob: Option<String>,
    },

    /// Record one vitals reading for a person
    #[command(alias = "av")]
    AddVitals {
        /// Personnel id the reading belongs to
        person_id: i64,

        /// Heart rate in bpm
        #[arg(long)]
        heart_rate: Option<i32>,

        /// Blood pressure as "systolic/diastolic"
        #[arg(long)]
        blood_pressure: Option<String>,

        /// Body temperature in °C
        #[arg(long)]
        temperature: Option<f64>,

        /// Oxygen saturation in %
        #[arg(long)]
        spo2: Option<i32>,

        /// Carboxyhemoglobin in %
        #[arg(long)]
        carboxyhemoglobin: Option<f64>,

        /// Reading timestamp (defaults to now)
        #[arg(long)]
        timestamp: Option<String>,
    },

    /// Bulk-import records from a CSV file
    #[command(alias = "i", subcommand)]
    Import(ImportTarget),

    /// Export a CSV report
    #[command(alias = "e", subcommand)]
    Export(ExportTarget),
}

/// What a CSV import file contains
#[derive(Subcommand, Debug)]
pub enum ImportTarget {
    /// Personnel rows: name, role, agency, dob
    Personnel {
        /// CSV file to import
        file: PathBuf,
    },

    /// Vitals rows matched to existing people by name
    Vitals {
        /// CSV file to import
        file: PathBuf,
    },
}

/// Which CSV report to produce
#[derive(Subcommand, Debug)]
pub enum ExportTarget {
    /// Full roster with latest readings
    Roster {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Flagged people only, with alert messages
    Alerts {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// One person's full reading history
    History {
        /// Personnel id to export
        person_id: i64,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
