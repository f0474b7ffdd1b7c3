use colored::Colorize;

use crate::application::parsing::parse_date;
use crate::domain::ports::store::{NewPersonnel, RecordStore};

/// Registers one person. An unparseable date of birth is stored as "no
/// date", matching the bulk import's permissive behavior.
///
/// # Errors
///
/// Returns an error if the store write fails.
pub fn run_add_person(
    store: &dyn RecordStore,
    name: &str,
    role: &str,
    agency: &str,
    dob_raw: Option<&str>,
) -> anyhow::Result<()> {
    let dob = dob_raw.and_then(parse_date);
    if let Some(raw) = dob_raw {
        if dob.is_none() {
            println!(
                "{}",
                format!("Could not parse date of birth '{raw}', storing no date").yellow()
            );
        }
    }

    let person = NewPersonnel {
        name: name.trim().to_string(),
        role: role.trim().to_string(),
        agency: agency.trim().to_string(),
        dob,
    };
    let id = store
        .create_personnel(&person)
        .map_err(|e| anyhow::anyhow!("failed to add person: {e}"))?;

    println!(
        "{} Added {} (id {id})",
        "✔".green().bold(),
        person.name.bold()
    );
    Ok(())
}
