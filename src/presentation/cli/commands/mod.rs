pub mod add_person;
pub mod add_vitals;
pub mod alerts;
pub mod dashboard;
pub mod export;
pub mod history;
pub mod import;
