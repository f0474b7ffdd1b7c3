pub mod evaluation;
pub mod personnel;
pub mod vitals;

pub use evaluation::Evaluation;
pub use personnel::Personnel;
pub use vitals::VitalsReading;
