pub mod alert_fmt;
pub mod roster_fmt;
