//! pulsewatch — personnel vitals tracking and clinical alerting.
//!
//! Readings are evaluated against nested threshold bands by a deterministic
//! rule engine; bulk CSV import attaches readings to personnel by name and
//! three CSV report variants flatten the roster back out.

#![warn(clippy::pedantic)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
