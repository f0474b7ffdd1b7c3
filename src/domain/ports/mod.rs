pub mod store;

pub use store::{NewPersonnel, NewVitals, RecordStore, StoreError};
