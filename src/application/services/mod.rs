pub mod export;
pub mod import;
pub mod matcher;
pub mod roster;
