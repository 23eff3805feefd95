//! Storage Layer - SQLite-backed persistence
//!
//! One file, one connection per run. Tables:
//! - dragons(id, name, color, fire_power), created and seeded on demand
//! - any number of runtime-named tables(id, name, power_level, is_mythical)

pub mod schema;
pub mod sqlite;

pub use sqlite::{RecordStore, SetupOutcome, TableSnapshot, UpdateOutcome};
