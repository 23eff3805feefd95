//! # DragonDB - Local Record Store
//!
//! A thin handle over a single-file SQLite database.
//!
//! DragonDB provides:
//! - Idempotent table setup with one-time seed data
//! - Schema (column descriptor) and row reads in storage order
//! - A parameterized single-field update with commit-or-rollback
//! - Creation of a table whose name is supplied at runtime

pub mod record;
pub mod storage;
pub mod table_name;
pub mod report;
pub mod prompt;
pub mod config;
pub mod commands;
pub mod logging;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use record::{ColumnDescriptor, Row, Value};
pub use storage::{RecordStore, SetupOutcome, TableSnapshot, UpdateOutcome};
pub use table_name::{IdentifierPolicy, TableName};
pub use report::ReportFormat;

/// Result type alias for DragonDB operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for DragonDB operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Table name can't be empty")]
    EmptyTableName,

    #[error("Invalid table name '{0}': use letters, digits and underscores, not starting with a digit")]
    InvalidTableName(String),

    #[error("Table not found: {0}")]
    TableNotFound(String),
}

impl Error {
    /// True for failures raised by the storage engine itself
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}
