//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params};
use serde::Serialize;
use crate::{Result, Error};
use crate::record::{ColumnDescriptor, Row, Value};
use crate::table_name::TableName;
use super::schema;

/// What setting up the dragons table did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Table was empty; this many seed rows were inserted
    Seeded(usize),
    /// Table already held this many rows; nothing was written
    AlreadyPopulated(usize),
}

/// Result of a single-field update that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Committed; this many rows changed
    Updated(usize),
    /// No row matched the key; nothing was committed
    NoMatch,
}

/// Columns and rows of one table, read in a single pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSnapshot {
    pub table: String,
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<Row>,
}

impl TableSnapshot {
    /// Column names in declared order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Find the first row whose `column` holds `value`
    #[cfg(test)]
    pub fn find_row(&self, column: &str, value: &Value) -> Option<&Row> {
        let index = self.columns.iter().position(|c| c.name == column)?;
        self.rows.iter().find(|row| row.get(index) == Some(value))
    }
}

/// SQLite-backed record store.
///
/// Owns the single connection of a run; it is released when the store is
/// dropped or explicitly [closed](RecordStore::close).
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!("Opening database {}", path.display());
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Release the connection, surfacing any error from closing it
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Storage(e))
    }

    // ========== Schema Initializer ==========

    /// Create the dragons table if missing and seed it when empty.
    ///
    /// The seed batch is inserted in one transaction, so a failure leaves
    /// the table empty and the next run seeds again.
    pub fn ensure_dragons(&mut self) -> Result<SetupOutcome> {
        self.conn.execute(schema::CREATE_DRAGONS_TABLE, [])?;

        let existing = self.count_rows(schema::DRAGONS_TABLE)?;
        if existing > 0 {
            tracing::debug!("{} already holds {} rows, skipping seed", schema::DRAGONS_TABLE, existing);
            return Ok(SetupOutcome::AlreadyPopulated(existing));
        }

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(schema::INSERT_DRAGON)?;
            for (name, color, fire_power) in schema::SEED_DRAGONS {
                stmt.execute(params![name, color, fire_power])?;
            }
        }
        tx.commit()?;

        tracing::info!("Seeded {} with {} rows", schema::DRAGONS_TABLE, schema::SEED_DRAGONS.len());
        Ok(SetupOutcome::Seeded(schema::SEED_DRAGONS.len()))
    }

    // ========== Schema & Data Reader ==========

    /// Check whether a table exists; names match case-insensitively, as in SQL
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1 COLLATE NOCASE",
            [table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Names of all user tables, sorted
    pub fn table_names(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name"
        )?;

        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(names)
    }

    /// Count all rows in a table
    pub fn count_rows(&self, table: &str) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", schema::quote_identifier(table));
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Column descriptors in declared order, as currently defined on disk
    pub fn columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let mut stmt = self.conn.prepare(
            r#"SELECT cid, name, type, "notnull", dflt_value, pk FROM pragma_table_info(?1) ORDER BY cid"#
        )?;

        let columns = stmt
            .query_map([table], |row| self.row_to_column(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        if columns.is_empty() {
            return Err(Error::TableNotFound(table.to_string()));
        }
        Ok(columns)
    }

    /// Every row of a table, in whatever order the engine returns them
    pub fn rows(&self, table: &str) -> Result<Vec<Row>> {
        if !self.table_exists(table)? {
            return Err(Error::TableNotFound(table.to_string()));
        }

        let sql = format!("SELECT * FROM {}", schema::quote_identifier(table));
        let mut stmt = self.conn.prepare(&sql)?;
        let width = stmt.column_count();

        let rows = stmt
            .query_map([], |row| {
                (0..width)
                    .map(|i| row.get_ref(i).map(Value::from))
                    .collect::<rusqlite::Result<Vec<_>>>()
                    .map(Row)
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
    }

    /// Read columns and rows together
    pub fn read_table(&self, table: &str) -> Result<TableSnapshot> {
        Ok(TableSnapshot {
            table: table.to_string(),
            columns: self.columns(table)?,
            rows: self.rows(table)?,
        })
    }

    /// Helper to convert a pragma_table_info row to a ColumnDescriptor
    fn row_to_column(&self, row: &rusqlite::Row) -> rusqlite::Result<ColumnDescriptor> {
        let not_null: i64 = row.get(3)?;
        let pk: i64 = row.get(5)?;

        Ok(ColumnDescriptor {
            position: row.get(0)?,
            name: row.get(1)?,
            declared_type: row.get(2)?,
            not_null: not_null != 0,
            default_value: row.get(4)?,
            primary_key: pk > 0,
        })
    }

    // ========== Field Editor ==========

    /// Set `color` on every dragon whose name equals `name`.
    ///
    /// Commits only when at least one row changed. A statement error rolls the
    /// transaction back and is returned to the caller.
    pub fn update_color(&mut self, name: &str, color: &str) -> Result<UpdateOutcome> {
        let tx = self.conn.transaction()?;

        let affected = match tx.execute(schema::UPDATE_DRAGON_COLOR, params![color, name]) {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!("Update of '{}' failed, rolling back: {}", name, e);
                if let Err(rollback) = tx.rollback() {
                    tracing::error!("Rollback after failed update also failed: {}", rollback);
                }
                return Err(e.into());
            }
        };

        if affected == 0 {
            tracing::warn!("No row named '{}', nothing committed", name);
            tx.rollback()?;
            return Ok(UpdateOutcome::NoMatch);
        }

        tx.commit()?;
        tracing::info!("Committed color '{}' for {} row(s) named '{}'", color, affected, name);
        Ok(UpdateOutcome::Updated(affected))
    }

    // ========== Table Creator ==========

    /// Create a new creature table under a runtime-supplied name.
    ///
    /// The name is embedded in the statement text; the engine rejects names
    /// that are not valid identifiers or that already exist.
    pub fn create_table(&self, name: &TableName) -> Result<()> {
        let sql = schema::create_creature_table(name.as_str());
        tracing::debug!("Executing: {}", sql);
        self.conn.execute(&sql, [])?;
        tracing::info!("Created table {}", name);
        Ok(())
    }
}
