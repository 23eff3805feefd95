//! The two program flows, written against any output sink.
//!
//! [`run_demo`] is the setup, read, edit, read-again sequence; only its
//! edit step may fail without ending the run. [`run_create_table`] reads a
//! name, validates it and creates the table, releasing the connection on
//! every path.

use crate::prompt::prompt_line;
use crate::report::{self, ReportFormat};
use crate::storage::schema::DRAGONS_TABLE;
use crate::ui::{self, Icons};
use crate::{Error, IdentifierPolicy, RecordStore, Result, SetupOutcome, TableName, TableSnapshot, UpdateOutcome};
use std::io::{BufRead, Write};
use std::path::Path;

pub const TABLE_NAME_PROMPT: &str = "Enter the desired name for your new table: ";

/// Setup, read, edit, read again over one connection.
///
/// Any error returned here is fatal for the run; a failed edit is reported
/// on `out` and the sequence carries on.
pub fn run_demo<W: Write>(
    out: &mut W,
    database: &Path,
    target: &str,
    color: &str,
    format: ReportFormat,
) -> Result<()> {
    let mut store = RecordStore::open(database)?;

    setup(out, &mut store)?;
    read_fields_and_data(out, &store, format)?;
    edit_field(out, &mut store, target, color)?;

    ui::section(out, "4. DATA AFTER EDITING")?;
    read_fields_and_data(out, &store, format)?;

    store.close()
}

/// The line printed when [`run_demo`] fails
pub fn report_fatal<W: Write>(out: &mut W, database: &Path, err: &Error) -> Result<()> {
    ui::fatal(
        out,
        &format!(
            "FATAL ERROR: Could not connect to database '{}'. {}",
            database.display(),
            err
        ),
    )?;
    Ok(())
}

pub fn setup<W: Write>(out: &mut W, store: &mut RecordStore) -> Result<SetupOutcome> {
    let outcome = store.ensure_dragons()?;
    if let SetupOutcome::Seeded(_) = outcome {
        ui::info(out, &format!("Created table '{}' and inserted sample data.", DRAGONS_TABLE))?;
    }
    Ok(outcome)
}

pub fn read_fields_and_data<W: Write>(
    out: &mut W,
    store: &RecordStore,
    format: ReportFormat,
) -> Result<TableSnapshot> {
    let snapshot = store.read_table(DRAGONS_TABLE)?;

    if format.is_json() {
        ui::line(out, &report::render_json(&snapshot)?)?;
        return Ok(snapshot);
    }

    ui::section(out, "1. READING FIELD NAMES (SCHEMA)")?;
    ui::line(out, &report::render_schema(&snapshot))?;

    ui::section(out, "2. READING ALL DATA")?;
    ui::line(out, &report::render(&snapshot, format)?)?;
    Ok(snapshot)
}

/// Change one dragon's color and report how it went.
///
/// `Ok(None)` means the update failed, was rolled back and reported; only
/// a failure to write the report is an `Err`.
pub fn edit_field<W: Write>(
    out: &mut W,
    store: &mut RecordStore,
    target: &str,
    color: &str,
) -> Result<Option<UpdateOutcome>> {
    ui::section(out, &format!("3. EDITING FIELD: Changing color for '{}'", target))?;

    match store.update_color(target, color) {
        Ok(outcome @ UpdateOutcome::Updated(count)) => {
            ui::success(
                out,
                &format!("SUCCESS: Updated {} row(s). '{}' color is now '{}'.", count, target, color),
            )?;
            Ok(Some(outcome))
        }
        Ok(UpdateOutcome::NoMatch) => {
            ui::warn(
                out,
                &format!("WARNING: No row found with name '{}'. No changes committed.", target),
            )?;
            Ok(Some(UpdateOutcome::NoMatch))
        }
        Err(e) => {
            ui::error(out, &format!("ERROR: Database update failed: {}", e))?;
            Ok(None)
        }
    }
}

/// How a table-creation attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(TableName),
    /// Blank input; no database was opened
    EmptyName,
    /// Refused by the strict identifier policy; no database was opened
    InvalidName(String),
    /// The engine refused the statement
    Rejected(String),
}

/// Take `name` (or prompt for one on `input`), validate it and create the table.
///
/// Handled failures are reported on `out` and returned as an outcome.
pub fn run_create_table<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    database: &Path,
    name: Option<String>,
    policy: IdentifierPolicy,
) -> Result<CreateOutcome> {
    let raw = match name {
        Some(name) => name,
        None => prompt_line(input, out, TABLE_NAME_PROMPT)?,
    };

    let name = match TableName::parse(&raw, policy) {
        Ok(name) => name,
        Err(Error::EmptyTableName) => {
            ui::line(out, "Table name can't be empty. Aborting.")?;
            return Ok(CreateOutcome::EmptyName);
        }
        Err(Error::InvalidTableName(name)) => {
            ui::error(out, &format!("{} {}", Icons::CROSS, Error::InvalidTableName(name.clone())))?;
            return Ok(CreateOutcome::InvalidName(name));
        }
        Err(e) => return Err(e),
    };

    ui::blank(out)?;
    let store = match RecordStore::open(database) {
        Ok(store) => store,
        Err(e) => return report_rejection(out, &name, e),
    };

    if let Err(e) = store.create_table(&name) {
        if let Err(close) = store.close() {
            tracing::warn!("Closing {} after failed create: {}", database.display(), close);
        }
        return report_rejection(out, &name, e);
    }

    ui::success(
        out,
        &format!(
            "{} Success! Table '{}' has been created in '{}'.",
            Icons::CHECK,
            name,
            database.display()
        ),
    )?;

    // The table is already committed; a close failure does not undo it.
    if let Err(e) = store.close() {
        ui::warn(out, &format!("Warning: the database connection did not close cleanly: {}", e))?;
    }
    Ok(CreateOutcome::Created(name))
}

fn report_rejection<W: Write>(out: &mut W, name: &TableName, err: Error) -> Result<CreateOutcome> {
    if !err.is_storage() {
        return Err(err);
    }
    tracing::debug!("Create of {} failed: {:?}", name, err);
    ui::error(out, &format!("{} An error occurred: {}", Icons::CROSS, err))?;
    ui::hint(out, "Tip: Ensure the table name doesn't contain spaces or special characters.")?;
    Ok(CreateOutcome::Rejected(err.to_string()))
}
