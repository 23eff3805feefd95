//! Report rendering for table snapshots
//!
//! All renderers are pure and return a `String`; printing is left to the
//! binaries. The plain layout is:
//!
//! ```text
//! id | name | color | fire_power
//! ------------------------------
//! 1 | Ignis | Green | 90
//! ------------------------------
//! ```

use crate::storage::TableSnapshot;
use crate::{Error, Result};
use serde::Deserialize;
use std::str::FromStr;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Separator between header names and between row values
pub const SEPARATOR: &str = " | ";

/// How a table snapshot is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Pipe-separated lines bounded by dashed rules
    #[default]
    Plain,
    /// Rounded grid
    Table,
    /// Pretty-printed JSON snapshot
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Plain => "plain",
            ReportFormat::Table => "table",
            ReportFormat::Json => "json",
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, ReportFormat::Json)
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(ReportFormat::Plain),
            "table" | "grid" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            _ => Err(Error::Config(format!("Unknown report format: {}", s))),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Column names as a bracketed, quoted list: `['id', 'name']`
pub fn field_name_list(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Table name and field names
pub fn render_schema(snapshot: &TableSnapshot) -> String {
    format!(
        "Table: {}\nField Names: {}\n",
        snapshot.table,
        field_name_list(&snapshot.column_names())
    )
}

/// Header, rule, one line per row, closing rule.
///
/// The rule is as long as the header in characters, regardless of row widths.
pub fn render_rows(snapshot: &TableSnapshot) -> String {
    let header = snapshot.column_names().join(SEPARATOR);
    let rule = "-".repeat(header.chars().count());

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for row in &snapshot.rows {
        out.push_str(&row.join(SEPARATOR));
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Rows as a rounded grid
pub fn render_grid(snapshot: &TableSnapshot) -> String {
    let mut builder = Builder::default();
    builder.push_record(snapshot.column_names().into_iter().map(String::from));
    for row in &snapshot.rows {
        builder.push_record(row.values().iter().map(ToString::to_string));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Whole snapshot as pretty JSON
pub fn render_json(snapshot: &TableSnapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Row data in the requested format
pub fn render(snapshot: &TableSnapshot, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Plain => Ok(render_rows(snapshot)),
        ReportFormat::Table => Ok(render_grid(snapshot)),
        ReportFormat::Json => render_json(snapshot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ColumnDescriptor, Row, Value};

    fn column(position: i64, name: &str) -> ColumnDescriptor {
        ColumnDescriptor {
            position,
            name: name.to_string(),
            declared_type: String::new(),
            not_null: false,
            default_value: None,
            primary_key: position == 0,
        }
    }

    fn sample_snapshot() -> TableSnapshot {
        TableSnapshot {
            table: "dragons".to_string(),
            columns: ["id", "name", "color", "fire_power"]
                .iter()
                .enumerate()
                .map(|(i, n)| column(i as i64, n))
                .collect(),
            rows: vec![
                Row(vec![Value::Integer(1), "Ignis".into(), "Crimson".into(), Value::Integer(90)]),
                Row(vec![Value::Integer(2), "Aether".into(), Value::Null, Value::Integer(75)]),
            ],
        }
    }

    #[test]
    fn test_render_schema() {
        let out = render_schema(&sample_snapshot());
        assert_eq!(out, "Table: dragons\nField Names: ['id', 'name', 'color', 'fire_power']\n");
    }

    #[test]
    fn test_render_rows_layout() {
        let out = render_rows(&sample_snapshot());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "id | name | color | fire_power");
        assert_eq!(lines[1], "-".repeat(30));
        assert_eq!(lines[2], "1 | Ignis | Crimson | 90");
        assert_eq!(lines[3], "2 | Aether | None | 75");
        assert_eq!(lines[4], lines[1]);
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_render_rows_empty_table() {
        let mut snapshot = sample_snapshot();
        snapshot.rows.clear();
        let out = render_rows(&snapshot);
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_render_grid_contains_values() {
        let out = render_grid(&sample_snapshot());
        assert!(out.contains("fire_power"));
        assert!(out.contains("Crimson"));
        assert!(out.contains("None"));
        assert!(out.starts_with('╭'));
    }

    #[test]
    fn test_render_json() {
        let out = render_json(&sample_snapshot()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["table"], "dragons");
        assert_eq!(parsed["columns"][3]["name"], "fire_power");
        assert_eq!(parsed["rows"][0][2], "Crimson");
        assert!(parsed["rows"][1][2].is_null());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("grid".parse::<ReportFormat>().unwrap(), ReportFormat::Table);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }
}
