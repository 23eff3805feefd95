//! Database schema definitions

/// Name of the managed demo table
pub const DRAGONS_TABLE: &str = "dragons";

/// SQL to create the dragons table
pub const CREATE_DRAGONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS dragons (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    color TEXT,
    fire_power INTEGER
)
"#;

/// Seed rows inserted once, only into an empty dragons table
pub const SEED_DRAGONS: &[(&str, &str, i64)] = &[
    ("Ignis", "Green", 90),
    ("Aether", "Blue", 75),
    ("Terra", "Brown", 60),
];

pub const INSERT_DRAGON: &str = "INSERT INTO dragons (name, color, fire_power) VALUES (?1, ?2, ?3)";

pub const UPDATE_DRAGON_COLOR: &str = "UPDATE dragons SET color = ?1 WHERE name = ?2";

/// Column list used for tables created at runtime
pub const CREATURE_TABLE_COLUMNS: &str = r#"(
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    power_level INTEGER,
    is_mythical BOOLEAN
)"#;

/// Build the CREATE statement for a runtime-named table.
///
/// The name is interpolated verbatim; only values are ever bound as parameters.
pub fn create_creature_table(table_name: &str) -> String {
    format!("CREATE TABLE {} {}", table_name, CREATURE_TABLE_COLUMNS)
}

/// Quote an identifier for statements over tables that already exist
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("dragons"), "\"dragons\"");
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_create_creature_table_interpolates_name() {
        let sql = create_creature_table("wyverns");
        assert!(sql.starts_with("CREATE TABLE wyverns ("));
        assert!(sql.contains("is_mythical BOOLEAN"));
    }
}
