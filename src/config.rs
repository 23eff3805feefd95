use crate::report::ReportFormat;
use crate::table_name::IdentifierPolicy;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE: &str = "dragon.db";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DragonConfig {
    pub database: Option<String>,
    pub strict_identifiers: Option<bool>,
    pub format: Option<ReportFormat>,
}

impl DragonConfig {
    /// CLI value wins, then the config file, then `dragon.db`
    pub fn database_path(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.database.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    /// `--strict` always tightens; the config file can only opt in
    pub fn identifier_policy(&self, strict_flag: bool) -> IdentifierPolicy {
        IdentifierPolicy::from_strict_flag(strict_flag || self.strict_identifiers.unwrap_or(false))
    }

    pub fn report_format(&self, cli: Option<ReportFormat>) -> ReportFormat {
        cli.or(self.format).unwrap_or_default()
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("dragondb.toml")
}

/// Load the config file; a missing file is `Ok(None)`, a malformed one an error
pub fn load_config(path: Option<&Path>) -> Result<Option<DragonConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: DragonConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(&dir.path().join("dragondb.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dragondb.toml");
        std::fs::write(
            &path,
            "database = \"lair.db\"\nstrict_identifiers = true\nformat = \"table\"\n",
        ).unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(
            loaded,
            DragonConfig {
                database: Some("lair.db".to_string()),
                strict_identifiers: Some(true),
                format: Some(ReportFormat::Table),
            }
        );
        assert_eq!(loaded.identifier_policy(false), IdentifierPolicy::Strict);
    }

    #[test]
    fn test_unknown_key_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dragondb.toml");
        std::fs::write(&path, "colour = \"red\"\n").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dragondb.toml");
        std::fs::write(&path, "database = 42\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_precedence() {
        let config: DragonConfig = toml::from_str(
            "database = \"lair.db\"\nformat = \"json\"\n",
        ).unwrap();

        assert_eq!(config.database_path(None), PathBuf::from("lair.db"));
        assert_eq!(config.database_path(Some(Path::new("cli.db"))), PathBuf::from("cli.db"));
        assert_eq!(DragonConfig::default().database_path(None), PathBuf::from(DEFAULT_DATABASE));

        assert_eq!(config.report_format(None), ReportFormat::Json);
        assert_eq!(config.report_format(Some(ReportFormat::Plain)), ReportFormat::Plain);
        assert_eq!(DragonConfig::default().report_format(None), ReportFormat::Plain);

        assert_eq!(config.identifier_policy(false), IdentifierPolicy::Lenient);
        assert_eq!(config.identifier_policy(true), IdentifierPolicy::Strict);
    }
}
