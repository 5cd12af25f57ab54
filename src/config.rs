//! Persisted project configuration.
//!
//! `backforge init` writes a `backforge.toml` at the project root carrying
//! the database choice as an explicit structured field. The scaffold command
//! reads it back on every run; the choice is immutable for the lifetime of a
//! project.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;
use crate::DatabaseChoice;

/// Name of the configuration file written at the project root.
pub const CONFIG_FILE: &str = "backforge.toml";

/// Project-level configuration, round-tripped through TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Database engine chosen at init time.
    pub database: DatabaseChoice,
}

impl ProjectConfig {
    /// Create a configuration for the given engine.
    #[must_use]
    pub const fn new(database: DatabaseChoice) -> Self {
        Self { database }
    }

    /// Load the configuration stored under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::ConfigMissing`] when no `backforge.toml`
    /// exists (the operator must run `backforge init` first), and
    /// [`ScaffoldError::ConfigInvalid`] when the file does not parse.
    pub fn load(root: &Path) -> Result<Self, ScaffoldError> {
        let path = root.join(CONFIG_FILE);
        let raw = fs::read_to_string(&path).map_err(|_| ScaffoldError::ConfigMissing)?;
        toml::from_str(&raw).map_err(|source| ScaffoldError::ConfigInvalid {
            source: Box::new(source),
        })
    }

    /// Serialize this configuration to its on-disk TOML form.
    #[must_use]
    pub fn to_toml(&self) -> String {
        // A one-field struct cannot fail to serialize.
        toml::to_string_pretty(self).unwrap_or_else(|_| format!("database = \"{}\"\n", self.database.as_str()))
    }

    /// Write the configuration under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::WriteFile`] when the file cannot be written.
    pub fn store(&self, root: &Path) -> Result<(), ScaffoldError> {
        let path = root.join(CONFIG_FILE);
        fs::write(&path, self.to_toml()).map_err(|source| ScaffoldError::WriteFile { path, source })
    }

    /// Whether a configuration file already exists under `root`.
    #[must_use]
    pub fn exists(root: &Path) -> bool {
        root.join(CONFIG_FILE).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseKind;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let config = ProjectConfig::new(DatabaseChoice::Mongodb);
        config.store(dir.path()).unwrap();

        let loaded = ProjectConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.database.kind(), DatabaseKind::Document);
    }

    #[test]
    fn test_missing_config() {
        let dir = tempdir().unwrap();
        let result = ProjectConfig::load(dir.path());
        assert!(matches!(result, Err(ScaffoldError::ConfigMissing)));
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "database = 42").unwrap();

        let result = ProjectConfig::load(dir.path());
        assert!(matches!(result, Err(ScaffoldError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(DatabaseChoice::Mysql.kind(), DatabaseKind::Relational);
        assert_eq!(DatabaseChoice::Postgres.kind(), DatabaseKind::Relational);
        assert_eq!(DatabaseChoice::Sqlite.kind(), DatabaseKind::Relational);
        assert_eq!(DatabaseChoice::Mongodb.kind(), DatabaseKind::Document);
    }

    #[test]
    fn test_toml_field_name() {
        let config = ProjectConfig::new(DatabaseChoice::Postgres);
        assert!(config.to_toml().contains("database = \"postgres\""));
    }
}
