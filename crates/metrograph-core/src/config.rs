//! Configuration file handling.
//!
//! An optional `metrograph.toml` next to the data:
//!
//! ```toml
//! database = "paris.db"
//! format = "json"
//! ```
//!
//! Both keys are optional; CLI flags override either.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::OutputFormat;

pub const CONFIG_FILE: &str = "metrograph.toml";

/// CLI configuration loaded from `metrograph.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Database path, resolved relative to the config file's directory
    /// when not absolute.
    pub database: Option<PathBuf>,

    /// Default output format when `--format` is not given.
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration from `dir`, falling back to defaults when no
    /// config file exists there.
    pub fn load(dir: &Path) -> Result<Config> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.database.is_none());
        assert!(config.format.is_none());
    }

    #[test]
    fn parses_both_keys() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "database = \"paris.db\"\nformat = \"json\"\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.database, Some(PathBuf::from("paris.db")));
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn malformed_file_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "database = [42]").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }
}
