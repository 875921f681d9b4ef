use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Cli;

/// When in-memory changes are written back to the inventory file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SavePolicy {
    /// Only a restock rewrites the file; added records stay in memory until then.
    #[default]
    Restock,
    /// Adding a record rewrites the file as well.
    EveryChange,
}

/// Runtime configuration for an inventory session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StockroomConfig {
    /// Path to the inventory file.
    pub file: PathBuf,
    /// Symbol printed in front of stock values.
    pub currency: String,
    pub autosave: SavePolicy,
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("inventory.txt"),
            currency: "£".to_string(),
            autosave: SavePolicy::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl StockroomConfig {
    /// Load configuration from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found; using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the effective configuration: command-line flags override the
    /// config file, which overrides the defaults.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(file) = &cli.file {
            config.file = file.clone();
        }
        if let Some(currency) = &cli.currency {
            config.currency = currency.clone();
        }
        if let Some(autosave) = cli.autosave {
            config.autosave = autosave;
        }
        debug!(?config, "configuration resolved");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn default_config() {
        let c = StockroomConfig::default();
        assert_eq!(c.file, PathBuf::from("inventory.txt"));
        assert_eq!(c.currency, "£");
        assert_eq!(c.autosave, SavePolicy::Restock);
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let c = StockroomConfig::load(&dir.path().join("none.toml")).unwrap();
        assert_eq!(c, StockroomConfig::default());
    }

    #[test]
    fn load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockroom.toml");
        fs::write(&path, "currency = \"$\"\nautosave = \"every-change\"\n").unwrap();

        let c = StockroomConfig::load(&path).unwrap();
        assert_eq!(c.currency, "$");
        assert_eq!(c.autosave, SavePolicy::EveryChange);
        assert_eq!(c.file, PathBuf::from("inventory.txt"));
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockroom.toml");
        fs::write(&path, "colour = \"blue\"\n").unwrap();

        let err = StockroomConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockroom.toml");
        fs::write(&path, "file = \"shop.txt\"\ncurrency = \"$\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "stockroom",
            "--config",
            path.to_str().unwrap(),
            "--currency",
            "€",
        ])
        .unwrap();
        let c = StockroomConfig::resolve(&cli).unwrap();
        assert_eq!(c.file, PathBuf::from("shop.txt"));
        assert_eq!(c.currency, "€");
        assert_eq!(c.autosave, SavePolicy::Restock);
    }
}
