//! Storage location parsing from environment variables.

use anyhow::{Result, bail};
use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "TRADEPULSE_DATA_DIR";
const DEFAULT_DIR_NAME: &str = ".tradepulse";

/// Where the journal documents live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEnvConfig {
    pub data_dir: PathBuf,
}

impl StorageEnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `TRADEPULSE_DATA_DIR`, else `$HOME/.tradepulse`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            return Ok(Self {
                data_dir: PathBuf::from(dir.trim()),
            });
        }

        let home = lookup("HOME")
            .or_else(|| lookup("USERPROFILE"))
            .filter(|h| !h.trim().is_empty());
        match home {
            Some(home) => Ok(Self {
                data_dir: PathBuf::from(home).join(DEFAULT_DIR_NAME),
            }),
            None => bail!(
                "Cannot resolve a data directory: set {} or HOME",
                DATA_DIR_VAR
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let config = StorageEnvConfig::from_lookup(|key| match key {
            "TRADEPULSE_DATA_DIR" => Some("/tmp/journal".to_string()),
            "HOME" => Some("/home/trader".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/journal"));
    }

    #[test]
    fn test_defaults_under_home() {
        let config = StorageEnvConfig::from_lookup(|key| {
            (key == "HOME").then(|| "/home/trader".to_string())
        })
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/home/trader/.tradepulse"));
    }

    #[test]
    fn test_no_home_is_an_error() {
        assert!(StorageEnvConfig::from_lookup(|_| None).is_err());
    }
}
