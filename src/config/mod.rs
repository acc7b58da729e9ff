//! Configuration module for TradePulse.
//!
//! Structured configuration loaded from environment variables (and `.env`),
//! organized by concern: Storage and News.

mod news_config;
mod storage_config;

pub use news_config::{DEFAULT_BRIDGE_URL, DEFAULT_FEED_URL, DEFAULT_ITEM_LIMIT, NewsEnvConfig};
pub use storage_config::{DATA_DIR_VAR, StorageEnvConfig};

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage: StorageEnvConfig,
    pub news: NewsEnvConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage =
            StorageEnvConfig::from_lookup(&lookup).context("Failed to load storage config")?;
        let news = NewsEnvConfig::from_lookup(&lookup).context("Failed to load news config")?;
        Ok(Self { storage, news })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_from_lookup() {
        let config = Config::from_lookup(|key| match key {
            "TRADEPULSE_DATA_DIR" => Some("/srv/journal".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/srv/journal"));
        assert_eq!(config.news, NewsEnvConfig::default());
    }

    #[test]
    fn test_errors_carry_context() {
        let err = Config::from_lookup(|_| None).unwrap_err();
        assert!(format!("{:#}", err).contains("storage config"));
    }
}
