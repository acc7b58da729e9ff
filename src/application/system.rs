use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::application::store::JournalStore;
use crate::config::Config;
use crate::domain::ports::HeadlineSource;
use crate::infrastructure::news::Rss2JsonClient;
use crate::infrastructure::persistence::FileStorage;

/// Everything a front end needs: the journal and the headline source
pub struct Application {
    pub config: Config,
    pub store: JournalStore<FileStorage>,
    pub headlines: Arc<dyn HeadlineSource>,
}

impl Application {
    pub fn build(config: Config) -> Result<Self> {
        info!(
            "Building TradePulse (data dir: {})",
            config.storage.data_dir.display()
        );

        let storage = FileStorage::new(config.storage.data_dir.clone())
            .context("Failed to initialize journal storage")?;
        let store = JournalStore::open(storage);

        info!(
            "News via {} (feed: {}, limit {})",
            config.news.bridge_url, config.news.feed_url, config.news.item_limit
        );
        let headlines: Arc<dyn HeadlineSource> = Arc::new(Rss2JsonClient::new(
            &config.news.bridge_url,
            &config.news.feed_url,
            config.news.item_limit,
        ));

        Ok(Self {
            config,
            store,
            headlines,
        })
    }

    /// Path of the generated widget page inside the data directory
    pub fn widget_page_path(&self) -> std::path::PathBuf {
        self.store.storage().data_dir().join(WIDGET_PAGE_FILE)
    }
}

pub const WIDGET_PAGE_FILE: &str = "market-widgets.html";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NewsEnvConfig, StorageEnvConfig};

    #[test]
    fn test_build_creates_data_dir() {
        let dir = std::env::temp_dir().join(format!("tradepulse-app-{}", uuid::Uuid::new_v4()));
        let config = Config {
            storage: StorageEnvConfig {
                data_dir: dir.clone(),
            },
            news: NewsEnvConfig::default(),
        };

        let app = Application::build(config).unwrap();
        assert!(dir.is_dir());
        assert!(app.store.trades().is_empty());
        assert_eq!(app.widget_page_path(), dir.join("market-widgets.html"));

        let _ = std::fs::remove_dir_all(dir);
    }
}
