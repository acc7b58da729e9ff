//! Headline feed configuration parsing from environment variables.

use anyhow::{Context, Result};
use url::Url;

pub const DEFAULT_BRIDGE_URL: &str = "https://api.rss2json.com/v1/api.json";
pub const DEFAULT_FEED_URL: &str = "https://finance.yahoo.com/news/rssindex";
pub const DEFAULT_ITEM_LIMIT: usize = 15;

/// News feed environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsEnvConfig {
    pub bridge_url: String,
    pub feed_url: String,
    pub item_limit: usize,
}

impl Default for NewsEnvConfig {
    fn default() -> Self {
        Self {
            bridge_url: DEFAULT_BRIDGE_URL.to_string(),
            feed_url: DEFAULT_FEED_URL.to_string(),
            item_limit: DEFAULT_ITEM_LIMIT,
        }
    }
}

impl NewsEnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bridge_url =
            lookup("NEWS_BRIDGE_URL").unwrap_or_else(|| DEFAULT_BRIDGE_URL.to_string());
        Url::parse(&bridge_url)
            .with_context(|| format!("NEWS_BRIDGE_URL is not a valid URL: {}", bridge_url))?;

        let feed_url = lookup("NEWS_FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.to_string());
        Url::parse(&feed_url)
            .with_context(|| format!("NEWS_FEED_URL is not a valid URL: {}", feed_url))?;

        let item_limit = lookup("NEWS_ITEM_LIMIT")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_ITEM_LIMIT);

        Ok(Self {
            bridge_url,
            feed_url,
            item_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_config_defaults() {
        let config = NewsEnvConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, NewsEnvConfig::default());
        assert_eq!(config.item_limit, 15);
    }

    #[test]
    fn test_overrides() {
        let config = NewsEnvConfig::from_lookup(|key| match key {
            "NEWS_FEED_URL" => Some("https://www.forexlive.com/feed/news".to_string()),
            "NEWS_ITEM_LIMIT" => Some("5".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.feed_url, "https://www.forexlive.com/feed/news");
        assert_eq!(config.item_limit, 5);
        assert_eq!(config.bridge_url, DEFAULT_BRIDGE_URL);
    }

    #[test]
    fn test_bad_limit_falls_back() {
        let config = NewsEnvConfig::from_lookup(|key| {
            (key == "NEWS_ITEM_LIMIT").then(|| "zero".to_string())
        })
        .unwrap();
        assert_eq!(config.item_limit, DEFAULT_ITEM_LIMIT);
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let result = NewsEnvConfig::from_lookup(|key| {
            (key == "NEWS_BRIDGE_URL").then(|| "not a url".to_string())
        });
        assert!(result.is_err());
    }
}
