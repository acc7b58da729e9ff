use crate::domain::errors::JournalError;
use crate::domain::news::Headline;
use crate::domain::ports::HeadlineSource;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct FeedResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    items: Option<Vec<FeedItem>>,
}

#[derive(Debug, Deserialize)]
struct FeedItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default, rename = "pubDate")]
    pub_date: Option<String>,
}

/// Reads an RSS feed through a public RSS-to-JSON bridge.
///
/// One request per call. No retry; callers decide what a failure means.
pub struct Rss2JsonClient {
    client: Client,
    bridge_url: String,
    feed_url: String,
    limit: usize,
}

impl Rss2JsonClient {
    pub fn new(bridge_url: &str, feed_url: &str, limit: usize) -> Self {
        let client = Client::builder()
            .user_agent(concat!("tradepulse/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            bridge_url: bridge_url.to_string(),
            feed_url: feed_url.to_string(),
            limit,
        }
    }
}

#[async_trait]
impl HeadlineSource for Rss2JsonClient {
    async fn fetch_headlines(&self) -> Result<Vec<Headline>, JournalError> {
        debug!("Requesting headlines for {}", self.feed_url);
        let response = self
            .client
            .get(&self.bridge_url)
            .query(&[("rss_url", self.feed_url.as_str())])
            .send()
            .await
            .map_err(JournalError::feed)?;

        let body = response.text().await.map_err(JournalError::feed)?;
        let headlines = parse_feed_response(&body, self.limit)?;
        info!("Fetched {} headlines", headlines.len());
        Ok(headlines)
    }
}

/// Parse the bridge's JSON, keeping at most `limit` items.
///
/// A body without `items` is the bridge reporting an error.
pub fn parse_feed_response(body: &str, limit: usize) -> Result<Vec<Headline>, JournalError> {
    let response: FeedResponse = serde_json::from_str(body).map_err(JournalError::feed)?;

    let Some(items) = response.items else {
        let reason = response
            .message
            .or(response.status)
            .unwrap_or_else(|| "response has no items".to_string());
        return Err(JournalError::feed(reason));
    };

    Ok(items
        .into_iter()
        .take(limit)
        .map(|item| Headline {
            title: item.title,
            link: item.link,
            published: item.pub_date.as_deref().and_then(parse_pub_date),
        })
        .collect())
}

/// The bridge reports `YYYY-MM-DD HH:MM:SS`; raw feeds use RFC 2822 or RFC 3339
fn parse_pub_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| DateTime::parse_from_rfc2822(raw).ok().map(|d| d.naive_utc()))
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.naive_utc()))
}
