use crate::domain::errors::JournalError;
use crate::domain::news::Headline;
use crate::domain::ports::HeadlineSource;
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{error, info};

/// UI-side owner of the headline list.
///
/// Fetches run on the background runtime and report back over a channel
/// that the UI drains once per frame with [`NewsFeed::poll`].
pub struct NewsFeed {
    source: Arc<dyn HeadlineSource>,
    runtime: Handle,
    result_tx: Sender<Result<Vec<Headline>, JournalError>>,
    result_rx: Receiver<Result<Vec<Headline>, JournalError>>,
    headlines: Vec<Headline>,
    in_flight: usize,
    requested: bool,
    last_error: Option<String>,
}

impl NewsFeed {
    pub fn new(source: Arc<dyn HeadlineSource>, runtime: Handle) -> Self {
        let (result_tx, result_rx) = crossbeam_channel::unbounded();
        Self {
            source,
            runtime,
            result_tx,
            result_rx,
            headlines: Vec::new(),
            in_flight: 0,
            requested: false,
            last_error: None,
        }
    }

    pub fn headlines(&self) -> &[Headline] {
        &self.headlines
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Start the first fetch, once
    pub fn ensure_loaded(&mut self) {
        if !self.requested {
            self.request_refresh();
        }
    }

    /// Spawn a fetch. Overlapping requests are not de-duplicated.
    pub fn request_refresh(&mut self) {
        self.requested = true;
        self.in_flight += 1;

        let source = self.source.clone();
        let tx = self.result_tx.clone();
        self.runtime.spawn(async move {
            let result = source.fetch_headlines().await;
            let _ = tx.send(result);
        });
    }

    /// Apply every finished fetch in arrival order; returns whether anything changed
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.result_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            changed = true;
            match result {
                Ok(headlines) => {
                    info!("News feed refreshed: {} headlines", headlines.len());
                    self.headlines = headlines;
                    self.last_error = None;
                }
                Err(e) => {
                    error!("Error fetching news: {}", e);
                    self.last_error = Some(e.to_string());
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Replays queued responses, one per fetch
    struct ScriptedSource {
        responses: Mutex<Vec<Result<Vec<Headline>, JournalError>>>,
    }

    #[async_trait]
    impl HeadlineSource for ScriptedSource {
        async fn fetch_headlines(&self) -> Result<Vec<Headline>, JournalError> {
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(JournalError::feed("script exhausted")))
        }
    }

    fn headline(title: &str) -> Headline {
        Headline {
            title: title.to_string(),
            link: format!("https://example.com/{}", title),
            published: None,
        }
    }

    fn wait_for_results(feed: &mut NewsFeed) {
        for _ in 0..200 {
            feed.poll();
            if !feed.is_loading() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("fetch did not complete");
    }

    #[test]
    fn test_failure_keeps_previous_headlines() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        // popped from the back: success first, then failure
        let source = Arc::new(ScriptedSource {
            responses: Mutex::new(vec![
                Err(JournalError::feed("bridge down")),
                Ok(vec![headline("a"), headline("b")]),
            ]),
        });
        let mut feed = NewsFeed::new(source, runtime.handle().clone());

        feed.ensure_loaded();
        assert!(feed.is_loading());
        wait_for_results(&mut feed);
        assert_eq!(feed.headlines().len(), 2);
        assert!(feed.last_error().is_none());

        feed.request_refresh();
        wait_for_results(&mut feed);
        assert_eq!(feed.headlines().len(), 2);
        assert!(feed.last_error().unwrap().contains("bridge down"));
    }

    /// First call answers slowly, later calls at once
    struct StaggeredSource {
        calls: std::sync::atomic::AtomicUsize,
    }

    #[async_trait]
    impl HeadlineSource for StaggeredSource {
        async fn fetch_headlines(&self) -> Result<Vec<Headline>, JournalError> {
            let call = self
                .calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            if call == 0 {
                tokio::time::sleep(Duration::from_millis(150)).await;
                Ok(vec![headline("slow")])
            } else {
                Ok(vec![headline("fast"), headline("fast-2")])
            }
        }
    }

    #[test]
    fn test_overlapping_refreshes_last_arrival_wins() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let source = Arc::new(StaggeredSource {
            calls: std::sync::atomic::AtomicUsize::new(0),
        });
        let mut feed = NewsFeed::new(source, runtime.handle().clone());

        feed.request_refresh();
        feed.request_refresh();
        assert!(feed.is_loading());

        wait_for_results(&mut feed);
        assert_eq!(feed.headlines().len(), 1);
        assert_eq!(feed.headlines()[0].title, "slow");
    }

    #[test]
    fn test_ensure_loaded_fetches_once() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let source = Arc::new(ScriptedSource {
            responses: Mutex::new(vec![Ok(vec![headline("only")])]),
        });
        let mut feed = NewsFeed::new(source, runtime.handle().clone());

        feed.ensure_loaded();
        feed.ensure_loaded();
        wait_for_results(&mut feed);
        assert_eq!(feed.headlines().len(), 1);
        assert!(!feed.is_loading());
    }
}
