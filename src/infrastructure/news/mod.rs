pub mod rss2json;

pub use rss2json::Rss2JsonClient;
