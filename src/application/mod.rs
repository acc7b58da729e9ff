pub mod analytics;
pub mod news_feed;
pub mod store;
pub mod system;
pub mod trade_entry;
