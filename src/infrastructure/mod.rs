pub mod export;
pub mod news;
pub mod persistence;
pub mod screenshot;

pub use news::Rss2JsonClient;
pub use persistence::{FileStorage, InMemoryStorage};
