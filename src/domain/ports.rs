use crate::domain::errors::JournalError;
use crate::domain::news::Headline;
use async_trait::async_trait;

/// Logical keys of the durable journal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Trades,
    Goals,
    UserProfile,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Trades => "trades",
            StorageKey::Goals => "goals",
            StorageKey::UserProfile => "userProfile",
        }
    }
}

/// Durable document storage, one JSON document per key.
///
/// `read` returns `Ok(None)` when nothing was ever written under the key.
pub trait KeyValueStorage {
    fn read(&self, key: StorageKey) -> Result<Option<String>, JournalError>;
    fn write(&self, key: StorageKey, contents: &str) -> Result<(), JournalError>;
}

#[async_trait]
pub trait HeadlineSource: Send + Sync {
    async fn fetch_headlines(&self) -> Result<Vec<Headline>, JournalError>;
}
