//! In-memory storage backend.
//!
//! Clones share the same map, so a test can drop a store and reopen a new
//! one over the same documents.

use crate::domain::errors::JournalError;
use crate::domain::ports::{KeyValueStorage, StorageKey};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    documents: Arc<RwLock<HashMap<StorageKey, String>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a document, e.g. a legacy or corrupt payload
    pub fn with_document(self, key: StorageKey, contents: &str) -> Self {
        if let Ok(mut docs) = self.documents.write() {
            docs.insert(key, contents.to_string());
        }
        self
    }

    pub fn document(&self, key: StorageKey) -> Option<String> {
        self.documents.read().ok()?.get(&key).cloned()
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn read(&self, key: StorageKey) -> Result<Option<String>, JournalError> {
        let docs = self
            .documents
            .read()
            .map_err(|e| JournalError::storage(key.as_str(), e))?;
        Ok(docs.get(&key).cloned())
    }

    fn write(&self, key: StorageKey, contents: &str) -> Result<(), JournalError> {
        let mut docs = self
            .documents
            .write()
            .map_err(|e| JournalError::storage(key.as_str(), e))?;
        docs.insert(key, contents.to_string());
        Ok(())
    }
}
