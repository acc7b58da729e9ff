use crate::domain::errors::JournalError;
use crate::domain::ports::{KeyValueStorage, StorageKey};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Journal documents stored as `<data_dir>/<key>.json`
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).with_context(|| {
                format!("Failed to create data directory {}", data_dir.display())
            })?;
        }
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, key: StorageKey) -> PathBuf {
        self.data_dir.join(format!("{}.json", key.as_str()))
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&self, key: StorageKey) -> Result<Option<String>, JournalError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&path).map_err(|e| JournalError::storage(key.as_str(), e))?;
        debug!("Read {} bytes from {:?}", content.len(), path);
        Ok(Some(content))
    }

    fn write(&self, key: StorageKey, contents: &str) -> Result<(), JournalError> {
        let path = self.path_for(key);

        // Atomic write: write to temp file then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents).map_err(|e| JournalError::storage(key.as_str(), e))?;
        fs::rename(&temp_path, &path).map_err(|e| JournalError::storage(key.as_str(), e))?;

        debug!("Saved {} to {:?}", key.as_str(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("tradepulse-fs-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let dir = scratch_dir();
        let storage = FileStorage::new(&dir).unwrap();
        assert!(storage.read(StorageKey::Goals).unwrap().is_none());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_write_then_read() {
        let dir = scratch_dir();
        let storage = FileStorage::new(&dir).unwrap();
        storage
            .write(StorageKey::UserProfile, r#"{"name":"Ada"}"#)
            .unwrap();

        assert_eq!(
            storage.read(StorageKey::UserProfile).unwrap().as_deref(),
            Some(r#"{"name":"Ada"}"#)
        );
        assert!(dir.join("userProfile.json").exists());
        assert!(!dir.join("userProfile.tmp").exists());
        let _ = fs::remove_dir_all(dir);
    }
}
