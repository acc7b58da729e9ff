use thiserror::Error;

/// Errors raised by the journal store, its storage backends and the feed client
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Storage failure for '{key}': {reason}")]
    Storage { key: String, reason: String },

    #[error("Failed to serialize '{key}': {reason}")]
    Serialization { key: String, reason: String },

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("News feed request failed: {reason}")]
    Feed { reason: String },

    #[error("Export failed: {reason}")]
    Export { reason: String },
}

impl JournalError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        JournalError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn storage(key: &str, reason: impl ToString) -> Self {
        JournalError::Storage {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn feed(reason: impl ToString) -> Self {
        JournalError::Feed {
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_formatting() {
        let err = JournalError::invalid("entry price", "'abc' is not a number");
        let msg = err.to_string();
        assert!(msg.contains("entry price"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_storage_error_formatting() {
        let err = JournalError::storage("trades", "disk full");
        assert_eq!(err.to_string(), "Storage failure for 'trades': disk full");
    }
}
