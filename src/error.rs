use thiserror::Error;

/// Central error type for the flatstore crate
#[derive(Error, Debug)]
pub enum StoreError {
    // ============================================================================
    // Backend Errors
    // ============================================================================
    #[error("Failed to write payload at key '{key}': {reason}")]
    BackendWriteFailed { key: String, reason: String },

    #[error("Failed to delete payload at key '{key}': {reason}")]
    BackendDeleteFailed { key: String, reason: String },

    #[error("Storage root unavailable: {0}")]
    RootUnavailable(String),

    // ============================================================================
    // Entity Errors
    // ============================================================================
    #[error("Failed to serialize entity: {0}")]
    SerializeFailed(String),

    #[error("Failed to deserialize entity payload: {0}")]
    DeserializeFailed(String),

    // ============================================================================
    // Index Errors
    // ============================================================================
    #[error("Index '{index_key}' contains unparsable token '{token}'")]
    IndexCorrupted { index_key: String, token: String },

    // ============================================================================
    // Generic/System Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Mutex lock error")]
    LockError,
}

// Implement conversion from PoisonError for Mutex locks
impl<T> From<std::sync::PoisonError<T>> for StoreError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        StoreError::LockError
    }
}

// Helper type alias for Results
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::BackendWriteFailed {
            key: "User_id_1".to_string(),
            reason: "disk full".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write payload at key 'User_id_1': disk full"
        );
    }

    #[test]
    fn test_index_corrupted_display() {
        let err = StoreError::IndexCorrupted {
            index_key: "User_IDs".to_string(),
            token: "abc".to_string(),
        };
        assert!(err.to_string().contains("User_IDs"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Io(_)));
    }
}
