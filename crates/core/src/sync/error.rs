use thiserror::Error;

/// Errors raised by the sync client, the content store, or module hooks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("Sync failed: {0}")]
    SyncFailed(String),
    #[error("Store read failed: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Custom props for {module} failed: {message}")]
    Hook { module: String, message: String },
}

/// Result type for sync and store operations.
pub type Result<T> = std::result::Result<T, SyncError>;
