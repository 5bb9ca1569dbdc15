use thiserror::Error;

/// Result type for counter store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Failures of a single view counter request.
///
/// Validation variants are always produced before the store is touched.
#[derive(Debug, Clone, Error)]
pub enum CounterError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Missing slug")]
    MissingSlug,
    #[error("Invalid slug")]
    InvalidSlug,
    #[error("Missing VIEW_COUNTERS binding")]
    MissingBinding,
    #[error("counter store failed: {0}")]
    Storage(
        #[from]
        #[source]
        StorageError,
    ),
}
