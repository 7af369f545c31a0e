//! Storage error types.

/// Errors from a schedule storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A lookup against the backing store failed.
    #[error("storage lookup failed: {message}")]
    Lookup { message: String },

    /// The backing store did not answer in time.
    #[error("storage request timed out")]
    Timeout,

    /// Reading fixture data from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture data could not be decoded.
    #[error("fixture decode error: {message}")]
    Decode { message: String },
}
