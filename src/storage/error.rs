use crate::core::{Error as CoreError, TopicId};
use thiserror::Error;

/// Storage layer error type.
///
/// This error type wraps underlying backend and serialization errors
/// while preserving the full error chain for debugging.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// The requested topic was not found in storage.
    #[error("topic not found: {topic_id}")]
    TopicNotFound { topic_id: TopicId },

    /// A core serialization or validation error occurred.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// The store does not support this operation.
    #[error("unsupported storage operation: {0}")]
    Unsupported(String),

    /// A backend-specific failure, reported by external implementations.
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
