use crate::core::{Slug, TopicId};
use crate::graph::GraphError;
use crate::storage::StorageError;
use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors surfaced at the service boundary.
///
/// Graph rejections pass through unchanged so the API layer can show the
/// offending ids; storage failures keep their chain.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The requested topic does not exist.
    #[error("topic not found: {topic_id}")]
    TopicNotFound { topic_id: TopicId },

    /// The slug is already in use by another topic.
    #[error("slug already taken: {slug}")]
    SlugTaken { slug: Slug },

    /// An edge request failed graph validation.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The persistence collaborator failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
