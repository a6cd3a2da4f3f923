use thiserror::Error;

/// Core error type for the mathema learning-graph engine.
///
/// This error type uses `thiserror` with proper `#[source]` annotations
/// to preserve error chains for debugging and error handling.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A slug failed validation.
    #[error("invalid slug {slug:?}: {reason}")]
    InvalidSlug { slug: String, reason: &'static str },

    /// An invalid topic kind string was encountered during parsing.
    #[error("invalid topic kind: {0}")]
    InvalidKind(String),

    /// An invalid learner status string was encountered during parsing.
    #[error("invalid learner topic status: {0}")]
    InvalidStatus(String),

    /// Serialization of an entity or localized mapping failed.
    #[error("serialization failed")]
    Serialization(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
