//! Core domain types for the mathema learning-graph engine.
//!
//! This module provides the entities the rest of the crate operates on:
//!
//! # Domain Model
//! - [`Topic`]: A unit of learnable content with multilingual fields
//! - [`TopicKind`]: THEORY, PRACTICE, or PROJECT
//! - [`Slug`]: Validated, immutable external reference for a topic
//! - [`CompletionRecord`]: Read-only evidence that a learner finished a topic
//! - [`LearnerTopicStatus`]: Derived per-learner status, never persisted here
//!
//! # Identities
//! - [`TopicId`], [`LearnerId`], [`AuthorId`]: Opaque UUID-backed ids.
//!   Learner and author identities are foreign: they are supplied by the
//!   external identity layer and carried through unchanged.
//!
//! # Error Handling
//! - [`Error`]: Core error type with proper error chains
//! - [`Result<T>`]: Type alias for Results using the core error

mod completion;
mod error;
mod ids;
mod topic;

// Re-export public types from submodules
pub use completion::{CompletionRecord, LearnerTopicStatus};
pub use error::{Error, Result};
pub use ids::{AuthorId, LearnerId, TopicId};
pub use topic::{Slug, Topic, TopicKind};
