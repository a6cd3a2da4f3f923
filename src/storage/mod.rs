//! Persistence seam for topics, edges, and completion records.
//!
//! This module provides a trait-based interface for the storage the
//! surrounding application owns. The core never implements a database
//! backend itself; it ships:
//!
//! - [`TopicStore`]: the async contract the catalog service calls
//! - [`InMemoryTopicStore`]: fast in-memory storage for testing and
//!   development
//!
//! # Example
//!
//! ```
//! use mathema::storage::{InMemoryTopicStore, TopicStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryTopicStore::new();
//! let everything = store.load_topics().await?;
//! assert!(everything.is_empty());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

mod error;
pub mod memory;

// Re-export public types
pub use error::{Result, StorageError};
pub use memory::InMemoryTopicStore;

use crate::core::{CompletionRecord, LearnerId, Slug, Topic, TopicId};
use crate::graph::PrerequisiteEdge;

/// Trait for topic storage backends.
///
/// This trait defines the async interface for persisting and retrieving
/// topics, prerequisite edges, and completion records. Implementations
/// must be thread-safe. Reads within one mutation request are assumed to
/// see a consistent snapshot; serializing concurrent mutations on
/// overlapping topic sets is the implementation's (or its caller's) job.
///
/// Using `async_trait` allows truly async storage backends (e.g. async
/// database drivers) without forcing blocking calls in async contexts.
#[async_trait]
pub trait TopicStore: Send + Sync {
    /// Load a topic by id.
    async fn load_topic(&self, id: TopicId) -> Result<Option<Topic>>;

    /// Load a topic by its unique slug.
    async fn load_topic_by_slug(&self, slug: &Slug) -> Result<Option<Topic>>;

    /// Load every topic. Feeds graph hydration and overview reads.
    async fn load_topics(&self) -> Result<Vec<Topic>>;

    /// Insert or replace a topic.
    async fn save_topic(&self, topic: &Topic) -> Result<()>;

    /// Delete a topic and every edge referencing it, in one atomic step.
    /// Idempotent: deleting an absent topic is not an error.
    async fn delete_topic(&self, id: TopicId) -> Result<()>;

    /// Load the whole prerequisite edge set.
    async fn load_edges(&self) -> Result<Vec<PrerequisiteEdge>>;

    /// Replace one topic's outgoing prerequisite edges.
    async fn replace_prerequisites(
        &self,
        topic_id: TopicId,
        prerequisite_ids: &[TopicId],
    ) -> Result<()>;

    /// Load a learner's completion records.
    async fn load_completion_records(&self, learner_id: LearnerId)
        -> Result<Vec<CompletionRecord>>;

    /// Record a completion.
    ///
    /// # Default Implementation
    ///
    /// Completion records normally arrive through the external progress
    /// layer, so this returns `StorageError::Unsupported` by default.
    /// Stores used in tests and development override it.
    async fn record_completion(&self, record: CompletionRecord) -> Result<()> {
        let _ = record;
        Err(StorageError::Unsupported(
            "completion recording not implemented for this storage backend".to_string(),
        ))
    }
}

// Implement TopicStore for Box<dyn TopicStore> to allow type-erased storage
#[async_trait]
impl TopicStore for Box<dyn TopicStore> {
    async fn load_topic(&self, id: TopicId) -> Result<Option<Topic>> {
        (**self).load_topic(id).await
    }

    async fn load_topic_by_slug(&self, slug: &Slug) -> Result<Option<Topic>> {
        (**self).load_topic_by_slug(slug).await
    }

    async fn load_topics(&self) -> Result<Vec<Topic>> {
        (**self).load_topics().await
    }

    async fn save_topic(&self, topic: &Topic) -> Result<()> {
        (**self).save_topic(topic).await
    }

    async fn delete_topic(&self, id: TopicId) -> Result<()> {
        (**self).delete_topic(id).await
    }

    async fn load_edges(&self) -> Result<Vec<PrerequisiteEdge>> {
        (**self).load_edges().await
    }

    async fn replace_prerequisites(
        &self,
        topic_id: TopicId,
        prerequisite_ids: &[TopicId],
    ) -> Result<()> {
        (**self)
            .replace_prerequisites(topic_id, prerequisite_ids)
            .await
    }

    async fn load_completion_records(
        &self,
        learner_id: LearnerId,
    ) -> Result<Vec<CompletionRecord>> {
        (**self).load_completion_records(learner_id).await
    }

    async fn record_completion(&self, record: CompletionRecord) -> Result<()> {
        (**self).record_completion(record).await
    }
}
