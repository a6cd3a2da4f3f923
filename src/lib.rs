//! Mathema: Learning-Graph Core for Rust
//!
//! `mathema` (μάθημα, Greek for "that which is learned") models a learning
//! domain as topics connected by prerequisite relationships. It owns the two
//! pieces of logic that must stay correct under adversarial input:
//!
//! - **Prerequisite graph**: a directed structure that is kept acyclic on
//!   every mutation and answers transitive-prerequisite and ordering queries.
//! - **Localized text resolution**: multilingual content stored as a
//!   language-to-string mapping, resolved through a deterministic fallback
//!   chain and resilient to malformed legacy values.
//!
//! On top of those sit a learner status projection (completion records in,
//! derived status out) and a thin catalog service that the surrounding HTTP
//! layer calls.
//!
//! # Quick Start
//!
//! ```
//! use mathema::prelude::*;
//!
//! let mut graph = PrereqGraph::new();
//! let loops = TopicId::new();
//! let arrays = TopicId::new();
//!
//! graph.insert_topic(loops).unwrap();
//! graph.insert_topic(arrays).unwrap();
//!
//! // arrays builds on loops
//! graph.add_prerequisite(arrays, loops).unwrap();
//!
//! // the reverse edge would close a cycle and is rejected
//! assert!(graph.add_prerequisite(loops, arrays).is_err());
//!
//! let order = graph.topological_order(&[arrays, loops]).unwrap();
//! assert_eq!(order, vec![loops, arrays]);
//! ```
//!
//! # Module Organization
//!
//! Following Parnas's information hiding principles, each module hides
//! specific design decisions that are likely to change:
//!
//! - [`core`]: Domain entities and identities (hides id representation)
//! - [`text`]: Localized content (hides the persisted mapping format)
//! - [`graph`]: Prerequisite DAG (hides the graph representation)
//! - [`projection`]: Derived learner status (hides status derivation)
//! - [`storage`]: Persistence seam (hides the backing store)
//! - [`catalog`]: Service boundary consumed by the API layer
//!
//! # What this crate does not do
//!
//! Authentication, authorization, HTTP routing, and storage engines are the
//! caller's concern. The crate validates and computes over a consistent
//! snapshot handed to it; concurrent mutations on overlapping topic sets
//! must be serialized by the caller (one transaction per update request).

pub mod catalog;
pub mod core;
pub mod graph;
pub mod projection;
pub mod storage;
pub mod text;

// Re-export commonly used types for convenience
pub use crate::core::{
    AuthorId, CompletionRecord, Error as CoreError, LearnerId, LearnerTopicStatus,
    Result as CoreResult, Slug, Topic, TopicId, TopicKind,
};

pub use graph::{EdgeRejection, GraphError, GraphResult, PrereqGraph, PrerequisiteEdge, TopicNode};

pub use text::{FallbackChain, Language, LocalizedText, StoredText};

pub use projection::{available_topics, completed_topics, status, study_plan};

pub use storage::{InMemoryTopicStore, Result as StorageResult, StorageError, TopicStore};

pub use catalog::{
    Catalog, CatalogError, Result as CatalogResult, TopicDraft, TopicUpdate, TopicView,
};

// Re-export dependencies used in public API
// This ensures users don't have version mismatch errors (Effective Rust Item 24)
pub use chrono; // Completion timestamps are DateTime<Utc>
pub use serde; // Entities implement Serialize/Deserialize
pub use uuid; // Callers mint Uuid-backed ids

/// Prelude module for convenient glob imports
///
/// # Example
///
/// ```
/// use mathema::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogError, TopicDraft, TopicUpdate, TopicView};

    pub use crate::core::{
        AuthorId, CompletionRecord, LearnerId, LearnerTopicStatus, Slug, Topic, TopicId, TopicKind,
    };

    pub use crate::graph::{GraphError, GraphResult, PrereqGraph, PrerequisiteEdge};

    pub use crate::projection::{available_topics, completed_topics, status, study_plan};

    pub use crate::storage::{InMemoryTopicStore, StorageError, TopicStore};

    pub use crate::text::{FallbackChain, Language, LocalizedText, StoredText};

    // Re-export commonly used external types
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
