//! Error types for graph operations
//!
//! This module hides error representation details and provides
//! a unified error type for all graph operations.

use crate::core::TopicId;
use thiserror::Error;

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur during graph operations.
///
/// All variants are local, recoverable conditions carrying the offending
/// id(s), so the caller can show a precise user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// A topic was offered as its own prerequisite.
    #[error("topic '{topic_id}' cannot be its own prerequisite")]
    SelfReference {
        /// The topic with the self-referential edge request
        topic_id: TopicId,
    },

    /// An edge request referenced a topic the graph does not know.
    #[error("unknown topic: {topic_id}")]
    UnknownTopic {
        /// The id that was not found
        topic_id: TopicId,
    },

    /// A topic was registered twice.
    #[error("duplicate topic id: {topic_id}")]
    DuplicateTopic {
        /// The duplicate topic id
        topic_id: TopicId,
    },

    /// The ordered pair already exists in the edge set.
    #[error("'{prerequisite_id}' is already a prerequisite of '{topic_id}'")]
    DuplicateEdge {
        topic_id: TopicId,
        prerequisite_id: TopicId,
    },

    /// Accepting the edge would close a directed cycle.
    #[error(
        "adding '{prerequisite_id}' as a prerequisite of '{topic_id}' would create a dependency cycle"
    )]
    CycleDetected {
        topic_id: TopicId,
        prerequisite_id: TopicId,
    },

    /// The edge set itself contains a cycle. Only reachable through bulk
    /// ingestion that bypassed validated insertion.
    #[error("dependency cycle among topics: {}", join_ids(.members))]
    CyclicGraph {
        /// Topics on the detected cycle, in walk order
        members: Vec<TopicId>,
    },

    /// A batch edge insertion was rejected as a whole; zero edges were
    /// committed. Carries every rejected id with its individual reason.
    #[error(
        "{} of the requested prerequisites for topic '{topic_id}' were rejected",
        .rejected.len()
    )]
    BatchRejected {
        topic_id: TopicId,
        rejected: Vec<EdgeRejection>,
    },
}

/// One rejected id from a batch edge insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRejection {
    /// The prerequisite id that was rejected
    pub prerequisite_id: TopicId,
    /// Why it was rejected
    pub reason: GraphError,
}

impl GraphError {
    /// Creates a self-reference error
    pub fn self_reference(topic_id: TopicId) -> Self {
        Self::SelfReference { topic_id }
    }

    /// Creates an unknown-topic error
    pub fn unknown_topic(topic_id: TopicId) -> Self {
        Self::UnknownTopic { topic_id }
    }

    /// Creates a duplicate-topic error
    pub fn duplicate_topic(topic_id: TopicId) -> Self {
        Self::DuplicateTopic { topic_id }
    }

    /// Creates a duplicate-edge error
    pub fn duplicate_edge(topic_id: TopicId, prerequisite_id: TopicId) -> Self {
        Self::DuplicateEdge {
            topic_id,
            prerequisite_id,
        }
    }

    /// Creates a would-create-cycle error for one proposed edge
    pub fn cycle(topic_id: TopicId, prerequisite_id: TopicId) -> Self {
        Self::CycleDetected {
            topic_id,
            prerequisite_id,
        }
    }

    /// Creates a cyclic-graph error from the detected cycle walk
    pub fn cyclic_graph(members: Vec<TopicId>) -> Self {
        Self::CyclicGraph { members }
    }

    /// The rejected prerequisite ids if this is a batch rejection.
    pub fn rejected_ids(&self) -> Option<Vec<TopicId>> {
        match self {
            Self::BatchRejected { rejected, .. } => {
                Some(rejected.iter().map(|r| r.prerequisite_id).collect())
            }
            _ => None,
        }
    }
}

fn join_ids(ids: &[TopicId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
