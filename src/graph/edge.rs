use crate::core::TopicId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed prerequisite relationship: `topic_id` depends on
/// `prerequisite_id`.
///
/// Identity is the ordered pair; the edge set holds at most one edge per
/// pair. Edges are owned jointly by their endpoints and disappear when
/// either endpoint topic is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrerequisiteEdge {
    /// The dependent topic.
    pub topic_id: TopicId,
    /// The topic that should be studied first.
    pub prerequisite_id: TopicId,
}

impl PrerequisiteEdge {
    pub fn new(topic_id: TopicId, prerequisite_id: TopicId) -> Self {
        Self {
            topic_id,
            prerequisite_id,
        }
    }

    /// A self-referential pair can never be stored.
    pub fn is_self_referential(&self) -> bool {
        self.topic_id == self.prerequisite_id
    }
}

impl fmt::Display for PrerequisiteEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.topic_id, self.prerequisite_id)
    }
}
