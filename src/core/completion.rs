//! Completion records and the status derived from them.
//!
//! Completion records are consumed, never owned: they arrive from the
//! external progress-tracking layer and this crate only reads them.

use super::error::Error;
use super::ids::{LearnerId, TopicId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Evidence that a learner completed a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Who completed the topic.
    pub learner_id: LearnerId,
    /// Which topic was completed.
    pub topic_id: TopicId,
    /// When the completion was recorded.
    pub completed_at: DateTime<Utc>,
}

impl CompletionRecord {
    /// Creates a record stamped with the current time.
    pub fn new(learner_id: LearnerId, topic_id: TopicId) -> Self {
        Self {
            learner_id,
            topic_id,
            completed_at: Utc::now(),
        }
    }

    /// Returns true if this record is for the given learner/topic pair.
    pub fn matches(&self, learner_id: &LearnerId, topic_id: &TopicId) -> bool {
        self.learner_id == *learner_id && self.topic_id == *topic_id
    }
}

/// Derived per-learner status of a topic.
///
/// Computed fresh on every query from completion records; never cached or
/// persisted by this crate. Prerequisites do not gate completion; they are
/// advisory ordering metadata for path planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LearnerTopicStatus {
    /// No completion record exists for the pair.
    NotLearned,
    /// A completion record exists for the pair.
    Learned,
}

impl LearnerTopicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearnerTopicStatus::NotLearned => "NOT_LEARNED",
            LearnerTopicStatus::Learned => "LEARNED",
        }
    }

    pub fn is_learned(&self) -> bool {
        matches!(self, LearnerTopicStatus::Learned)
    }
}

impl fmt::Display for LearnerTopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LearnerTopicStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "NOT_LEARNED" => Ok(LearnerTopicStatus::NotLearned),
            "LEARNED" => Ok(LearnerTopicStatus::Learned),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_matches_pair() {
        let learner = LearnerId::new();
        let topic = TopicId::new();
        let record = CompletionRecord::new(learner, topic);

        assert!(record.matches(&learner, &topic));
        assert!(!record.matches(&learner, &TopicId::new()));
        assert!(!record.matches(&LearnerId::new(), &topic));
    }

    #[test]
    fn test_status_round_trip() {
        for status in [LearnerTopicStatus::NotLearned, LearnerTopicStatus::Learned] {
            assert_eq!(
                status.as_str().parse::<LearnerTopicStatus>().unwrap(),
                status
            );
        }
        assert!("IN_PROGRESS".parse::<LearnerTopicStatus>().is_err());
    }
}
