use crate::core::{CompletionRecord, LearnerId, LearnerTopicStatus, TopicId};
use std::collections::HashSet;

/// Computes a learner's status for one topic.
///
/// LEARNED iff a completion record exists for the (learner, topic) pair;
/// NOT_LEARNED otherwise. Prerequisite state is not consulted.
pub fn status(
    learner_id: &LearnerId,
    topic_id: &TopicId,
    records: &[CompletionRecord],
) -> LearnerTopicStatus {
    if records.iter().any(|r| r.matches(learner_id, topic_id)) {
        LearnerTopicStatus::Learned
    } else {
        LearnerTopicStatus::NotLearned
    }
}

/// The set of topic ids a learner has completed.
pub fn completed_topics(learner_id: &LearnerId, records: &[CompletionRecord]) -> HashSet<TopicId> {
    records
        .iter()
        .filter(|r| r.learner_id == *learner_id)
        .map(|r| r.topic_id)
        .collect()
}
