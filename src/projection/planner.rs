use crate::core::TopicId;
use crate::graph::{GraphResult, PrereqGraph};
use std::collections::HashSet;

/// Topics a learner could sensibly start now: not yet learned, with every
/// direct prerequisite already learned.
///
/// Advisory only; nothing stops a learner from completing a topic out of
/// order. Returned in the graph's insertion order for determinism.
pub fn available_topics(graph: &PrereqGraph, completed: &HashSet<TopicId>) -> Vec<TopicId> {
    let mut available = Vec::new();

    for id in graph.topic_ids() {
        if completed.contains(id) {
            continue;
        }

        let ready = graph
            .prerequisites(id)
            .iter()
            .all(|p| completed.contains(p));
        if ready {
            available.push(*id);
        }
    }

    available
}

/// The recommended path to a target topic: its transitive prerequisites
/// plus the target itself, topologically ordered, minus what the learner
/// has already completed.
pub fn study_plan(
    graph: &PrereqGraph,
    target: &TopicId,
    completed: &HashSet<TopicId>,
) -> GraphResult<Vec<TopicId>> {
    let mut members: Vec<TopicId> = graph.transitive_prerequisites(target).into_iter().collect();
    // Transitive sets have no inherent order; sort for a deterministic
    // input to the (stable) topological ordering.
    members.sort();
    members.push(*target);

    let ordered = graph.topological_order(&members)?;
    Ok(ordered
        .into_iter()
        .filter(|id| !completed.contains(id))
        .collect())
}
