//! Prerequisite graph over topic identities.
//!
//! # Design
//!
//! The graph uses a bidirectional adjacency list representation:
//! - `prerequisites`: topics this topic depends on (outgoing edges)
//! - `dependents`: topics that depend on this topic (incoming edges)
//!
//! This allows O(1) access to both directions, which is needed for
//! efficient topological sort, cascade deletion, and dependent-aware
//! queries. An insertion-order side list keeps iteration deterministic.
//!
//! The graph engine depends on topic identities only, never on text
//! content or authorship, so a snapshot can be rebuilt from the bare edge
//! rows the persistence layer holds.

use super::edge::PrerequisiteEdge;
use super::error::{EdgeRejection, GraphError, GraphResult};
use crate::core::TopicId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

const NO_PREREQUISITES: &[TopicId] = &[];

/// A node in the prerequisite graph.
///
/// This represents pure graph structure (topology) without content or
/// learner state; those are tracked by the catalog and projection layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicNode {
    /// The topic this node stands for
    id: TopicId,
    /// Topics that should be studied before this one (outgoing edges)
    prerequisites: Vec<TopicId>,
    /// Topics that list this one as a prerequisite (incoming edges)
    dependents: Vec<TopicId>,
}

impl TopicNode {
    fn new(id: TopicId) -> Self {
        Self {
            id,
            prerequisites: Vec::new(),
            dependents: Vec::new(),
        }
    }

    pub fn id(&self) -> TopicId {
        self.id
    }

    /// Direct prerequisites, in the order they were accepted.
    pub fn prerequisites(&self) -> &[TopicId] {
        &self.prerequisites
    }

    /// Direct dependents, in the order their edges were accepted.
    pub fn dependents(&self) -> &[TopicId] {
        &self.dependents
    }

    pub fn prerequisite_count(&self) -> usize {
        self.prerequisites.len()
    }

    pub fn dependent_count(&self) -> usize {
        self.dependents.len()
    }
}

/// The directed acyclic graph of prerequisite relationships.
///
/// Exactly one global invariant holds: the edge set contains no directed
/// cycle. Every validated edge-adding operation enforces it, so external
/// readers can never observe a violated state through those paths.
///
/// # Example
///
/// ```
/// use mathema::{PrereqGraph, TopicId};
///
/// let mut graph = PrereqGraph::new();
/// let basics = TopicId::new();
/// let loops = TopicId::new();
///
/// graph.insert_topic(basics).unwrap();
/// graph.insert_topic(loops).unwrap();
///
/// // loops builds on basics
/// graph.add_prerequisite(loops, basics).unwrap();
///
/// assert!(graph.transitive_prerequisites(&loops).contains(&basics));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrereqGraph {
    /// Map from topic id to node
    nodes: HashMap<TopicId, TopicNode>,
    /// Insertion order for deterministic iteration
    insertion_order: Vec<TopicId>,
}

impl PrereqGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            insertion_order: Vec::new(),
        }
    }

    /// Returns the number of topics in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no topics.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if the topic is registered.
    pub fn contains(&self, id: &TopicId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Returns a reference to a topic node.
    pub fn node(&self, id: &TopicId) -> Option<&TopicNode> {
        self.nodes.get(id)
    }

    /// Direct prerequisites of a topic; empty for an unknown id.
    pub fn prerequisites(&self, id: &TopicId) -> &[TopicId] {
        self.nodes
            .get(id)
            .map(|n| n.prerequisites())
            .unwrap_or(NO_PREREQUISITES)
    }

    /// Direct dependents of a topic; empty for an unknown id.
    pub fn dependents(&self, id: &TopicId) -> &[TopicId] {
        self.nodes
            .get(id)
            .map(|n| n.dependents())
            .unwrap_or(NO_PREREQUISITES)
    }

    /// Returns an iterator over all topic ids in insertion order.
    pub fn topic_ids(&self) -> impl Iterator<Item = &TopicId> {
        self.insertion_order.iter()
    }

    /// Every edge currently in the graph, in insertion order of the
    /// dependent topic.
    pub fn edges(&self) -> Vec<PrerequisiteEdge> {
        let mut edges = Vec::new();
        for id in &self.insertion_order {
            if let Some(node) = self.nodes.get(id) {
                for prereq in node.prerequisites() {
                    edges.push(PrerequisiteEdge::new(*id, *prereq));
                }
            }
        }
        edges
    }

    /// Registers a topic with no edges.
    ///
    /// Returns an error if the id is already registered.
    pub fn insert_topic(&mut self, id: TopicId) -> GraphResult<()> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::duplicate_topic(id));
        }

        self.insertion_order.push(id);
        self.nodes.insert(id, TopicNode::new(id));
        Ok(())
    }

    /// Adds one prerequisite edge: `topic_id` depends on `prerequisite_id`.
    ///
    /// Fails with:
    /// - [`GraphError::SelfReference`] if the ids are equal
    /// - [`GraphError::UnknownTopic`] if either endpoint is unregistered
    /// - [`GraphError::DuplicateEdge`] if the ordered pair already exists
    /// - [`GraphError::CycleDetected`] if `topic_id` is reachable from
    ///   `prerequisite_id` over existing edges; accepting the edge would
    ///   close that path into a cycle
    ///
    /// On failure the graph is unchanged.
    pub fn add_prerequisite(
        &mut self,
        topic_id: TopicId,
        prerequisite_id: TopicId,
    ) -> GraphResult<()> {
        if topic_id == prerequisite_id {
            return Err(GraphError::self_reference(topic_id));
        }
        if !self.nodes.contains_key(&topic_id) {
            return Err(GraphError::unknown_topic(topic_id));
        }
        if !self.nodes.contains_key(&prerequisite_id) {
            return Err(GraphError::unknown_topic(prerequisite_id));
        }
        if self.nodes[&topic_id]
            .prerequisites
            .contains(&prerequisite_id)
        {
            return Err(GraphError::duplicate_edge(topic_id, prerequisite_id));
        }

        // Reachability search over existing edges only: if the proposed
        // prerequisite already (transitively) depends on the topic, the new
        // edge would close a cycle.
        if self.reaches(&prerequisite_id, &topic_id) {
            return Err(GraphError::cycle(topic_id, prerequisite_id));
        }

        self.link(topic_id, prerequisite_id);
        Ok(())
    }

    /// Adds a batch of prerequisite edges for one topic, all-or-nothing.
    ///
    /// Every id is validated; ids that appear more than once in the request
    /// are deduplicated first (the edge set could never hold the duplicate
    /// anyway). If any id is rejected, zero edges are committed and the
    /// returned [`GraphError::BatchRejected`] carries the full set of
    /// rejected ids with per-id reasons.
    pub fn add_prerequisites(
        &mut self,
        topic_id: TopicId,
        prerequisite_ids: &[TopicId],
    ) -> GraphResult<()> {
        if !self.nodes.contains_key(&topic_id) {
            return Err(GraphError::unknown_topic(topic_id));
        }

        let mut committed = Vec::new();
        let mut rejected = Vec::new();
        let mut seen = HashSet::new();

        for prerequisite_id in prerequisite_ids {
            if !seen.insert(*prerequisite_id) {
                continue;
            }
            match self.add_prerequisite(topic_id, *prerequisite_id) {
                Ok(()) => committed.push(*prerequisite_id),
                Err(reason) => rejected.push(EdgeRejection {
                    prerequisite_id: *prerequisite_id,
                    reason,
                }),
            }
        }

        if rejected.is_empty() {
            return Ok(());
        }

        // Roll back the edges accepted before the rejection surfaced.
        for prerequisite_id in committed {
            self.remove_prerequisite(&topic_id, &prerequisite_id);
        }
        Err(GraphError::BatchRejected { topic_id, rejected })
    }

    /// Replaces a topic's entire prerequisite set atomically.
    ///
    /// This is the operation one topic-update request maps to: the current
    /// outgoing edges are detached, the replacement set is batch-validated,
    /// and on any rejection the previous edge set is restored before the
    /// error is returned.
    pub fn set_prerequisites(
        &mut self,
        topic_id: TopicId,
        prerequisite_ids: &[TopicId],
    ) -> GraphResult<()> {
        let previous = match self.nodes.get(&topic_id) {
            Some(node) => node.prerequisites.clone(),
            None => return Err(GraphError::unknown_topic(topic_id)),
        };

        for prerequisite_id in &previous {
            self.remove_prerequisite(&topic_id, prerequisite_id);
        }

        match self.add_prerequisites(topic_id, prerequisite_ids) {
            Ok(()) => Ok(()),
            Err(err) => {
                // add_prerequisites already rolled back its own commits;
                // relink the previous set, which was valid before.
                for prerequisite_id in previous {
                    self.link(topic_id, prerequisite_id);
                }
                Err(err)
            }
        }
    }

    /// Removes one prerequisite edge. Idempotent no-op if the edge is
    /// absent; never fails.
    pub fn remove_prerequisite(&mut self, topic_id: &TopicId, prerequisite_id: &TopicId) {
        if let Some(node) = self.nodes.get_mut(topic_id) {
            node.prerequisites.retain(|p| p != prerequisite_id);
        }
        if let Some(node) = self.nodes.get_mut(prerequisite_id) {
            node.dependents.retain(|d| d != topic_id);
        }
    }

    /// Removes a topic and every edge where it is either endpoint.
    /// Idempotent.
    pub fn remove_topic(&mut self, id: &TopicId) {
        let Some(node) = self.nodes.remove(id) else {
            return;
        };

        for prerequisite_id in &node.prerequisites {
            if let Some(prereq) = self.nodes.get_mut(prerequisite_id) {
                prereq.dependents.retain(|d| d != id);
            }
        }
        for dependent_id in &node.dependents {
            if let Some(dependent) = self.nodes.get_mut(dependent_id) {
                dependent.prerequisites.retain(|p| p != id);
            }
        }
        self.insertion_order.retain(|t| t != id);
    }

    /// The set of all topics reachable from `id` over prerequisite edges,
    /// direct and indirect. Empty for a topic with no prerequisites and for
    /// an unknown id.
    ///
    /// The visited set bounds the walk, so this terminates even if a corrupt
    /// bulk load left a cycle behind.
    pub fn transitive_prerequisites(&self, id: &TopicId) -> HashSet<TopicId> {
        let mut reachable = HashSet::new();
        let mut queue: VecDeque<TopicId> = VecDeque::new();
        queue.extend(self.prerequisites(id).iter().copied());

        while let Some(current) = queue.pop_front() {
            if !reachable.insert(current) {
                continue;
            }
            queue.extend(self.prerequisites(&current).iter().copied());
        }

        reachable
    }

    /// Returns a valid study order for the given topics.
    ///
    /// Uses Kahn's algorithm over the induced subgraph: every topic appears
    /// after all of its prerequisites that are also in the set. Duplicated
    /// ids are collapsed and ids the graph does not know participate as
    /// isolated members, which keeps the operation total when it runs over
    /// an edge set ingested in bulk. Request order breaks ties, so the
    /// result is deterministic.
    ///
    /// Fails with [`GraphError::CyclicGraph`] if the induced subgraph is
    /// cyclic. Unreachable through validated mutation, but edges ingested
    /// with [`PrereqGraph::load_edge`] are not vouched for.
    pub fn topological_order(&self, ids: &[TopicId]) -> GraphResult<Vec<TopicId>> {
        let mut members = Vec::new();
        let mut member_set = HashSet::new();
        for id in ids {
            if member_set.insert(*id) {
                members.push(*id);
            }
        }

        let mut in_degree: HashMap<TopicId, usize> = HashMap::with_capacity(members.len());
        for id in &members {
            let degree = self
                .prerequisites(id)
                .iter()
                .filter(|p| member_set.contains(*p))
                .count();
            in_degree.insert(*id, degree);
        }

        // Seed with degree-0 members in request order for determinism.
        let mut queue: VecDeque<TopicId> = members
            .iter()
            .filter(|id| in_degree[*id] == 0)
            .copied()
            .collect();
        let mut result = Vec::with_capacity(members.len());

        while let Some(id) = queue.pop_front() {
            result.push(id);

            for dependent in self.dependents(&id) {
                if !member_set.contains(dependent) {
                    continue;
                }
                if let Some(degree) = in_degree.get_mut(dependent) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(*dependent);
                    }
                }
            }
        }

        if result.len() != members.len() {
            let stuck: Vec<TopicId> = members
                .into_iter()
                .filter(|m| !result.contains(m))
                .collect();
            return Err(GraphError::cyclic_graph(stuck));
        }

        Ok(result)
    }

    /// Detects whether the edge set contains a directed cycle and returns
    /// the closed walk if so.
    ///
    /// Iterative three-color DFS:
    /// - White (not visited): not in the color map
    /// - Gray (on the current path): marked while descendants are explored
    /// - Black (fully explored): marked once all descendants are done
    ///
    /// This is the independent oracle for the acyclicity invariant and the
    /// defense to run after bulk ingestion.
    pub fn find_cycle(&self) -> Option<Vec<TopicId>> {
        const GRAY: u8 = 1;
        const BLACK: u8 = 2;

        let mut color: HashMap<TopicId, u8> = HashMap::with_capacity(self.nodes.len());
        for start in &self.insertion_order {
            if color.contains_key(start) {
                continue;
            }

            let mut stack: Vec<(TopicId, usize)> = vec![(*start, 0)];
            let mut path: Vec<TopicId> = Vec::new();

            while let Some((id, child)) = stack.pop() {
                if child == 0 {
                    color.insert(id, GRAY);
                    path.push(id);
                }

                let prerequisites = self.prerequisites(&id);
                if child < prerequisites.len() {
                    let next = prerequisites[child];
                    stack.push((id, child + 1));

                    match color.get(&next) {
                        Some(&GRAY) => {
                            // Back edge: the walk from `next` down to `id`
                            // plus this edge closes a cycle.
                            let from = path.iter().position(|p| *p == next).unwrap_or(0);
                            let mut cycle = path[from..].to_vec();
                            cycle.push(next);
                            return Some(cycle);
                        }
                        Some(&BLACK) => {}
                        _ => stack.push((next, 0)),
                    }
                } else {
                    color.insert(id, BLACK);
                    path.pop();
                }
            }
        }

        None
    }

    /// Returns true if the edge set contains a directed cycle.
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// Ingests one edge row from persistence without invariant checks.
    ///
    /// Unknown endpoints, self-references, and duplicate pairs are dropped
    /// (dangling rows happen when a cascade raced a crash) and `false` is
    /// returned. Acyclicity is NOT revalidated here; hydration of a large
    /// graph must not pay a reachability search per row. Callers defend via
    /// [`PrereqGraph::find_cycle`] or the check built into
    /// [`PrereqGraph::topological_order`].
    pub fn load_edge(&mut self, topic_id: TopicId, prerequisite_id: TopicId) -> bool {
        if topic_id == prerequisite_id
            || !self.nodes.contains_key(&topic_id)
            || !self.nodes.contains_key(&prerequisite_id)
            || self.nodes[&topic_id]
                .prerequisites
                .contains(&prerequisite_id)
        {
            return false;
        }

        self.link(topic_id, prerequisite_id);
        true
    }

    /// Clears all topics and edges.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.insertion_order.clear();
    }

    /// Writes an edge into both adjacency lists.
    fn link(&mut self, topic_id: TopicId, prerequisite_id: TopicId) {
        // SAFETY: every caller has verified both endpoints exist.
        // If these unwraps panic, it's a bug in this module's logic.
        self.nodes
            .get_mut(&topic_id)
            .unwrap()
            .prerequisites
            .push(prerequisite_id);
        self.nodes
            .get_mut(&prerequisite_id)
            .unwrap()
            .dependents
            .push(topic_id);
    }

    /// BFS reachability over prerequisite edges. `from == target` is
    /// trivially reachable.
    fn reaches(&self, from: &TopicId, target: &TopicId) -> bool {
        if from == target {
            return true;
        }

        let mut visited = HashSet::new();
        let mut queue: VecDeque<TopicId> = VecDeque::new();
        queue.push_back(*from);
        visited.insert(*from);

        while let Some(current) = queue.pop_front() {
            for next in self.prerequisites(&current) {
                if next == target {
                    return true;
                }
                if visited.insert(*next) {
                    queue.push_back(*next);
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(count: usize) -> (PrereqGraph, Vec<TopicId>) {
        let mut graph = PrereqGraph::new();
        let ids: Vec<TopicId> = (0..count).map(|_| TopicId::new()).collect();
        for id in &ids {
            graph.insert_topic(*id).unwrap();
        }
        (graph, ids)
    }

    #[test]
    fn test_empty_graph() {
        let graph = PrereqGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_insert_topic_rejects_duplicates() {
        let mut graph = PrereqGraph::new();
        let id = TopicId::new();
        graph.insert_topic(id).unwrap();

        let result = graph.insert_topic(id);
        assert!(matches!(result, Err(GraphError::DuplicateTopic { .. })));
    }

    #[test]
    fn test_self_reference_rejected() {
        let (mut graph, ids) = graph_with(1);
        let result = graph.add_prerequisite(ids[0], ids[0]);
        assert!(matches!(result, Err(GraphError::SelfReference { .. })));
    }

    #[test]
    fn test_unknown_topic_rejected() {
        let (mut graph, ids) = graph_with(1);
        let stranger = TopicId::new();

        assert!(matches!(
            graph.add_prerequisite(ids[0], stranger),
            Err(GraphError::UnknownTopic { topic_id }) if topic_id == stranger
        ));
        assert!(matches!(
            graph.add_prerequisite(stranger, ids[0]),
            Err(GraphError::UnknownTopic { topic_id }) if topic_id == stranger
        ));
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let (mut graph, ids) = graph_with(2);
        graph.add_prerequisite(ids[0], ids[1]).unwrap();

        let result = graph.add_prerequisite(ids[0], ids[1]);
        assert!(matches!(result, Err(GraphError::DuplicateEdge { .. })));
    }

    #[test]
    fn test_direct_cycle_rejected() {
        let (mut graph, ids) = graph_with(2);
        graph.add_prerequisite(ids[0], ids[1]).unwrap();

        // The reverse edge closes a two-node cycle.
        let result = graph.add_prerequisite(ids[1], ids[0]);
        assert!(matches!(result, Err(GraphError::CycleDetected { .. })));
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_transitive_cycle_rejected() {
        let (mut graph, ids) = graph_with(3);
        // a depends on b, b depends on c
        graph.add_prerequisite(ids[0], ids[1]).unwrap();
        graph.add_prerequisite(ids[1], ids[2]).unwrap();

        // c depending on a closes a three-node cycle.
        let result = graph.add_prerequisite(ids[2], ids[0]);
        assert!(matches!(result, Err(GraphError::CycleDetected { .. })));
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_accepted_sequences_stay_acyclic() {
        // Every individually accepted edge leaves the graph acyclic per the
        // independent oracle.
        let (mut graph, ids) = graph_with(5);
        let attempts = [
            (1, 0),
            (2, 0),
            (3, 1),
            (3, 2),
            (0, 3), // would close a cycle
            (4, 3),
            (2, 1),
            (1, 2), // would close a cycle
        ];
        for (topic, prereq) in attempts {
            let _ = graph.add_prerequisite(ids[topic], ids[prereq]);
            assert!(!graph.has_cycle());
        }
    }

    #[test]
    fn test_transitive_prerequisites_is_transitive() {
        let (mut graph, ids) = graph_with(3);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        graph.add_prerequisite(a, b).unwrap();
        graph.add_prerequisite(b, c).unwrap();

        let transitive = graph.transitive_prerequisites(&a);
        assert!(transitive.contains(&b));
        assert!(transitive.contains(&c));
        assert_eq!(transitive.len(), 2);

        assert!(graph.transitive_prerequisites(&c).is_empty());
        assert!(graph.transitive_prerequisites(&TopicId::new()).is_empty());
    }

    #[test]
    fn test_remove_topic_cascades_edges() {
        let (mut graph, ids) = graph_with(3);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        // c -> b -> a
        graph.add_prerequisite(b, a).unwrap();
        graph.add_prerequisite(c, b).unwrap();

        graph.remove_topic(&a);

        assert!(!graph.contains(&a));
        assert!(graph.transitive_prerequisites(&b).is_empty());
        let from_c = graph.transitive_prerequisites(&c);
        assert!(from_c.contains(&b));
        assert!(!from_c.contains(&a));

        // Idempotent.
        graph.remove_topic(&a);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_remove_prerequisite_is_idempotent() {
        let (mut graph, ids) = graph_with(2);
        graph.add_prerequisite(ids[0], ids[1]).unwrap();

        graph.remove_prerequisite(&ids[0], &ids[1]);
        assert!(graph.prerequisites(&ids[0]).is_empty());
        assert!(graph.dependents(&ids[1]).is_empty());

        // Absent edge, unknown ids: still a no-op.
        graph.remove_prerequisite(&ids[0], &ids[1]);
        graph.remove_prerequisite(&TopicId::new(), &ids[1]);
    }

    #[test]
    fn test_topological_order_linear() {
        let (mut graph, ids) = graph_with(3);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        graph.add_prerequisite(b, a).unwrap();
        graph.add_prerequisite(c, b).unwrap();

        // Request order does not matter; prerequisite order does.
        let order = graph.topological_order(&[c, a, b]).unwrap();
        assert_eq!(order, vec![a, b, c]);
    }

    #[test]
    fn test_topological_order_diamond() {
        let (mut graph, ids) = graph_with(4);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
        graph.add_prerequisite(b, a).unwrap();
        graph.add_prerequisite(c, a).unwrap();
        graph.add_prerequisite(d, b).unwrap();
        graph.add_prerequisite(d, c).unwrap();

        let order = graph.topological_order(&[a, b, c, d]).unwrap();
        assert_eq!(order[0], a);
        assert_eq!(order[3], d);
        // b and c tie; request order breaks the tie deterministically.
        assert_eq!(&order[1..3], &[b, c]);
    }

    #[test]
    fn test_topological_order_respects_subset_only() {
        let (mut graph, ids) = graph_with(3);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        graph.add_prerequisite(b, a).unwrap();
        graph.add_prerequisite(c, b).unwrap();

        // Edges to members outside the requested set are ignored.
        let order = graph.topological_order(&[c, a]).unwrap();
        assert_eq!(order, vec![a, c]);

        // Unknown ids participate as isolated members; duplicates collapse.
        let stranger = TopicId::new();
        let order = graph.topological_order(&[stranger, b, b, a]).unwrap();
        assert_eq!(order.len(), 3);
        assert!(order.iter().position(|t| t == &a) < order.iter().position(|t| t == &b));
    }

    #[test]
    fn test_batch_is_all_or_nothing() {
        let (mut graph, ids) = graph_with(5);
        let (a, b, c, d, e) = (ids[0], ids[1], ids[2], ids[3], ids[4]);
        // d already depends on a, so a depending on d would cycle; a itself
        // is a self-reference; b, c, e are fine.
        graph.add_prerequisite(d, a).unwrap();

        let result = graph.add_prerequisites(a, &[b, c, d, a, e]);
        let Err(GraphError::BatchRejected { topic_id, rejected }) = result else {
            panic!("expected batch rejection");
        };
        assert_eq!(topic_id, a);

        let rejected_ids: Vec<TopicId> = rejected.iter().map(|r| r.prerequisite_id).collect();
        assert_eq!(rejected_ids, vec![d, a]);
        assert!(matches!(rejected[0].reason, GraphError::CycleDetected { .. }));
        assert!(matches!(rejected[1].reason, GraphError::SelfReference { .. }));

        // Zero edges were committed, including the valid ones.
        assert!(graph.prerequisites(&a).is_empty());
    }

    #[test]
    fn test_batch_commits_when_all_valid() {
        let (mut graph, ids) = graph_with(4);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);

        graph.add_prerequisites(a, &[b, c, d, c]).unwrap();
        assert_eq!(graph.prerequisites(&a), &[b, c, d]);
    }

    #[test]
    fn test_set_prerequisites_replaces_atomically() {
        let (mut graph, ids) = graph_with(4);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
        graph.add_prerequisites(a, &[b, c]).unwrap();

        graph.set_prerequisites(a, &[d]).unwrap();
        assert_eq!(graph.prerequisites(&a), &[d]);
        assert!(graph.dependents(&b).is_empty());
    }

    #[test]
    fn test_set_prerequisites_rolls_back_on_rejection() {
        let (mut graph, ids) = graph_with(4);
        let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
        graph.add_prerequisites(a, &[b, c]).unwrap();
        graph.add_prerequisite(d, a).unwrap();

        // Replacement includes a cycle-closing id; prior set must survive.
        let result = graph.set_prerequisites(a, &[c, d]);
        assert!(matches!(result, Err(GraphError::BatchRejected { .. })));
        assert_eq!(graph.prerequisites(&a), &[b, c]);
        assert_eq!(graph.dependents(&a), &[d]);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_bulk_ingestion_defenses() {
        let (mut graph, ids) = graph_with(3);
        let (a, b, c) = (ids[0], ids[1], ids[2]);

        // An untrusted import writes a cycle straight into the edge set.
        assert!(graph.load_edge(a, b));
        assert!(graph.load_edge(b, c));
        assert!(graph.load_edge(c, a));

        // Dropped rows: self-loop, duplicate, dangling endpoint.
        assert!(!graph.load_edge(a, a));
        assert!(!graph.load_edge(a, b));
        assert!(!graph.load_edge(a, TopicId::new()));

        let cycle = graph.find_cycle().expect("cycle must be detected");
        assert!(cycle.len() >= 4); // closed walk repeats its first member
        assert_eq!(cycle.first(), cycle.last());

        let result = graph.topological_order(&[a, b, c]);
        assert!(matches!(result, Err(GraphError::CyclicGraph { .. })));

        // Queries still terminate on the pathological input.
        let transitive = graph.transitive_prerequisites(&a);
        assert_eq!(transitive.len(), 3);
    }

    #[test]
    fn test_edges_lists_every_pair() {
        let (mut graph, ids) = graph_with(3);
        let (a, b, c) = (ids[0], ids[1], ids[2]);
        graph.add_prerequisite(b, a).unwrap();
        graph.add_prerequisite(c, b).unwrap();

        let edges = graph.edges();
        assert_eq!(edges.len(), 2);
        assert!(edges.contains(&PrerequisiteEdge::new(b, a)));
        assert!(edges.contains(&PrerequisiteEdge::new(c, b)));
    }
}
