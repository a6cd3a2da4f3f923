//! Graphviz export for operator debugging of authored graphs.

use super::prereq_graph::PrereqGraph;
use petgraph::dot::{Config, Dot};
use petgraph::graph::DiGraph;
use std::collections::HashMap;

impl PrereqGraph {
    /// Generates a DOT format representation of the prerequisite graph for
    /// Graphviz visualization.
    ///
    /// Arrows point from prerequisite to dependent, i.e. in study order.
    /// Returns a string that can be:
    /// - Saved to a .dot file
    /// - Rendered with Graphviz: `dot -Tpng graph.dot -o graph.png`
    pub fn to_dot(&self) -> String {
        let mut dot_graph = DiGraph::<String, ()>::new();
        let mut indices = HashMap::new();

        for id in self.topic_ids() {
            let index = dot_graph.add_node(id.to_string());
            indices.insert(*id, index);
        }

        for edge in self.edges() {
            let source = indices[&edge.prerequisite_id];
            let target = indices[&edge.topic_id];
            dot_graph.add_edge(source, target, ());
        }

        format!("{:?}", Dot::with_config(&dot_graph, &[Config::EdgeNoLabel]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TopicId;

    #[test]
    fn test_dot_export_mentions_every_topic() {
        let mut graph = PrereqGraph::new();
        let a = TopicId::new();
        let b = TopicId::new();
        graph.insert_topic(a).unwrap();
        graph.insert_topic(b).unwrap();
        graph.add_prerequisite(b, a).unwrap();

        let dot = graph.to_dot();
        assert!(dot.contains("digraph"));
        assert!(dot.contains(&a.to_string()));
        assert!(dot.contains(&b.to_string()));
    }
}
