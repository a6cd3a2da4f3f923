//! Topic Prerequisite Graph
//!
//! This module provides the directed graph of prerequisite relationships
//! between topics. It enables:
//!
//! - Validated edge mutation that can never leave a cycle behind
//! - All-or-nothing batch edge insertion for one topic-update request
//! - Transitive-prerequisite queries for status and path planning
//! - Topological ordering for valid study order
//!
//! # Design Principles
//!
//! Following Parnas's information hiding principles:
//! - This module hides the graph representation (adjacency list vs matrix)
//!   and the cycle-check strategy (reachability search on mutation).
//! - Exposes only abstract operations: insert_topic, add_prerequisite,
//!   transitive_prerequisites, topological_order, etc.
//!
//! The acyclicity invariant is enforced inside every edge-adding operation.
//! The one exception is [`PrereqGraph::load_edge`], the bulk-ingestion path
//! used when hydrating from persistence; readers defend against a corrupt
//! bulk load with [`PrereqGraph::find_cycle`] and the cycle check built
//! into [`PrereqGraph::topological_order`].
//!
//! # Algorithm References
//!
//! Kahn's algorithm for topological sort; three-color DFS for the
//! independent cycle check; plain BFS for reachability.

mod dot;
mod edge;
mod error;
mod prereq_graph;

pub use edge::PrerequisiteEdge;
pub use error::{EdgeRejection, GraphError, GraphResult};
pub use prereq_graph::{PrereqGraph, TopicNode};
