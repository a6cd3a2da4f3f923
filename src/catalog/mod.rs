//! Catalog Service Boundary
//!
//! The in-process contract the surrounding API layer consumes. A topic
//! create/update request arrives with raw multilingual fields and a list
//! of prerequisite ids; this module hands the multilingual fields to the
//! text resolver for normalization and the edge list to the graph engine
//! for validation before anything is persisted. On read it produces topic
//! representations with every multilingual field resolved to a single
//! string for the requested display language, plus the derived per-learner
//! status.
//!
//! The service holds no graph state of its own: a fresh snapshot is built
//! from the store for each request, so validation is deterministic given a
//! consistent snapshot and side-effect-free on failure. Serializing
//! concurrent mutations on overlapping topic sets is the caller's job.

mod error;
mod service;
mod view;

pub use error::{CatalogError, Result};
pub use service::Catalog;
pub use view::{TopicDraft, TopicUpdate, TopicView};
