use super::error::{CatalogError, Result};
use super::view::{TopicDraft, TopicUpdate, TopicView};
use crate::core::{CompletionRecord, LearnerId, Topic, TopicId};
use crate::graph::{PrereqGraph, PrerequisiteEdge};
use crate::projection;
use crate::storage::TopicStore;
use crate::text::{FallbackChain, Language, LocalizedText, StoredText};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// The topic catalog: authoring mutations and resolved per-learner reads.
///
/// Generic over the storage backend so tests run against
/// [`crate::storage::InMemoryTopicStore`] and production plugs in its own
/// implementation.
pub struct Catalog<S> {
    store: S,
    supported_languages: Vec<Language>,
}

impl<S: TopicStore> Catalog<S> {
    /// Creates a catalog over the given store. The fallback chain starts
    /// out with just the fixed default language; extend it with
    /// [`Catalog::with_supported_languages`].
    pub fn new(store: S) -> Self {
        Self {
            store,
            supported_languages: vec![Language::fallback()],
        }
    }

    /// Sets the languages the deployment supports, in fallback priority
    /// order after the requested language and the fixed default.
    pub fn with_supported_languages(
        mut self,
        languages: impl IntoIterator<Item = Language>,
    ) -> Self {
        self.supported_languages = languages.into_iter().collect();
        self
    }

    /// Direct access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Authors a new topic.
    ///
    /// Slug uniqueness and the full prerequisite batch are validated before
    /// anything is written; if any prerequisite id is rejected, zero edges
    /// are committed and nothing is persisted.
    pub async fn create_topic(&self, draft: TopicDraft) -> Result<Topic> {
        if self.store.load_topic_by_slug(&draft.slug).await?.is_some() {
            return Err(CatalogError::SlugTaken { slug: draft.slug });
        }

        let mut graph = self.graph_snapshot().await?;
        let id = TopicId::new();
        graph.insert_topic(id)?;
        graph.add_prerequisites(id, &draft.prerequisites)?;

        let topic = Topic::new(
            id,
            draft.slug,
            draft.kind,
            StoredText::from(draft.name),
            draft
                .description
                .map(StoredText::from)
                .unwrap_or(StoredText::Missing),
            StoredText::from(draft.keypoints),
            draft.author,
        );

        self.store.save_topic(&topic).await?;
        self.store
            .replace_prerequisites(id, graph.prerequisites(&id))
            .await?;

        info!(
            "created topic '{}' with {} prerequisite(s)",
            topic.slug(),
            graph.prerequisites(&id).len()
        );
        Ok(topic)
    }

    /// Applies a partial edit to a topic.
    ///
    /// Multilingual fields merge per-language; a prerequisite list, when
    /// present, replaces the topic's edge set atomically (on rejection the
    /// previous edges survive and nothing is persisted).
    pub async fn update_topic(&self, id: TopicId, update: TopicUpdate) -> Result<Topic> {
        let mut topic = self
            .store
            .load_topic(id)
            .await?
            .ok_or(CatalogError::TopicNotFound { topic_id: id })?;

        if update.is_empty() {
            debug!("empty update for topic '{}', nothing to do", topic.slug());
            return Ok(topic);
        }

        if let Some(kind) = update.kind {
            topic.set_kind(kind);
        }
        if let Some(name) = &update.name {
            topic.set_name(merge_translations(topic.name(), name));
        }
        if let Some(description) = &update.description {
            topic.set_description(merge_translations(topic.description(), description));
        }
        if let Some(keypoints) = &update.keypoints {
            topic.set_keypoints(merge_translations(topic.keypoints(), keypoints));
        }

        if let Some(prerequisite_ids) = &update.prerequisites {
            let mut graph = self.graph_snapshot().await?;
            graph.set_prerequisites(id, prerequisite_ids)?;
            self.store
                .replace_prerequisites(id, graph.prerequisites(&id))
                .await?;
        }

        topic.touch();
        self.store.save_topic(&topic).await?;

        debug!("updated topic '{}'", topic.slug());
        Ok(topic)
    }

    /// Deletes a topic and every edge referencing it. Idempotent.
    pub async fn delete_topic(&self, id: TopicId) -> Result<()> {
        self.store.delete_topic(id).await?;
        info!("deleted topic {}", id);
        Ok(())
    }

    /// One topic, resolved for the requested language, with the learner's
    /// derived status.
    pub async fn topic_view(
        &self,
        id: TopicId,
        learner_id: LearnerId,
        language: Language,
    ) -> Result<TopicView> {
        let topic = self
            .store
            .load_topic(id)
            .await?
            .ok_or(CatalogError::TopicNotFound { topic_id: id })?;
        let graph = self.graph_snapshot().await?;
        let records = self.store.load_completion_records(learner_id).await?;

        Ok(self.render(&topic, &graph, &records, &learner_id, language))
    }

    /// Every topic in a valid study order, resolved and statused for one
    /// learner. The ordering pass doubles as the cycle defense for edge
    /// sets ingested from persistence.
    pub async fn learner_overview(
        &self,
        learner_id: LearnerId,
        language: Language,
    ) -> Result<Vec<TopicView>> {
        let topics = self.store.load_topics().await?;
        let edges = self.store.load_edges().await?;
        let graph = hydrate(&topics, edges);

        let ids: Vec<TopicId> = topics.iter().map(Topic::id).collect();
        let order = graph.topological_order(&ids)?;
        let records = self.store.load_completion_records(learner_id).await?;

        let by_id: HashMap<TopicId, &Topic> = topics.iter().map(|t| (t.id(), t)).collect();
        let views = order
            .iter()
            .filter_map(|id| by_id.get(id))
            .map(|topic| self.render(topic, &graph, &records, &learner_id, language.clone()))
            .collect();
        Ok(views)
    }

    async fn graph_snapshot(&self) -> Result<PrereqGraph> {
        let topics = self.store.load_topics().await?;
        let edges = self.store.load_edges().await?;
        Ok(hydrate(&topics, edges))
    }

    fn render(
        &self,
        topic: &Topic,
        graph: &PrereqGraph,
        records: &[CompletionRecord],
        learner_id: &LearnerId,
        language: Language,
    ) -> TopicView {
        let chain = FallbackChain::for_request(language, self.supported_languages.iter().cloned());

        let description = topic.description().resolve_or_empty(&chain);
        TopicView {
            id: topic.id(),
            slug: topic.slug().clone(),
            kind: topic.kind(),
            name: topic.name().resolve_or_empty(&chain),
            description: (!description.is_empty()).then_some(description),
            keypoints: topic.keypoints().resolve_or_empty(&chain),
            prerequisites: graph.prerequisites(&topic.id()).to_vec(),
            status: projection::status(learner_id, &topic.id(), records),
        }
    }
}

/// Builds a graph snapshot from persisted rows. Malformed edge rows are
/// dropped by [`PrereqGraph::load_edge`]; readers that need the acyclicity
/// guarantee run the ordering pass on top.
fn hydrate(topics: &[Topic], edges: Vec<PrerequisiteEdge>) -> PrereqGraph {
    let mut graph = PrereqGraph::new();
    for topic in topics {
        // Ids coming out of the store are unique, so insertion can't fail.
        let _ = graph.insert_topic(topic.id());
    }

    let mut dropped = 0usize;
    for edge in edges {
        if !graph.load_edge(edge.topic_id, edge.prerequisite_id) {
            dropped += 1;
        }
    }
    if dropped > 0 {
        warn!("dropped {} malformed edge row(s) during hydration", dropped);
    }

    graph
}

/// Per-language merge of an incoming mapping into whatever is stored.
/// Legacy plain strings are coerced under the fixed default language by
/// [`StoredText::set_language`], so nothing is lost.
fn merge_translations(stored: &StoredText, incoming: &LocalizedText) -> StoredText {
    let mut merged = stored.clone();
    for (language, value) in incoming.entries() {
        merged = StoredText::from(merged.set_language(language.clone(), value));
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Language;

    #[test]
    fn test_merge_translations_preserves_legacy_value() {
        let stored = StoredText::Legacy("Old loops text".to_string());
        let incoming = LocalizedText::with_language(Language::new("uk"), "Цикли");

        let merged = merge_translations(&stored, &incoming);
        let map = merged.as_localized().expect("coerced to mapping");
        assert_eq!(map.get(&Language::fallback()), Some("Old loops text"));
        assert_eq!(map.get(&Language::new("uk")), Some("Цикли"));
    }

    #[test]
    fn test_merge_translations_empty_incoming_is_identity() {
        let stored = StoredText::parse(r#"{"en":"Loops"}"#);
        let merged = merge_translations(&stored, &LocalizedText::new());
        assert_eq!(merged, stored);
    }

    #[test]
    fn test_hydrate_drops_bad_rows() {
        use crate::core::{AuthorId, Slug, TopicKind};

        let a = Topic::new(
            TopicId::new(),
            Slug::parse("a").unwrap(),
            TopicKind::Theory,
            StoredText::parse(r#"{"en":"A"}"#),
            StoredText::Missing,
            StoredText::Missing,
            AuthorId::new(),
        );
        let ghost = TopicId::new();
        let edges = vec![
            PrerequisiteEdge::new(a.id(), a.id()),   // self-loop
            PrerequisiteEdge::new(a.id(), ghost),    // dangling endpoint
        ];

        let graph = hydrate(std::slice::from_ref(&a), edges);
        assert_eq!(graph.len(), 1);
        assert!(graph.prerequisites(&a.id()).is_empty());
    }
}
