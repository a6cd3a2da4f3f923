use super::{error::Result, TopicStore};
use crate::core::{CompletionRecord, LearnerId, Slug, Topic, TopicId};
use crate::graph::PrerequisiteEdge;
use async_trait::async_trait;

/// In-memory topic store using DashMap for concurrent access.
///
/// This implementation uses DashMap, a lock-free concurrent HashMap, to
/// provide thread-safe in-memory storage. It is suitable for tests and
/// development; it makes no durability promises and the per-method
/// atomicity is only as good as a single-process map can give. Production
/// deployments implement [`TopicStore`] over their own database.
///
/// Reference: https://github.com/xacrimon/dashmap
pub struct InMemoryTopicStore {
    /// Topics keyed by id
    topics: dashmap::DashMap<TopicId, Topic>,
    /// Slug uniqueness index
    slugs: dashmap::DashMap<Slug, TopicId>,
    /// Outgoing prerequisite ids keyed by dependent topic
    edges: dashmap::DashMap<TopicId, Vec<TopicId>>,
    /// Completion records keyed by learner
    completions: dashmap::DashMap<LearnerId, Vec<CompletionRecord>>,
}

impl InMemoryTopicStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            topics: dashmap::DashMap::new(),
            slugs: dashmap::DashMap::new(),
            edges: dashmap::DashMap::new(),
            completions: dashmap::DashMap::new(),
        }
    }

    /// Number of stored topics.
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Drops everything. Handy between test cases sharing a store.
    pub fn reset(&self) {
        self.topics.clear();
        self.slugs.clear();
        self.edges.clear();
        self.completions.clear();
    }
}

impl Default for InMemoryTopicStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TopicStore for InMemoryTopicStore {
    async fn load_topic(&self, id: TopicId) -> Result<Option<Topic>> {
        Ok(self.topics.get(&id).map(|entry| entry.value().clone()))
    }

    async fn load_topic_by_slug(&self, slug: &Slug) -> Result<Option<Topic>> {
        let Some(id) = self.slugs.get(slug).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        self.load_topic(id).await
    }

    async fn load_topics(&self) -> Result<Vec<Topic>> {
        let mut topics: Vec<Topic> = self
            .topics
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        // DashMap iteration order is arbitrary; sort for stable reads.
        topics.sort_by_key(|t| (t.created_at(), t.id()));
        Ok(topics)
    }

    async fn save_topic(&self, topic: &Topic) -> Result<()> {
        self.slugs.insert(topic.slug().clone(), topic.id());
        self.topics.insert(topic.id(), topic.clone());
        Ok(())
    }

    async fn delete_topic(&self, id: TopicId) -> Result<()> {
        if let Some((_, topic)) = self.topics.remove(&id) {
            self.slugs.remove(topic.slug());
        }

        // Cascade: edges where the topic is either endpoint.
        self.edges.remove(&id);
        for mut entry in self.edges.iter_mut() {
            entry.value_mut().retain(|p| *p != id);
        }
        Ok(())
    }

    async fn load_edges(&self) -> Result<Vec<PrerequisiteEdge>> {
        let mut edges = Vec::new();
        for entry in self.edges.iter() {
            for prerequisite_id in entry.value() {
                edges.push(PrerequisiteEdge::new(*entry.key(), *prerequisite_id));
            }
        }
        Ok(edges)
    }

    async fn replace_prerequisites(
        &self,
        topic_id: TopicId,
        prerequisite_ids: &[TopicId],
    ) -> Result<()> {
        if prerequisite_ids.is_empty() {
            self.edges.remove(&topic_id);
        } else {
            self.edges.insert(topic_id, prerequisite_ids.to_vec());
        }
        Ok(())
    }

    async fn load_completion_records(
        &self,
        learner_id: LearnerId,
    ) -> Result<Vec<CompletionRecord>> {
        Ok(self
            .completions
            .get(&learner_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn record_completion(&self, record: CompletionRecord) -> Result<()> {
        let mut records = self.completions.entry(record.learner_id).or_default();
        // One record per pair is enough; completions are idempotent facts.
        if !records
            .iter()
            .any(|r| r.matches(&record.learner_id, &record.topic_id))
        {
            records.push(record);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AuthorId, TopicKind};
    use crate::text::StoredText;

    fn sample_topic(slug: &str) -> Topic {
        Topic::new(
            TopicId::new(),
            Slug::parse(slug).unwrap(),
            TopicKind::Theory,
            StoredText::parse(r#"{"en":"Sample"}"#),
            StoredText::Missing,
            StoredText::parse(r#"{"en":"points"}"#),
            AuthorId::new(),
        )
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let store = InMemoryTopicStore::new();
        let topic = sample_topic("loops");

        store.save_topic(&topic).await.unwrap();

        let by_id = store.load_topic(topic.id()).await.unwrap().unwrap();
        assert_eq!(by_id.slug().as_str(), "loops");

        let by_slug = store
            .load_topic_by_slug(&Slug::parse("loops").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_slug.id(), topic.id());
    }

    #[tokio::test]
    async fn test_delete_cascades_edges_both_directions() {
        let store = InMemoryTopicStore::new();
        let a = sample_topic("a");
        let b = sample_topic("b");
        let c = sample_topic("c");
        for t in [&a, &b, &c] {
            store.save_topic(t).await.unwrap();
        }
        // b depends on a; c depends on b.
        store
            .replace_prerequisites(b.id(), &[a.id()])
            .await
            .unwrap();
        store
            .replace_prerequisites(c.id(), &[b.id()])
            .await
            .unwrap();

        store.delete_topic(b.id()).await.unwrap();

        assert!(store.load_topic(b.id()).await.unwrap().is_none());
        let edges = store.load_edges().await.unwrap();
        assert!(edges.is_empty(), "both edge directions must be gone");

        // Idempotent.
        store.delete_topic(b.id()).await.unwrap();
    }

    #[tokio::test]
    async fn test_completion_records_deduplicate() {
        let store = InMemoryTopicStore::new();
        let learner = LearnerId::new();
        let topic = TopicId::new();

        store
            .record_completion(CompletionRecord::new(learner, topic))
            .await
            .unwrap();
        store
            .record_completion(CompletionRecord::new(learner, topic))
            .await
            .unwrap();

        let records = store.load_completion_records(learner).await.unwrap();
        assert_eq!(records.len(), 1);

        let nobody = store
            .load_completion_records(LearnerId::new())
            .await
            .unwrap();
        assert!(nobody.is_empty());
    }
}
