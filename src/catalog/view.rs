//! Payloads crossing the service boundary.

use crate::core::{AuthorId, LearnerTopicStatus, Slug, TopicId, TopicKind};
use crate::text::LocalizedText;
use serde::{Deserialize, Serialize};

/// Everything needed to author a new topic.
///
/// Multilingual fields arrive as already-keyed mappings; the service takes
/// care of normalization and persistence shape. Prerequisite ids are
/// validated all-or-nothing against the live graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDraft {
    pub slug: Slug,
    pub kind: TopicKind,
    pub name: LocalizedText,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    pub keypoints: LocalizedText,
    #[serde(default)]
    pub prerequisites: Vec<TopicId>,
    pub author: AuthorId,
}

/// A partial edit to an existing topic.
///
/// `None` fields are left untouched. Multilingual fields are merged
/// per-language into whatever is stored (legacy plain strings get coerced
/// into mappings first), so no existing translation is ever silently
/// dropped. `prerequisites`, when present, replaces the topic's entire
/// edge set atomically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicUpdate {
    #[serde(default)]
    pub kind: Option<TopicKind>,
    #[serde(default)]
    pub name: Option<LocalizedText>,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    #[serde(default)]
    pub keypoints: Option<LocalizedText>,
    #[serde(default)]
    pub prerequisites: Option<Vec<TopicId>>,
}

impl TopicUpdate {
    /// True when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.keypoints.is_none()
            && self.prerequisites.is_none()
    }
}

/// A topic as the read path hands it out: multilingual fields resolved to
/// single strings for the requested language, plus the derived status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicView {
    pub id: TopicId,
    pub slug: Slug,
    pub kind: TopicKind,
    pub name: String,
    pub description: Option<String>,
    pub keypoints: String,
    pub prerequisites: Vec<TopicId>,
    pub status: LearnerTopicStatus,
}
