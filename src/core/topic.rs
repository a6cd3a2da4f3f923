use super::error::Error;
use super::ids::{AuthorId, TopicId};
use crate::text::StoredText;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum accepted slug length.
const MAX_SLUG_LEN: usize = 64;

/// Unique human-chosen external reference for a topic.
///
/// Slugs are the stable handle the outside world uses to address a topic,
/// so they are validated once at the boundary and immutable afterwards:
/// lowercase ASCII alphanumerics and single hyphens, no leading or trailing
/// hyphen, at most 64 bytes.
///
/// # Examples
///
/// ```
/// use mathema::Slug;
///
/// let slug = Slug::parse("for-loops").unwrap();
/// assert_eq!(slug.as_str(), "for-loops");
///
/// assert!(Slug::parse("For Loops").is_err());
/// assert!(Slug::parse("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validates and wraps a slug string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, Error> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(Error::InvalidSlug {
                slug: raw,
                reason: "must not be empty",
            });
        }
        if raw.len() > MAX_SLUG_LEN {
            return Err(Error::InvalidSlug {
                slug: raw,
                reason: "exceeds maximum length",
            });
        }
        if raw.starts_with('-') || raw.ends_with('-') {
            return Err(Error::InvalidSlug {
                slug: raw,
                reason: "must not start or end with a hyphen",
            });
        }
        if raw.contains("--") {
            return Err(Error::InvalidSlug {
                slug: raw,
                reason: "must not contain consecutive hyphens",
            });
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(Error::InvalidSlug {
                slug: raw,
                reason: "only lowercase ASCII letters, digits and hyphens are allowed",
            });
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self, Error> {
        Self::parse(raw)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> String {
        slug.0
    }
}

impl FromStr for Slug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::parse(s)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of learnable content a topic carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopicKind {
    Theory,
    Practice,
    Project,
}

impl TopicKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicKind::Theory => "THEORY",
            TopicKind::Practice => "PRACTICE",
            TopicKind::Project => "PROJECT",
        }
    }
}

impl fmt::Display for TopicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TopicKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "THEORY" => Ok(TopicKind::Theory),
            "PRACTICE" => Ok(TopicKind::Practice),
            "PROJECT" => Ok(TopicKind::Project),
            _ => Err(Error::InvalidKind(s.to_string())),
        }
    }
}

/// A unit of learnable content.
///
/// The three human-readable fields are [`StoredText`]: whatever shape the
/// persistence layer hands back (well-formed mapping, legacy plain string,
/// or garbage) is carried as-is and only interpreted at display time.
/// Prerequisite edges are NOT part of this entity; the graph engine owns
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    id: TopicId,
    slug: Slug,
    kind: TopicKind,
    name: StoredText,
    #[serde(default)]
    description: StoredText,
    keypoints: StoredText,
    author: AuthorId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Topic {
    pub fn new(
        id: TopicId,
        slug: Slug,
        kind: TopicKind,
        name: StoredText,
        description: StoredText,
        keypoints: StoredText,
        author: AuthorId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            slug,
            kind,
            name,
            description,
            keypoints,
            author,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> TopicId {
        self.id
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn kind(&self) -> TopicKind {
        self.kind
    }

    pub fn name(&self) -> &StoredText {
        &self.name
    }

    pub fn description(&self) -> &StoredText {
        &self.description
    }

    pub fn keypoints(&self) -> &StoredText {
        &self.keypoints
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_kind(&mut self, kind: TopicKind) {
        self.kind = kind;
    }

    pub fn set_name(&mut self, name: StoredText) {
        self.name = name;
    }

    pub fn set_description(&mut self, description: StoredText) {
        self.description = description;
    }

    pub fn set_keypoints(&mut self, keypoints: StoredText) {
        self.keypoints = keypoints;
    }

    /// Records that the entity was mutated.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
