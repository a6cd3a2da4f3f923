use super::language::{FallbackChain, Language};
use super::localized::LocalizedText;
use crate::core::Result;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// The untrusted persisted form of a multilingual field.
///
/// Persistence hands back a plain string (or nothing). Historically that
/// string was sometimes written before localization existed, and sometimes
/// corrupted outright, so it must be treated as one of three things:
///
/// - a valid serialized language-to-string mapping,
/// - raw legacy text in a single unspecified language,
/// - unrecoverable garbage.
///
/// [`StoredText::parse`] is total: garbage degrades to [`StoredText::Legacy`]
/// and is displayed verbatim rather than surfaced as an error. Corrupt
/// content that renders imprecisely beats content that does not render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StoredText {
    /// A well-formed mapping.
    Localized(LocalizedText),
    /// Pre-localization plain text; language unknown, shown verbatim.
    Legacy(String),
    /// Nothing stored.
    #[default]
    Missing,
}

impl StoredText {
    /// Interprets a raw persisted string. Never fails.
    ///
    /// Only a JSON object is accepted as a mapping; inside it, only
    /// string-valued entries that are non-empty after trimming are kept
    /// (other entries are malformed and dropped). Every other parse
    /// outcome, including valid JSON that is not an object, is treated as
    /// legacy text and kept verbatim.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return StoredText::Missing;
        }

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => {
                let mut text = LocalizedText::new();
                for (key, value) in map {
                    if let Value::String(s) = value {
                        text.set_language(Language::new(key), s);
                    }
                }
                StoredText::Localized(text)
            }
            _ => StoredText::Legacy(raw.to_string()),
        }
    }

    /// Interprets an optional raw value; `None` means nothing was stored.
    pub fn from_optional(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) => Self::parse(raw),
            None => StoredText::Missing,
        }
    }

    /// Wraps an already well-formed mapping.
    pub fn from_localized(text: LocalizedText) -> Self {
        StoredText::Localized(text)
    }

    /// Resolves to one display string. Never fails.
    ///
    /// A mapping resolves through the chain (see [`LocalizedText::resolve`]),
    /// legacy text is returned verbatim regardless of the requested
    /// language, and a missing value yields the caller-supplied `fallback`.
    pub fn resolve(&self, chain: &FallbackChain, fallback: &str) -> String {
        match self {
            StoredText::Localized(text) => text.resolve(chain, fallback),
            StoredText::Legacy(raw) => raw.clone(),
            StoredText::Missing => fallback.to_string(),
        }
    }

    /// Resolves with an empty-string fallback.
    pub fn resolve_or_empty(&self, chain: &FallbackChain) -> String {
        self.resolve(chain, "")
    }

    /// Merges `value` in at `language` and returns the updated mapping.
    ///
    /// Legacy text is first coerced into a mapping keyed by the fixed
    /// default language, then the new language is written, so no existing
    /// translation is ever silently dropped.
    pub fn set_language(self, language: Language, value: impl AsRef<str>) -> LocalizedText {
        let mut text = match self {
            StoredText::Localized(text) => text,
            StoredText::Legacy(raw) => LocalizedText::with_language(Language::fallback(), raw),
            StoredText::Missing => LocalizedText::new(),
        };
        text.set_language(language, value);
        text
    }

    /// Language codes with non-empty values. Legacy text has no known
    /// language, so it reports none.
    pub fn available_languages(&self) -> BTreeSet<Language> {
        match self {
            StoredText::Localized(text) => text.available_languages(),
            _ => BTreeSet::new(),
        }
    }

    pub fn has_translation(&self, language: &Language) -> bool {
        match self {
            StoredText::Localized(text) => text.has_translation(language),
            _ => false,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, StoredText::Missing)
    }

    pub fn as_localized(&self) -> Option<&LocalizedText> {
        match self {
            StoredText::Localized(text) => Some(text),
            _ => None,
        }
    }

    /// The raw form written back to persistence: a mapping serializes to
    /// its JSON object, legacy text round-trips verbatim, missing is none.
    pub fn to_raw(&self) -> Result<Option<String>> {
        match self {
            StoredText::Localized(text) => text.to_raw().map(Some),
            StoredText::Legacy(raw) => Ok(Some(raw.clone())),
            StoredText::Missing => Ok(None),
        }
    }
}

impl From<LocalizedText> for StoredText {
    fn from(text: LocalizedText) -> Self {
        StoredText::Localized(text)
    }
}

impl Serialize for StoredText {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            StoredText::Localized(text) => text.serialize(serializer),
            StoredText::Legacy(raw) => serializer.serialize_str(raw),
            StoredText::Missing => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for StoredText {
    /// Deserialization applies the same degradation policy as
    /// [`StoredText::parse`]: an embedded object is a mapping, an embedded
    /// string is re-parsed (it may hold a double-encoded mapping), null is
    /// missing, and anything else degrades to legacy text of its JSON form.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Null => StoredText::Missing,
            Value::String(raw) => StoredText::parse(&raw),
            Value::Object(map) => {
                // Re-route through parse for the shared object policy.
                let raw = Value::Object(map).to_string();
                StoredText::parse(&raw)
            }
            other => StoredText::Legacy(other.to_string()),
        })
    }
}
