use super::language::{FallbackChain, Language};
use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A well-formed mapping from language code to translated string.
///
/// Invariant: every stored value is non-empty after trimming. Writes trim
/// their input and an effectively-empty write clears the key, so the
/// invariant holds without a separate validation pass. Keys are unique by
/// construction; iteration order is the map's key order, which makes the
/// "first stored entry" pick in [`LocalizedText::resolve`] deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText {
    entries: BTreeMap<Language, String>,
}

impl LocalizedText {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mapping holding a single translation.
    pub fn with_language(language: Language, value: impl AsRef<str>) -> Self {
        let mut text = Self::new();
        text.set_language(language, value);
        text
    }

    /// Merges `value` in at `language`, preserving all other keys.
    ///
    /// The value is trimmed; writing a blank value removes the key instead,
    /// so an empty translation can never shadow the fallback chain.
    pub fn set_language(&mut self, language: Language, value: impl AsRef<str>) {
        if language.is_blank() {
            return;
        }
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            self.entries.remove(&language);
        } else {
            self.entries.insert(language, trimmed.to_string());
        }
    }

    /// Returns the translation stored at `language`, if any.
    pub fn get(&self, language: &Language) -> Option<&str> {
        self.entries.get(language).map(String::as_str)
    }

    /// Returns true if a non-empty translation exists for `language`.
    pub fn has_translation(&self, language: &Language) -> bool {
        self.get(language).is_some_and(|v| !v.trim().is_empty())
    }

    /// Every language code that carries a non-empty trimmed value.
    pub fn available_languages(&self) -> BTreeSet<Language> {
        self.entries
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, _)| k.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(language, value)` pairs in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&Language, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Resolves the mapping to one display string.
    ///
    /// Tries each chain entry in order and returns the first non-empty
    /// value. If the chain misses entirely but the mapping is non-empty,
    /// the first stored entry is returned. An empty mapping yields the
    /// caller-supplied `fallback`. Never fails.
    pub fn resolve(&self, chain: &FallbackChain, fallback: &str) -> String {
        for language in chain {
            if let Some(value) = self.get(language) {
                if !value.trim().is_empty() {
                    return value.to_string();
                }
            }
        }

        self.entries
            .values()
            .find(|v| !v.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Serializes the mapping into its persisted JSON form.
    pub fn to_raw(&self) -> Result<String> {
        serde_json::to_string(&self.entries).map_err(Error::Serialization)
    }
}

impl FromIterator<(Language, String)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (Language, String)>>(iter: I) -> Self {
        let mut text = Self::new();
        for (language, value) in iter {
            text.set_language(language, value);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uk_en_chain() -> FallbackChain {
        FallbackChain::new([Language::new("uk"), Language::new("en")])
    }

    #[test]
    fn test_resolve_prefers_requested_language() {
        let text = LocalizedText::from_iter([
            (Language::new("uk"), "Цикли".to_string()),
            (Language::new("en"), "Loops".to_string()),
        ]);
        assert_eq!(text.resolve(&uk_en_chain(), ""), "Цикли");
    }

    #[test]
    fn test_resolve_falls_back_along_chain() {
        let text = LocalizedText::with_language(Language::new("en"), "Loops");
        assert_eq!(text.resolve(&uk_en_chain(), ""), "Loops");
    }

    #[test]
    fn test_resolve_picks_first_stored_entry_when_chain_misses() {
        let text = LocalizedText::from_iter([
            (Language::new("fr"), "Boucles".to_string()),
            (Language::new("de"), "Schleifen".to_string()),
        ]);
        // BTreeMap key order: "de" before "fr", deterministically.
        assert_eq!(text.resolve(&uk_en_chain(), ""), "Schleifen");
    }

    #[test]
    fn test_resolve_empty_mapping_uses_fallback() {
        let text = LocalizedText::new();
        assert_eq!(text.resolve(&uk_en_chain(), "untitled"), "untitled");
        assert_eq!(text.resolve(&uk_en_chain(), ""), "");
    }

    #[test]
    fn test_set_language_trims_and_clears() {
        let mut text = LocalizedText::new();
        text.set_language(Language::new("en"), "  Loops  ");
        assert_eq!(text.get(&Language::new("en")), Some("Loops"));

        text.set_language(Language::new("en"), "   ");
        assert!(!text.has_translation(&Language::new("en")));
        assert!(text.is_empty());
    }

    #[test]
    fn test_set_language_preserves_other_keys() {
        let mut text = LocalizedText::with_language(Language::new("en"), "Loops");
        text.set_language(Language::new("uk"), "Цикли");

        assert_eq!(text.get(&Language::new("en")), Some("Loops"));
        assert_eq!(text.get(&Language::new("uk")), Some("Цикли"));
        assert_eq!(text.len(), 2);
    }

    #[test]
    fn test_available_languages() {
        let text = LocalizedText::from_iter([
            (Language::new("en"), "Loops".to_string()),
            (Language::new("uk"), "Цикли".to_string()),
        ]);
        let langs: Vec<String> = text
            .available_languages()
            .into_iter()
            .map(|l| l.as_str().to_string())
            .collect();
        assert_eq!(langs, vec!["en", "uk"]);
    }

    #[test]
    fn test_raw_round_trip() {
        let text = LocalizedText::from_iter([
            (Language::new("en"), "Loops".to_string()),
            (Language::new("uk"), "Цикли".to_string()),
        ]);
        let raw = text.to_raw().unwrap();
        let back: LocalizedText = serde_json::from_str(&raw).unwrap();
        assert_eq!(text, back);
    }
}
