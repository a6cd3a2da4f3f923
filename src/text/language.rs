//! Language codes and the fallback chain built from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized language code, e.g. `"en"` or `"uk"`.
///
/// Codes are trimmed and ASCII-lowercased on construction so that lookups
/// never miss on casing. The type makes no attempt to validate against a
/// registry of real-world codes; the domain treats codes as opaque keys.
///
/// # Examples
///
/// ```
/// use mathema::Language;
///
/// assert_eq!(Language::new(" EN "), Language::new("en"));
/// assert_eq!(Language::fallback().as_str(), "en");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Language(String);

/// The fixed default language every fallback chain ends up trying.
const FALLBACK_CODE: &str = "en";

impl Language {
    /// Creates a normalized language code.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_lowercase())
    }

    /// The fixed default language used when a requested one is missing and
    /// when coercing legacy plain-string content into a mapping.
    pub fn fallback() -> Self {
        Self(FALLBACK_CODE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A blank code can never match a stored translation.
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered list of language codes tried in sequence during resolution.
///
/// The chain is deduplicated and always contains the fixed default
/// language, so resolution degrades the same way no matter which language
/// a request asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain {
    codes: Vec<Language>,
}

impl FallbackChain {
    /// Builds the chain for one display request: the requested language,
    /// then the fixed default, then the remaining supported languages in
    /// the order given.
    pub fn for_request(
        requested: Language,
        supported: impl IntoIterator<Item = Language>,
    ) -> Self {
        let mut chain = Self { codes: Vec::new() };
        chain.push(requested);
        chain.push(Language::fallback());
        for code in supported {
            chain.push(code);
        }
        chain
    }

    /// Builds a chain from an explicit code list, deduplicated, with the
    /// fixed default appended if absent.
    pub fn new(codes: impl IntoIterator<Item = Language>) -> Self {
        let mut chain = Self { codes: Vec::new() };
        for code in codes {
            chain.push(code);
        }
        chain.push(Language::fallback());
        chain
    }

    fn push(&mut self, code: Language) {
        if !code.is_blank() && !self.codes.contains(&code) {
            self.codes.push(code);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<'a> IntoIterator for &'a FallbackChain {
    type Item = &'a Language;
    type IntoIter = std::slice::Iter<'a, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_normalizes() {
        assert_eq!(Language::new("UK").as_str(), "uk");
        assert_eq!(Language::new("  de "), Language::new("de"));
        assert!(Language::new("   ").is_blank());
    }

    #[test]
    fn test_chain_for_request_orders_and_dedups() {
        let chain = FallbackChain::for_request(
            Language::new("uk"),
            [Language::new("en"), Language::new("uk"), Language::new("de")],
        );
        let codes: Vec<&str> = chain.iter().map(|l| l.as_str()).collect();
        assert_eq!(codes, vec!["uk", "en", "de"]);
    }

    #[test]
    fn test_chain_requesting_default_stays_deduped() {
        let chain = FallbackChain::for_request(Language::new("en"), []);
        let codes: Vec<&str> = chain.iter().map(|l| l.as_str()).collect();
        assert_eq!(codes, vec!["en"]);
    }

    #[test]
    fn test_explicit_chain_appends_default() {
        let chain = FallbackChain::new([Language::new("uk"), Language::new("de")]);
        let codes: Vec<&str> = chain.iter().map(|l| l.as_str()).collect();
        assert_eq!(codes, vec!["uk", "de", "en"]);
    }

    #[test]
    fn test_blank_codes_are_dropped() {
        let chain = FallbackChain::new([Language::new(""), Language::new("uk")]);
        let codes: Vec<&str> = chain.iter().map(|l| l.as_str()).collect();
        assert_eq!(codes, vec!["uk", "en"]);
    }
}
