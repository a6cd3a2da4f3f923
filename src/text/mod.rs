//! Localized Content Resolution
//!
//! Human-readable topic fields are stored as a mapping from language code
//! to string. The persisted bytes are NOT trusted: a stored value can be a
//! well-formed mapping, a plain legacy string written before localization
//! existed, or unrecoverable garbage. This module turns whatever was stored
//! into a single display string, deterministically, without ever failing:
//! display-time failures are worse than imprecise display.
//!
//! # Design Principles
//!
//! Following Parnas's information hiding principles:
//! - This module hides the persisted mapping format (currently JSON) and
//!   the degradation policy for malformed values.
//! - Exposes only abstract operations: parse, resolve, set_language,
//!   available_languages, has_translation.
//!
//! # Resolution order
//!
//! A [`FallbackChain`] is tried in sequence: the requested language first,
//! then the fixed default, then any remaining supported languages. If the
//! chain misses but the mapping is non-empty, the first stored entry wins
//! (map iteration order, so the pick is deterministic). An empty mapping or
//! an absent value resolves to the caller-supplied fallback string.

mod language;
mod localized;
mod stored;

pub use language::{FallbackChain, Language};
pub use localized::LocalizedText;
pub use stored::StoredText;
