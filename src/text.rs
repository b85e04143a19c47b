// src/text.rs

//! Unicode normalization for names and search keys.
//!
//! All functions here are pure and total: they accept any Unicode input and
//! never fail. Characters `deunicode` cannot transliterate are dropped rather
//! than replaced with a placeholder, so the output is always clean ASCII.

use serde::{Deserialize, Serialize};

/// Transliterate arbitrary Unicode text to its nearest ASCII representation.
///
/// Case and spacing are preserved; only diacritics and non-Latin scripts are
/// folded to ASCII.
///
/// # Examples
///
/// ```rust
/// use gazetteer_core::text::to_ascii;
///
/// assert_eq!(to_ascii("République Française"), "Republique Francaise");
/// assert_eq!(to_ascii("Łódź"), "Lodz");
/// assert_eq!(to_ascii("Paris"), "Paris");
/// ```
pub fn to_ascii(text: &str) -> String {
    deunicode::deunicode_with_tofu(text, "")
}

/// Convert a string into the folded key used for substring search.
///
/// This performs:
/// 1) Transliterate Unicode → ASCII (e.g. `Île-de-France` → `Ile-de-France`)
/// 2) Drop every character that is not an ASCII letter or digit
/// 3) Normalize to lowercase
///
/// The result contains only `[a-z0-9]`, which makes the function idempotent:
/// applying it twice yields the same key as applying it once.
///
/// # Examples
///
/// ```rust
/// use gazetteer_core::text::to_search_key;
///
/// assert_eq!(to_search_key("Paris Texas"), "paristexas");
/// assert_eq!(to_search_key("Île-de-France"), "iledefrance");
/// ```
pub fn to_search_key(text: &str) -> String {
    to_ascii(text)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// The two derived forms produced from a raw name in one pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalized {
    pub name_ascii: String,
    pub search_key: String,
}

/// Derive both `name_ascii` and `search_key` from a raw name.
pub fn normalize(text: &str) -> Normalized {
    Normalized {
        name_ascii: to_ascii(text),
        search_key: to_search_key(text),
    }
}

/// Compares two strings for equality after folding to a search key.
///
/// Matches strings that differ only in diacritics, case or punctuation.
///
/// # Examples
///
/// ```rust
/// use gazetteer_core::text::equals_folded;
///
/// assert!(equals_folded("Łódź", "lodz"));
/// assert!(equals_folded("MÜNCHEN", "munchen"));
/// assert!(!equals_folded("Berlin", "Paris"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    to_search_key(a) == to_search_key(b)
}
