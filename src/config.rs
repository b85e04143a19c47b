// src/config.rs

use chrono_tz::Tz;

/// Explicit configuration passed into resolvers and allocators.
///
/// Replaces ambient global settings: the language list, the process default
/// language, the fallback timezone and the search-key indexing toggle all
/// live here and travel by reference. The default timezone is a parsed
/// [`Tz`], so it is guaranteed resolvable by construction.
#[derive(Clone, Debug)]
pub struct GazetteerConfig {
    /// Language codes the gazetteer accepts variants for.
    pub languages: Vec<String>,
    /// Language used when an entity does not specify its own default.
    pub default_language: String,
    /// Zone returned when a city's stored timezone cannot be resolved.
    pub default_timezone: Tz,
    /// Whether storage layers should index stored search keys. Consumed by
    /// callers, not by the core.
    pub index_search_keys: bool,
}

impl Default for GazetteerConfig {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
            default_language: "en".to_string(),
            default_timezone: Tz::UTC,
            index_search_keys: false,
        }
    }
}

impl GazetteerConfig {
    /// True if `code` is one of the configured languages.
    pub fn is_known_language(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l == code)
    }
}
