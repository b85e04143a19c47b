// src/translation.rs

//! Per-language name variants for a single entity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GazetteerError, Result};

/// One language's rendering of an entity's name fields.
///
/// `source_language` records which variant this one was derived from; `None`
/// marks the root variant authored in the entity's own language.
/// `display_name` is only populated for regions and cities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationVariant {
    pub language_code: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub is_auto_translated: bool,
}

impl TranslationVariant {
    /// A root variant: authored directly, not derived from another language.
    pub fn root(language_code: &str, name: &str) -> Self {
        Self {
            language_code: language_code.to_string(),
            name: name.to_string(),
            display_name: None,
            source_language: None,
            is_auto_translated: false,
        }
    }

    /// A variant translated from `source` (human or machine).
    pub fn translated(language_code: &str, name: &str, source: &str, auto: bool) -> Self {
        Self {
            language_code: language_code.to_string(),
            name: name.to_string(),
            display_name: None,
            source_language: Some(source.to_string()),
            is_auto_translated: auto,
        }
    }

    /// Attach a stored display name (regions and cities only). When set and
    /// non-empty it wins over the composed `"{name}, {parent}, …"` form.
    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self
    }
}

/// Outcome of [`TranslationSet::upsert`].
///
/// `AuthoritativeNameChanged` means the variant for the entity's default
/// language was written: the caller owns re-deriving `name_ascii`, `slug`
/// and `search_key` from the new name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "an authoritative name change requires re-deriving name_ascii/slug/search_key"]
pub enum UpsertEffect {
    AuthoritativeNameChanged,
    VariantStored,
}

/// The keyed collection of name variants owned by one entity.
///
/// There is exactly one variant per language code. The constructor seeds the
/// root variant for the entity's default language, so the set is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSet {
    default_language: String,
    variants: BTreeMap<String, TranslationVariant>,
}

impl TranslationSet {
    /// Create a set holding the root variant for `default_language`.
    pub fn new(default_language: &str, name: &str) -> Self {
        let mut variants = BTreeMap::new();
        variants.insert(
            default_language.to_string(),
            TranslationVariant::root(default_language, name),
        );
        Self {
            default_language: default_language.to_string(),
            variants,
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// The variant for `language`, if one is stored.
    pub fn variant(&self, language: &str) -> Option<&TranslationVariant> {
        self.variants.get(language)
    }

    /// Resolve the variant to show for `language`.
    ///
    /// Falls back to `fallback_language`, then to any root variant
    /// (`source_language` unset). Fails with
    /// [`GazetteerError::NoVariant`] only if none of those exist.
    pub fn get(&self, language: &str, fallback_language: &str) -> Result<&TranslationVariant> {
        self.variants
            .get(language)
            .or_else(|| self.variants.get(fallback_language))
            .or_else(|| self.variants.values().find(|v| v.source_language.is_none()))
            .ok_or_else(|| GazetteerError::NoVariant {
                language: language.to_string(),
            })
    }

    /// Insert or replace the variant for its language code.
    ///
    /// A set `source_language` must name a language that already has a
    /// variant (normally the default language); the root variant itself is
    /// exempt. Returns [`UpsertEffect::AuthoritativeNameChanged`] when the
    /// default-language variant was written.
    pub fn upsert(&mut self, variant: TranslationVariant) -> Result<UpsertEffect> {
        if let Some(source) = &variant.source_language {
            if source != &variant.language_code && !self.variants.contains_key(source) {
                return Err(GazetteerError::UnknownSourceLanguage {
                    language: variant.language_code.clone(),
                    source_language: source.clone(),
                });
            }
        }

        let language = variant.language_code.clone();
        self.variants.insert(language.clone(), variant);

        if language == self.default_language {
            Ok(UpsertEffect::AuthoritativeNameChanged)
        } else {
            Ok(UpsertEffect::VariantStored)
        }
    }

    /// Remove the variant for `language`.
    ///
    /// Refused (returns `None` without removing) when `language` is the
    /// default language or is still named as `source_language` by another
    /// variant: every entity keeps its root variant, and provenance links
    /// must keep pointing at stored variants. Drop the dependent variants
    /// first. Returns the removed variant otherwise.
    pub fn remove(&mut self, language: &str) -> Option<TranslationVariant> {
        if language == self.default_language {
            return None;
        }
        let depended_on = self.variants.values().any(|v| {
            v.language_code != language && v.source_language.as_deref() == Some(language)
        });
        if depended_on {
            return None;
        }
        self.variants.remove(language)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranslationVariant> {
        self.variants.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_requested_then_fallback_then_root() {
        let mut set = TranslationSet::new("fr", "République Française");
        set.upsert(TranslationVariant::translated("en", "French Republic", "fr", false))
            .unwrap();

        assert_eq!(set.get("en", "fr").unwrap().name, "French Republic");
        assert_eq!(set.get("de", "en").unwrap().name, "French Republic");
        // Neither requested nor fallback present: the root variant wins
        assert_eq!(set.get("de", "es").unwrap().name, "République Française");
    }

    #[test]
    fn upsert_rejects_unknown_source_language() {
        let mut set = TranslationSet::new("en", "Georgia");
        let err = set
            .upsert(TranslationVariant::translated("ru", "Грузия", "ka", true))
            .unwrap_err();
        assert!(matches!(
            err,
            GazetteerError::UnknownSourceLanguage { .. }
        ));
        // Both codes render in the message; the source language is plain
        // data here, not an error cause.
        let msg = err.to_string();
        assert!(msg.contains("'ru'") && msg.contains("'ka'"));
    }

    #[test]
    fn default_language_upsert_signals_rederivation() {
        let mut set = TranslationSet::new("en", "Burma");
        let effect = set
            .upsert(TranslationVariant::root("en", "Myanmar"))
            .unwrap();
        assert_eq!(effect, UpsertEffect::AuthoritativeNameChanged);

        let effect = set
            .upsert(TranslationVariant::translated("de", "Myanmar", "en", true))
            .unwrap();
        assert_eq!(effect, UpsertEffect::VariantStored);
    }

    #[test]
    fn remove_is_refused_while_a_variant_names_it_as_source() {
        let mut set = TranslationSet::new("en", "Georgia");
        set.upsert(TranslationVariant::translated("fr", "Géorgie", "en", false))
            .unwrap();
        set.upsert(TranslationVariant::translated("de", "Georgien", "fr", true))
            .unwrap();

        // "fr" is the recorded source of "de": removal is refused and the
        // provenance link keeps resolving.
        assert!(set.remove("fr").is_none());
        let source = set.variant("de").unwrap().source_language.clone().unwrap();
        assert!(set.variant(&source).is_some());

        // Dropping the dependent first unblocks the removal.
        assert!(set.remove("de").is_some());
        assert!(set.remove("fr").is_some());
    }

    #[test]
    fn root_variant_cannot_be_removed() {
        let mut set = TranslationSet::new("en", "Chile");
        set.upsert(TranslationVariant::translated("es", "Chile", "en", false))
            .unwrap();

        assert!(set.remove("en").is_none());
        assert!(set.remove("es").is_some());
        assert_eq!(set.len(), 1);
    }
}
