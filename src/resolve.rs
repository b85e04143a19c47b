// src/resolve.rs

//! Display-name and timezone resolution.
//!
//! Resolution is deliberately infallible: a dangling parent reference or an
//! unrecognized timezone degrades the result, it never fails the caller.

use chrono_tz::Tz;

use crate::config::GazetteerConfig;
use crate::model::{City, Country, EntityCore, EntityKind, Region};
use crate::traits::{EntityView, PlaceStore};

/// Compose the canonical display name for any entity view.
///
/// - Country: the name alone.
/// - Region: `"{name}, {country}"`.
/// - City: `"{name}, {region}, {country}"`, dropping whichever parent cannot
///   be dereferenced.
pub fn resolve_display_name(view: &dyn EntityView) -> String {
    match view.kind() {
        EntityKind::Country => view.name().to_string(),
        EntityKind::Region => match view.country() {
            Some(country) => format!("{}, {}", view.name(), country.name()),
            None => view.name().to_string(),
        },
        EntityKind::City => match (view.region(), view.country()) {
            (Some(region), Some(country)) => {
                format!("{}, {}, {}", view.name(), region.name(), country.name())
            }
            (None, Some(country)) => format!("{}, {}", view.name(), country.name()),
            (Some(region), None) => format!("{}, {}", view.name(), region.name()),
            (None, None) => view.name().to_string(),
        },
    }
}

/// Resolve a stored timezone string against the configured default.
///
/// Empty, absent or unrecognized zone names fall back to `default_zone`,
/// which is resolvable by construction.
pub fn resolve_timezone(raw: Option<&str>, default_zone: Tz) -> Tz {
    raw.and_then(|s| s.trim().parse::<Tz>().ok())
        .unwrap_or(default_zone)
}

/// View over a resolved name with optional resolved parents.
///
/// Built internally by [`EntityResolver`] so the composition logic lives in
/// one place, [`resolve_display_name`].
struct ResolvedView<'v> {
    name: &'v str,
    kind: EntityKind,
    country: Option<Box<ResolvedView<'v>>>,
    region: Option<Box<ResolvedView<'v>>>,
}

impl<'v> ResolvedView<'v> {
    fn leaf(name: &'v str, kind: EntityKind) -> Self {
        Self {
            name,
            kind,
            country: None,
            region: None,
        }
    }
}

impl EntityView for ResolvedView<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn country(&self) -> Option<&dyn EntityView> {
        self.country.as_deref().map(|v| v as &dyn EntityView)
    }

    fn region(&self) -> Option<&dyn EntityView> {
        self.region.as_deref().map(|v| v as &dyn EntityView)
    }
}

/// Composes entity records into display names and timezones, consulting the
/// store for live parent state.
pub struct EntityResolver<'a, S: PlaceStore> {
    store: &'a S,
    config: &'a GazetteerConfig,
}

impl<'a, S: PlaceStore> EntityResolver<'a, S> {
    pub fn new(store: &'a S, config: &'a GazetteerConfig) -> Self {
        Self { store, config }
    }

    /// The name to show for `core` in `language`.
    ///
    /// Prefers the requested language's variant, then the entity's default
    /// language, then any root variant, then `name_ascii`. Never fails.
    fn resolved_name<'e>(&self, core: &'e EntityCore, language: &str) -> &'e str {
        core.translations
            .get(language, &core.default_language)
            .map(|v| v.name.as_str())
            .unwrap_or(&core.name_ascii)
    }

    pub fn country_display_name(&self, country: &Country, language: &str) -> String {
        resolve_display_name(&ResolvedView::leaf(
            self.resolved_name(&country.core, language),
            EntityKind::Country,
        ))
    }

    /// A stored, non-empty `display_name` on the resolved variant, if any.
    ///
    /// Regions and cities may carry a pre-rendered display name per
    /// language; when present it replaces the composed form entirely.
    fn display_override<'e>(&self, core: &'e EntityCore, language: &str) -> Option<&'e str> {
        core.translations
            .get(language, &core.default_language)
            .ok()
            .and_then(|v| v.display_name.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn region_display_name(&self, region: &Region, language: &str) -> String {
        if let Some(display) = self.display_override(&region.core, language) {
            return display.to_string();
        }
        let view = ResolvedView {
            name: self.resolved_name(&region.core, language),
            kind: EntityKind::Region,
            country: self.country_view(region.country, language),
            region: None,
        };
        resolve_display_name(&view)
    }

    pub fn city_display_name(&self, city: &City, language: &str) -> String {
        if let Some(display) = self.display_override(&city.core, language) {
            return display.to_string();
        }
        let view = ResolvedView {
            name: self.resolved_name(&city.core, language),
            kind: EntityKind::City,
            country: self.country_view(city.country, language),
            region: city.region.and_then(|id| self.region_view(id, language)),
        };
        resolve_display_name(&view)
    }

    /// The timezone for `city`, falling back to the configured default.
    pub fn city_timezone(&self, city: &City) -> Tz {
        resolve_timezone(city.timezone.as_deref(), self.config.default_timezone)
    }

    /// Convenience for refreshing a city's search key after a rename: the
    /// display-relevant name resolved in the entity's default language.
    pub fn city_search_source(&self, city: &City) -> String {
        self.city_display_name(city, &city.core.default_language)
    }

    fn country_view<'s>(
        &'s self,
        id: crate::model::EntityId,
        language: &str,
    ) -> Option<Box<ResolvedView<'s>>> {
        let country = self.store.country(id)?;
        Some(Box::new(ResolvedView::leaf(
            self.resolved_name(&country.core, language),
            EntityKind::Country,
        )))
    }

    fn region_view<'s>(
        &'s self,
        id: crate::model::EntityId,
        language: &str,
    ) -> Option<Box<ResolvedView<'s>>> {
        let region = self.store.region(id)?;
        Some(Box::new(ResolvedView::leaf(
            self.resolved_name(&region.core, language),
            EntityKind::Region,
        )))
    }
}
