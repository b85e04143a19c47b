// src/model.rs

//! Entity records: Country, Region, City and their shared base fields.
//!
//! These are plain owned data nodes; parent links are [`EntityId`]s resolved
//! through a [`crate::traits::PlaceStore`], never embedded references.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::slug::SlugScope;
use crate::text::{to_ascii, to_search_key};
use crate::translation::TranslationSet;

/// Opaque stable identifier, immutable once assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Which kind of entity a view or record represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Country,
    Region,
    City,
}

/// Visibility state, decided by callers and only carried here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishState {
    #[default]
    Draft,
    Published,
    Archived,
}

/// The seven continents, stored as their two-letter codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    #[serde(rename = "AF")]
    Africa,
    #[serde(rename = "AN")]
    Antarctica,
    #[serde(rename = "AS")]
    Asia,
    #[serde(rename = "EU")]
    Europe,
    #[serde(rename = "NA")]
    NorthAmerica,
    #[serde(rename = "OC")]
    Oceania,
    #[serde(rename = "SA")]
    SouthAmerica,
}

impl Continent {
    pub fn code(self) -> &'static str {
        match self {
            Continent::Africa => "AF",
            Continent::Antarctica => "AN",
            Continent::Asia => "AS",
            Continent::Europe => "EU",
            Continent::NorthAmerica => "NA",
            Continent::Oceania => "OC",
            Continent::SouthAmerica => "SA",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AF" => Some(Continent::Africa),
            "AN" => Some(Continent::Antarctica),
            "AS" => Some(Continent::Asia),
            "EU" => Some(Continent::Europe),
            "NA" => Some(Continent::NorthAmerica),
            "OC" => Some(Continent::Oceania),
            "SA" => Some(Continent::SouthAmerica),
            _ => None,
        }
    }
}

/// Number of fractional digits kept on latitude/longitude.
pub const COORD_PRECISION: u32 = 5;

/// Build a fixed-precision coordinate from a float, rounded to
/// [`COORD_PRECISION`] fractional digits. Non-finite inputs yield `None`.
pub fn coordinate(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value).map(|d| d.round_dp(COORD_PRECISION))
}

/// Fields shared by every entity kind, held by composition.
///
/// `name_ascii` is derived from the default-language variant's name and must
/// be refreshed via [`EntityCore::apply_authoritative_name`] whenever that
/// variant changes. Slug re-allocation stays with the caller, which owns the
/// uniqueness scope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityCore {
    pub id: EntityId,
    /// Externally-sourced identifier; globally unique per kind when present.
    pub external_id: Option<i64>,
    pub name_ascii: String,
    pub slug: String,
    /// Free-text blob of alternate spellings, opaque to the core.
    #[serde(default)]
    pub alternate_names: String,
    #[serde(default)]
    pub publish_state: PublishState,
    pub default_language: String,
    /// Whether translation passes may add or overwrite variants; consulted
    /// by callers, not enforced here.
    #[serde(default = "default_allow_translate")]
    pub allow_translate: bool,
    pub translations: TranslationSet,
}

fn default_allow_translate() -> bool {
    true
}

impl EntityCore {
    /// Create the base record together with its root translation variant.
    pub fn new(id: EntityId, name: &str, default_language: &str, slug: String) -> Self {
        Self {
            id,
            external_id: None,
            name_ascii: to_ascii(name),
            slug,
            alternate_names: String::new(),
            publish_state: PublishState::default(),
            default_language: default_language.to_string(),
            allow_translate: true,
            translations: TranslationSet::new(default_language, name),
        }
    }

    /// The name for the entity's own default language, falling back to
    /// `name_ascii` if the set has somehow lost its root variant.
    pub fn canonical_name(&self) -> &str {
        self.translations
            .get(&self.default_language, &self.default_language)
            .map(|v| v.name.as_str())
            .unwrap_or(&self.name_ascii)
    }

    /// Re-derive `name_ascii` after the authoritative name changed.
    ///
    /// The caller re-allocates the slug (scope occupancy lives in storage)
    /// and, for cities, refreshes the search key.
    pub fn apply_authoritative_name(&mut self, name: &str) {
        self.name_ascii = to_ascii(name);
    }
}

/// A country. Slug scope: global.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub core: EntityCore,
    /// ISO 3166-1 alpha-2, unique when present.
    pub code2: Option<String>,
    /// ISO 3166-1 alpha-3, unique when present.
    pub code3: Option<String>,
    pub continent: Continent,
    pub tld: Option<String>,
    pub phone: Option<String>,
}

impl Country {
    pub fn slug_scope(&self) -> SlugScope {
        SlugScope::Global
    }
}

/// A region or state within a country. Slug scope: its country.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub core: EntityCore,
    pub geoname_code: Option<String>,
    pub country: EntityId,
}

impl Region {
    pub fn slug_scope(&self) -> SlugScope {
        SlugScope::Country(self.country)
    }
}

/// A city. Slug scope: its region, or its country when it has none.
///
/// A city's `region` may belong to a different country than the city's own
/// `country`; the core tolerates that inconsistency rather than enforcing a
/// cross-check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub core: EntityCore,
    /// Folded form of the display-relevant name, kept in sync on rename.
    pub search_key: String,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub region: Option<EntityId>,
    pub country: EntityId,
    pub population: Option<i64>,
    pub feature_code: Option<String>,
    /// IANA zone name; resolved with a fallback, never trusted blindly.
    pub timezone: Option<String>,
}

impl City {
    pub fn slug_scope(&self) -> SlugScope {
        match self.region {
            Some(region) => SlugScope::Region(region),
            None => SlugScope::Country(self.country),
        }
    }

    /// Recompute the stored search key from the display-relevant name.
    pub fn refresh_search_key(&mut self, display_relevant_name: &str) {
        self.search_key = to_search_key(display_relevant_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_rounds_to_five_digits() {
        let lat = coordinate(48.856_613_9).unwrap();
        assert_eq!(lat.to_string(), "48.85661");
        assert!(coordinate(f64::NAN).is_none());
    }

    #[test]
    fn continent_codes_round_trip() {
        for c in [
            Continent::Africa,
            Continent::Antarctica,
            Continent::Asia,
            Continent::Europe,
            Continent::NorthAmerica,
            Continent::Oceania,
            Continent::SouthAmerica,
        ] {
            assert_eq!(Continent::from_code(c.code()), Some(c));
        }
        assert_eq!(Continent::from_code("XX"), None);
    }

    #[test]
    fn city_slug_scope_follows_region_presence() {
        let mut city = City {
            core: EntityCore::new(EntityId(7), "Paris", "en", "paris".into()),
            search_key: String::new(),
            latitude: None,
            longitude: None,
            region: Some(EntityId(3)),
            country: EntityId(1),
            population: None,
            feature_code: None,
            timezone: None,
        };
        assert_eq!(city.slug_scope(), SlugScope::Region(EntityId(3)));

        city.region = None;
        assert_eq!(city.slug_scope(), SlugScope::Country(EntityId(1)));
    }
}
