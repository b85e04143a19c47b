// src/lib.rs

//! # gazetteer-core
//!
//! Core logic for a hierarchical multilingual gazetteer
//! (Country → Region → City):
//!
//! - [`text`]: Unicode → ASCII transliteration and search-key folding
//! - [`slug`]: unique URL-safe slugs scoped to a parent entity
//! - [`translation`]: per-language name variants with fallback resolution
//! - [`resolve`]: canonical display names and timezones under partial data
//! - [`search`]: the normalized substring-match predicate
//!
//! Storage and UI layers sit outside this crate and plug in through the
//! seams in [`traits`]: parent lookups via [`PlaceStore`], slug occupancy
//! via [`SlugLookup`]. The crate itself does no I/O; the only blocking call
//! it ever makes is the occupancy probe handed to [`SlugAllocator`].
//!
//! ```rust
//! use gazetteer_core::{normalize, search_matches};
//!
//! let n = normalize("République Française");
//! assert_eq!(n.name_ascii, "Republique Francaise");
//! assert_eq!(n.search_key, "republiquefrancaise");
//! assert!(search_matches("republique", &n.search_key));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod model;
pub mod resolve;
pub mod search;
pub mod slug;
pub mod text;
pub mod traits;
pub mod translation;

// Re-exports
pub use crate::config::GazetteerConfig;
pub use crate::error::{GazetteerError, Result};
pub use crate::model::{
    coordinate, City, Continent, Country, EntityCore, EntityId, EntityKind, PublishState, Region,
};
pub use crate::resolve::{resolve_display_name, resolve_timezone, EntityResolver};
pub use crate::search::{find_matching, search_matches};
pub use crate::slug::{slugify, SlugAllocator, SlugScope};
pub use crate::text::{equals_folded, normalize, to_ascii, to_search_key, Normalized};
pub use crate::traits::{EntityView, PlaceStore, SearchKeyed, SlugLookup};
pub use crate::translation::{TranslationSet, TranslationVariant, UpsertEffect};

// The timezone type returned by resolution.
pub use chrono_tz::Tz;
