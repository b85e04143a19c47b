// src/traits.rs

use crate::error::Result;
use crate::model::{City, Country, EntityId, EntityKind, Region};
use crate::slug::SlugScope;
use crate::text::to_search_key;

/// Reference-based view of an entity for display resolution.
///
/// Resolution observes live parent state: `country()` and `region()` hand
/// back borrowed views, and a dangling reference surfaces as `None` rather
/// than an error. [`crate::resolve::resolve_display_name`] degrades
/// gracefully on `None`, so implementors never need to panic or lie about a
/// missing parent.
pub trait EntityView {
    /// The resolved name to show for this entity.
    fn name(&self) -> &str;
    fn kind(&self) -> EntityKind;
    /// The owning country, if it can be dereferenced.
    fn country(&self) -> Option<&dyn EntityView>;
    /// The owning region, if set and dereferenceable.
    fn region(&self) -> Option<&dyn EntityView>;
}

/// Read collaborator for parent lookups.
///
/// Backed by whatever store the caller uses; the core only ever asks for
/// parents by id and treats a miss as a tolerated inconsistency.
pub trait PlaceStore {
    fn country(&self, id: EntityId) -> Option<&Country>;
    fn region(&self, id: EntityId) -> Option<&Region>;
}

/// Slug occupancy probe for [`crate::slug::SlugAllocator`].
///
/// May be backed by a networked or disk-based store and may block; failures
/// are surfaced as [`crate::GazetteerError::Storage`] and propagated
/// unretried.
pub trait SlugLookup {
    fn is_taken(&self, scope: &SlugScope, candidate: &str) -> Result<bool>;
}

/// Matching helpers for types that carry a stored search key.
///
/// The stored key is already folded, so only the query side is normalized
/// per comparison. Implementors provide the key; the predicate comes free.
///
/// # Examples
/// ```rust
/// use gazetteer_core::traits::SearchKeyed;
///
/// struct Stored(&'static str);
/// impl SearchKeyed for Stored {
///     fn search_key(&self) -> &str { self.0 }
/// }
///
/// assert!(Stored("republiquefrancaise").matches("République"));
/// assert!(!Stored("republiquefrancaise").matches("xyz"));
/// ```
pub trait SearchKeyed {
    /// Returns the stored, fully folded search key.
    fn search_key(&self) -> &str;

    /// Accent-insensitive, case-insensitive, punctuation-insensitive
    /// substring match. A query that folds to nothing matches nothing.
    #[inline]
    fn matches(&self, query: &str) -> bool {
        let q = to_search_key(query);
        !q.is_empty() && self.search_key().contains(&q)
    }
}

impl SearchKeyed for City {
    fn search_key(&self) -> &str {
        &self.search_key
    }
}
