// src/search.rs

//! The substring-search contract.
//!
//! Query and stored value are normalized by the same folding, which makes
//! matching accent-insensitive, case-insensitive and punctuation-insensitive
//! on both sides. The core defines the predicate; executing it efficiently
//! over a large collection is the storage layer's concern.

use crate::text::to_search_key;
use crate::traits::SearchKeyed;

/// True if the folded `query` occurs as a substring of `stored_search_key`.
///
/// The stored key is expected to be already folded (it is derived with
/// [`to_search_key`] and kept in sync on rename). A query that folds to
/// nothing matches nothing.
///
/// # Examples
///
/// ```rust
/// use gazetteer_core::search::search_matches;
///
/// assert!(search_matches("république", "republiquefrancaise"));
/// assert!(search_matches("Paris, Texas", "paristexasunitedstates"));
/// assert!(!search_matches("xyz", "republiquefrancaise"));
/// ```
pub fn search_matches(query: &str, stored_search_key: &str) -> bool {
    let q = to_search_key(query);
    !q.is_empty() && stored_search_key.contains(&q)
}

/// Linear scan over an in-memory slice, folding the query once.
///
/// Convenience for callers that hold their records in memory; stores with a
/// real index implement the same predicate themselves.
pub fn find_matching<'a, T: SearchKeyed>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let q = to_search_key(query);
    if q.is_empty() {
        return Vec::new();
    }
    items
        .iter()
        .filter(|item| item.search_key().contains(&q))
        .collect()
}
