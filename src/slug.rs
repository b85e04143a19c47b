// src/slug.rs

//! URL-safe slug derivation, unique within a parent scope.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::EntityId;
use crate::text::to_ascii;
use crate::traits::SlugLookup;

/// Base used when a name folds away to nothing (slugs must be non-empty).
const EMPTY_BASE: &str = "unnamed";

/// The parent context a slug must be unique within.
///
/// Countries share one global scope; regions are scoped per country; cities
/// are scoped per region, or per country when they have no region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlugScope {
    Global,
    Country(EntityId),
    Region(EntityId),
}

/// Reduce a name to a URL-safe token: ASCII, lowercase, non-alphanumeric
/// runs collapsed to a single `-`, no leading or trailing separator.
///
/// # Examples
///
/// ```rust
/// use gazetteer_core::slug::slugify;
///
/// assert_eq!(slugify("Île-de-France"), "ile-de-france");
/// assert_eq!(slugify("  New  York "), "new-york");
/// ```
pub fn slugify(text: &str) -> String {
    let ascii = to_ascii(text);
    let mut out = String::with_capacity(ascii.len());
    let mut pending_sep = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    if out.is_empty() {
        out.push_str(EMPTY_BASE);
    }
    out
}

/// Allocates slugs by probing scope occupancy through a storage collaborator.
///
/// The allocator itself is pure and deterministic for a fixed occupancy: the
/// base slug if free, else `base-2`, `base-3`, … in increasing order. It must
/// be invoked inside a write protected by a unique constraint on
/// `(scope, slug)`; on a uniqueness rejection at commit time the caller
/// retries with a fresh allocation, not the core.
pub struct SlugAllocator<'a, L: SlugLookup + ?Sized> {
    lookup: &'a L,
}

impl<'a, L: SlugLookup + ?Sized> SlugAllocator<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    /// Derive the first unused slug for `base_text` within `scope`.
    ///
    /// Lookup errors propagate unretried.
    pub fn allocate(&self, base_text: &str, scope: &SlugScope) -> Result<String> {
        let base = slugify(base_text);
        if !self.lookup.is_taken(scope, &base)? {
            return Ok(base);
        }
        let mut n: u64 = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if !self.lookup.is_taken(scope, &candidate)? {
                return Ok(candidate);
            }
            n += 1;
        }
    }
}
