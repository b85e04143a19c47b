// src/error.rs

use thiserror::Error;

/// Crate-level error type.
///
/// Normalization and display/timezone resolution are total and never surface
/// here; the variants cover translation lookup, invariant violations reported
/// by storage layers, and failures of the storage collaborators themselves.
#[derive(Debug, Error)]
pub enum GazetteerError {
    /// No usable translation variant for the requested language, its
    /// fallback, or any root variant. Fatal for that read.
    #[error("no usable translation variant for language '{language}'")]
    NoVariant { language: String },

    /// A variant's `source_language` names a language with no stored variant.
    /// The field is not called `source`: thiserror would infer that name as
    /// the error's cause.
    #[error("variant '{language}' claims source language '{source_language}' which has no variant")]
    UnknownSourceLanguage {
        language: String,
        source_language: String,
    },

    /// Uniqueness violation on `external_id`, `code2` or `code3`, surfaced by
    /// the storage layer at write time.
    #[error("duplicate {field} '{value}'")]
    DuplicateIdentifier {
        field: &'static str,
        value: String,
    },

    /// The storage collaborator failed (I/O, network). Propagated unretried.
    #[error("storage backend error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl GazetteerError {
    /// Wrap a foreign storage-layer error.
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        GazetteerError::Storage(Box::new(err))
    }
}

/// Convenient result alias used across the crate.
pub type Result<T, E = GazetteerError> = std::result::Result<T, E>;
