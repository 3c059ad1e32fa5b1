//! Error type shared by the resolver, the registry lookups and the record builder.
//!
//! Every variant carries its diagnostic detail in the message itself (record
//! type, quoted field name, rendered mapping), so callers that only log the
//! error still see everything needed to debug the remap.

/// Errors raised while resolving fields or building records.
#[derive(Debug, thiserror::Error)]
pub enum RemapError {
    /// A field with no remap entry (or a recurse-in-place entry) is not a
    /// direct key of the source mapping.
    #[error("Key '{key}' not found in : {mapping}")]
    MissingKey {
        /// The key that was looked up.
        key: String,
        /// The searched mapping, rendered.
        mapping: String,
    },

    /// A remap entry is not a rename, a redirect or a recurse-in-place.
    #[error("Record type {record}, field \"{field}\" has invalid remap: {entry}")]
    InvalidEntry {
        /// Record type declaring the field.
        record: String,
        /// Field whose entry is malformed.
        field: String,
        /// The offending entry, rendered.
        entry: String,
    },

    /// Path-following failed and so did the fallback lookup.
    #[error("Keys ({field}, {first_segment}) not found in : {mapping}")]
    UnresolvedPath {
        /// The field's own name (first fallback candidate).
        field: String,
        /// The path's first segment (second fallback candidate).
        first_segment: String,
        /// The top-level source mapping, rendered.
        mapping: String,
    },

    /// A record was asked to be built from something other than a mapping.
    #[error("Record type {record} expects a mapping, got: {value}")]
    NotAMapping {
        /// Record type being built.
        record: String,
        /// The value that was supplied, rendered.
        value: String,
    },

    /// A field refers to a record type the schema does not define.
    #[error("Unknown record type {0}")]
    UnknownRecord(String),

    /// The reshaped value could not be converted into the target Rust type.
    #[error("Failed to convert record {record}: {source}")]
    Coerce {
        /// Record type being converted.
        record: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

/// Alias for `Result` with [`RemapError`].
pub type Result<T> = std::result::Result<T, RemapError>;
