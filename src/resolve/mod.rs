//! Field resolution: where a field's value lives and which spec applies to it.
//!
//! For each field of a record being built, the resolver merges the call spec
//! over the record type's declared spec and interprets the field's entry:
//!
//! | entry                    | value read from          | nested spec |
//! |--------------------------|--------------------------|-------------|
//! | none                     | `data[field]`            | none        |
//! | `Rename(path)`           | `path` (with fallback)   | none        |
//! | `Redirect(path, spec)`   | `path` (with fallback)   | `spec`      |
//! | `Recurse(spec)`          | `data[field]`            | `spec`      |
//!
//! The nested spec is plain data for the caller to pass into its own build of
//! the value; the resolver keeps no state between calls.

mod path;

use serde_json::{Map, Value};

use crate::error::{RemapError, Result};
use crate::registry::Registry;
use crate::repr;
use crate::spec::{SpecEntry, SpecMapping};

/// A located field value and the spec to build it with, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    /// The value found in the source data.
    pub value: &'a Value,
    /// Spec to apply when `value` is itself built into a record.
    pub nested: Option<SpecMapping>,
}

/// Resolves one field of `record` against `data`.
///
/// The effective spec is the registry's declarations for `record` overlaid
/// with `call`.
///
/// # Errors
///
/// Returns [`RemapError::MissingKey`] when an unmapped field is not a key of
/// `data`, [`RemapError::UnresolvedPath`] when a path and its fallback both
/// miss, and [`RemapError::InvalidEntry`] for a malformed entry.
pub fn resolve<'a>(
    registry: &Registry,
    record: &str,
    field: &str,
    data: &'a Map<String, Value>,
    call: Option<&SpecMapping>,
) -> Result<Resolved<'a>> {
    let effective = registry.effective(record, call);
    resolve_with(record, field, data, effective.as_ref())
}

/// Resolves one field against an already computed effective spec.
///
/// # Errors
///
/// Same as [`resolve`].
pub fn resolve_with<'a>(
    record: &str,
    field: &str,
    data: &'a Map<String, Value>,
    effective: Option<&SpecMapping>,
) -> Result<Resolved<'a>> {
    let Some(entry) = effective.and_then(|spec| spec.get(field)) else {
        log::debug!("{record}.{field}: direct");
        return Ok(Resolved { value: direct(field, data)?, nested: None });
    };
    log::debug!("{record}.{field}: {entry}");

    match entry {
        SpecEntry::Rename(target) => {
            Ok(Resolved { value: path::follow(target, field, data)?, nested: None })
        }
        SpecEntry::Redirect(target, nested) => Ok(Resolved {
            value: path::follow(target, field, data)?,
            nested: Some(nested.clone()),
        }),
        SpecEntry::Recurse(nested) => {
            Ok(Resolved { value: direct(field, data)?, nested: Some(nested.clone()) })
        }
        SpecEntry::Invalid(value) => Err(RemapError::InvalidEntry {
            record: record.to_string(),
            field: field.to_string(),
            entry: repr::value(value),
        }),
    }
}

fn direct<'a>(field: &str, data: &'a Map<String, Value>) -> Result<&'a Value> {
    data.get(field).ok_or_else(|| RemapError::MissingKey {
        key: field.to_string(),
        mapping: repr::mapping(data),
    })
}
