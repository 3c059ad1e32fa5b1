//! Remap entry: how one field's value is located in the source mapping.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::mapping::SpecMapping;
use crate::repr::{self, Repr};

/// One remap rule for one field.
///
/// Serialized form, as found in schema and spec files:
///
/// ```yaml
/// i: k                        # Rename
/// f: ["j.y", {y: l}]          # Redirect with a nested spec
/// g: {b: m}                   # Recurse in place
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecEntry {
    /// Read the value at this (possibly dotted) path instead of the field name.
    Rename(String),
    /// Read the value at this dotted path and build it with the nested spec.
    Redirect(String, SpecMapping),
    /// Read the value under the field's own name and build it with the nested spec.
    Recurse(SpecMapping),
    /// Any other shape loaded from a file. Kept verbatim so the failure can be
    /// reported against the record and field that use it.
    Invalid(Value),
}

impl SpecEntry {
    /// Creates a rename entry.
    #[must_use]
    pub fn rename(path: impl Into<String>) -> Self {
        Self::Rename(path.into())
    }

    /// Creates a redirect entry carrying a nested spec.
    #[must_use]
    pub fn redirect(path: impl Into<String>, nested: SpecMapping) -> Self {
        Self::Redirect(path.into(), nested)
    }

    /// Creates a recurse-in-place entry.
    #[must_use]
    pub fn recurse(nested: SpecMapping) -> Self {
        Self::Recurse(nested)
    }

    /// The path this entry reads from, if it follows one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Rename(path) | Self::Redirect(path, _) => Some(path),
            Self::Recurse(_) | Self::Invalid(_) => None,
        }
    }
}

impl From<&str> for SpecEntry {
    fn from(path: &str) -> Self {
        Self::rename(path)
    }
}

impl From<SpecMapping> for SpecEntry {
    fn from(nested: SpecMapping) -> Self {
        Self::recurse(nested)
    }
}

impl From<(&str, SpecMapping)> for SpecEntry {
    fn from((path, nested): (&str, SpecMapping)) -> Self {
        Self::redirect(path, nested)
    }
}

impl fmt::Display for SpecEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rename(path) => repr::write_str_literal(f, path),
            Self::Redirect(path, nested) => {
                f.write_str("(")?;
                repr::write_str_literal(f, path)?;
                write!(f, ", {nested})")
            }
            Self::Recurse(nested) => write!(f, "{nested}"),
            Self::Invalid(value) => write!(f, "{}", Repr(value)),
        }
    }
}
