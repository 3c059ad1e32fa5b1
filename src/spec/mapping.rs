//! Remap spec: field name to [`SpecEntry`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::entry::SpecEntry;
use crate::repr;

/// Mapping from field name to remap entry for one record type.
///
/// Key order carries no meaning; entries are kept sorted so listings and
/// rendered specs are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecMapping(BTreeMap<String, SpecEntry>);

impl SpecMapping {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry for `field`, returning the entry it replaced.
    pub fn insert(&mut self, field: impl Into<String>, entry: impl Into<SpecEntry>) -> Option<SpecEntry> {
        self.0.insert(field.into(), entry.into())
    }

    /// Returns the entry for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&SpecEntry> {
        self.0.get(field)
    }

    /// Merges `other` into `self`; entries from `other` win on collision.
    pub fn overlay(&mut self, other: &SpecMapping) {
        for (field, entry) in &other.0 {
            self.0.insert(field.clone(), entry.clone());
        }
    }

    /// Returns `base` overlaid with `over`.
    #[must_use]
    pub fn merged(base: &SpecMapping, over: &SpecMapping) -> SpecMapping {
        let mut out = base.clone();
        out.overlay(over);
        out
    }

    /// Number of fields with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no field has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates entries in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecEntry)> {
        self.0.iter().map(|(field, entry)| (field.as_str(), entry))
    }
}

impl<K, V> FromIterator<(K, V)> for SpecMapping
where
    K: Into<String>,
    V: Into<SpecEntry>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl fmt::Display for SpecMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (field, entry)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            repr::write_str_literal(f, field)?;
            write!(f, ": {entry}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_prefers_incoming_entries() {
        let mut base: SpecMapping = [("i", "k"), ("f", "j")].into_iter().collect();
        let over: SpecMapping = [("i", "z")].into_iter().collect();
        base.overlay(&over);

        assert_eq!(base.get("i"), Some(&SpecEntry::rename("z")));
        assert_eq!(base.get("f"), Some(&SpecEntry::rename("j")));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn merged_leaves_inputs_untouched() {
        let base: SpecMapping = [("a", "x")].into_iter().collect();
        let over: SpecMapping = [("b", "y")].into_iter().collect();
        let out = SpecMapping::merged(&base, &over);

        assert_eq!(out.len(), 2);
        assert_eq!(base.len(), 1);
        assert_eq!(over.len(), 1);
    }

    #[test]
    fn display_is_sorted_by_field() {
        let spec: SpecMapping = [("i", "k"), ("f", "j")].into_iter().collect();
        assert_eq!(spec.to_string(), "{'f': 'j', 'i': 'k'}");
    }
}
