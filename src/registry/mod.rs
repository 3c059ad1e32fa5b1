//! Registry of remap specs declared per record type.
//!
//! Declarations accumulate into one [`SpecMapping`] per record type, keyed by
//! the record type's name. The registry is populated while record types are
//! being set up (in code or from a schema file) and only read afterwards.

use std::collections::BTreeMap;

use crate::spec::{SpecEntry, SpecMapping};

/// Side table of declared remap specs, keyed by record type name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    specs: BTreeMap<String, SpecMapping>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the entry for one field of `record`, replacing any earlier one.
    ///
    /// The entry's shape is not checked here; a malformed entry fails when a
    /// field using it is resolved.
    pub fn declare(&mut self, record: &str, field: &str, entry: impl Into<SpecEntry>) {
        let entry = entry.into();
        log::debug!("declare {record}.{field} -> {entry}");
        self.specs.entry(record.to_string()).or_default().insert(field, entry);
    }

    /// Merges a whole mapping into `record`'s declarations, last one wins per field.
    pub fn declare_all(&mut self, record: &str, mapping: &SpecMapping) {
        log::debug!("declare {record} <- {mapping}");
        self.specs.entry(record.to_string()).or_default().overlay(mapping);
    }

    /// Returns everything declared for `record`.
    #[must_use]
    pub fn declared(&self, record: &str) -> Option<&SpecMapping> {
        self.specs.get(record)
    }

    /// Computes the effective spec for one build of `record`.
    ///
    /// Starts from the declared mapping and overlays `call`, whose entries win.
    /// Returns `None` when neither exists. Nothing is written back.
    #[must_use]
    pub fn effective(&self, record: &str, call: Option<&SpecMapping>) -> Option<SpecMapping> {
        match (self.declared(record), call) {
            (None, None) => None,
            (Some(declared), None) => Some(declared.clone()),
            (None, Some(call)) => Some(call.clone()),
            (Some(declared), Some(call)) => Some(SpecMapping::merged(declared, call)),
        }
    }

    /// Iterates record types with declarations, in name order.
    pub fn records(&self) -> impl Iterator<Item = (&str, &SpecMapping)> {
        self.specs.iter().map(|(name, spec)| (name.as_str(), spec))
    }
}
