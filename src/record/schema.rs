//! Record type descriptors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How a field's resolved value is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Copied as is; conversion is left to serde.
    Value,
    /// Built as a nested record of the named type.
    Record(String),
}

/// One declared field of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name, also the key read when no remap applies.
    pub name: String,
    /// What to do with the resolved value.
    pub kind: FieldKind,
}

/// A record type: its name and declared fields, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordType {
    /// Stable name; keys the registry and appears in error messages.
    pub name: String,
    /// Declared fields.
    pub fields: Vec<FieldDef>,
}

impl RecordType {
    /// Creates a record type with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), fields: Vec::new() }
    }

    /// Adds a plain value field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldDef { name: name.into(), kind: FieldKind::Value });
        self
    }

    /// Adds a field built as a nested record of type `record`.
    #[must_use]
    pub fn nested(mut self, name: impl Into<String>, record: impl Into<String>) -> Self {
        self.fields.push(FieldDef { name: name.into(), kind: FieldKind::Record(record.into()) });
        self
    }
}

/// Catalog of record types by name.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    records: BTreeMap<String, RecordType>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a record type.
    pub fn insert(&mut self, record: RecordType) {
        self.records.insert(record.name.clone(), record);
    }

    /// Builder-style [`Schema::insert`].
    #[must_use]
    pub fn with(mut self, record: RecordType) -> Self {
        self.insert(record);
        self
    }

    /// Looks up a record type.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RecordType> {
        self.records.get(name)
    }

    /// Iterates record types in name order.
    pub fn records(&self) -> impl Iterator<Item = &RecordType> {
        self.records.values()
    }

    /// Names referenced by nested fields that the schema does not define.
    #[must_use]
    pub fn dangling(&self) -> Vec<(&str, &str)> {
        self.records
            .values()
            .flat_map(|record| {
                record.fields.iter().filter_map(move |field| match &field.kind {
                    FieldKind::Record(target) if !self.records.contains_key(target) => {
                        Some((record.name.as_str(), target.as_str()))
                    }
                    _ => None,
                })
            })
            .collect()
    }
}

/// Field as written in a schema file: a bare name, or a name plus a record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldDecl {
    /// `- s`
    Value(String),
    /// `- {name: f, record: Y}`
    Record {
        /// Field name.
        name: String,
        /// Nested record type.
        record: String,
    },
}

impl From<FieldDecl> for FieldDef {
    fn from(decl: FieldDecl) -> Self {
        match decl {
            FieldDecl::Value(name) => FieldDef { name, kind: FieldKind::Value },
            FieldDecl::Record { name, record } => FieldDef { name, kind: FieldKind::Record(record) },
        }
    }
}
