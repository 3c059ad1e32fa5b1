//! Record building: walks a record type's fields, resolves each one, and
//! reshapes the source data into an object keyed by the record's own fields.
//!
//! Nested record fields are built recursively with the nested spec returned
//! by the resolver. The reshaped object can then be handed to serde for type
//! conversion.

mod schema;

pub use schema::{FieldDecl, FieldDef, FieldKind, RecordType, Schema};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{RemapError, Result};
use crate::registry::Registry;
use crate::repr;
use crate::resolve;
use crate::spec::SpecMapping;

/// Builds records described by a [`Schema`] using remaps from a [`Registry`].
pub struct Builder<'a> {
    schema: &'a Schema,
    registry: &'a Registry,
}

impl<'a> Builder<'a> {
    /// Creates a builder over a schema and its declared remaps.
    #[must_use]
    pub fn new(schema: &'a Schema, registry: &'a Registry) -> Self {
        Self { schema, registry }
    }

    /// Builds `record` from `data`, with `call` overriding declared remaps.
    ///
    /// # Errors
    ///
    /// Returns an error if the record type is unknown, `data` is not a
    /// mapping, or any field fails to resolve.
    pub fn build(&self, record: &str, data: &Value, call: Option<&SpecMapping>) -> Result<Value> {
        let record_type =
            self.schema.get(record).ok_or_else(|| RemapError::UnknownRecord(record.to_string()))?;
        let Value::Object(data) = data else {
            return Err(RemapError::NotAMapping {
                record: record.to_string(),
                value: repr::value(data),
            });
        };

        let effective = self.registry.effective(record, call);
        log::debug!(
            "build {record} with {}",
            effective.as_ref().map_or_else(|| "no remaps".to_string(), ToString::to_string)
        );
        let mut out = Map::new();
        for field in &record_type.fields {
            let resolved = resolve::resolve_with(record, &field.name, data, effective.as_ref())?;
            let value = match &field.kind {
                FieldKind::Value => resolved.value.clone(),
                FieldKind::Record(nested) => {
                    self.build(nested, resolved.value, resolved.nested.as_ref())?
                }
            };
            out.insert(field.name.clone(), value);
        }
        Ok(Value::Object(out))
    }

    /// Builds `record` and converts the result into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if building fails or the reshaped value does not
    /// deserialize into `T`.
    pub fn deserialize<T: DeserializeOwned>(
        &self,
        record: &str,
        data: &Value,
        call: Option<&SpecMapping>,
    ) -> Result<T> {
        let value = self.build(record, data, call)?;
        serde_json::from_value(value)
            .map_err(|source| RemapError::Coerce { record: record.to_string(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    fn spec(value: Value) -> SpecMapping {
        serde_json::from_value(value).unwrap()
    }

    fn xy_schema() -> Schema {
        Schema::new()
            .with(RecordType::new("X").field("s").field("i").nested("f", "Y"))
            .with(RecordType::new("Y").field("x").field("y"))
    }

    #[test]
    fn builds_flat_record_with_renames() {
        let schema = Schema::new().with(RecordType::new("X").field("s").field("i").field("f"));
        let registry = Registry::new();
        let data = json!({"s": "test", "k": 2, "j": 2.3});

        let built = Builder::new(&schema, &registry)
            .build("X", &data, Some(&spec(json!({"i": "k", "f": "j"}))))
            .unwrap();

        assert_eq!(built, json!({"s": "test", "i": 2, "f": 2.3}));
    }

    #[test]
    fn nested_spec_is_threaded_into_nested_record() {
        let schema = xy_schema();
        let registry = Registry::new();
        let data = json!({"s": "testX", "k": 2, "j": {"l": 1, "y": {"x": "testY", "l": 3}}});

        let built = Builder::new(&schema, &registry)
            .build("X", &data, Some(&spec(json!({"i": "k", "f": ["j.y", {"y": "l"}]}))))
            .unwrap();

        assert_eq!(built, json!({"s": "testX", "i": 2, "f": {"x": "testY", "y": 3}}));
    }

    #[test]
    fn output_uses_declared_field_order() {
        let schema = Schema::new().with(RecordType::new("X").field("b").field("a"));
        let registry = Registry::new();
        let built = Builder::new(&schema, &registry)
            .build("X", &json!({"a": 1, "b": 2}), None)
            .unwrap();
        let keys: Vec<&String> = built.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn extra_source_keys_are_ignored() {
        let schema = Schema::new().with(RecordType::new("X").field("s"));
        let registry = Registry::new();
        let built = Builder::new(&schema, &registry)
            .build("X", &json!({"s": 1, "unused": 2}), None)
            .unwrap();
        assert_eq!(built, json!({"s": 1}));
    }

    #[test]
    fn nested_value_must_be_mapping() {
        let schema = xy_schema();
        let registry = Registry::new();
        let data = json!({"s": "testX", "i": 2, "f": 5});

        let err = Builder::new(&schema, &registry).build("X", &data, None).unwrap_err();

        assert_eq!(err.to_string(), "Record type Y expects a mapping, got: 5");
    }

    #[test]
    fn unknown_record_type_fails() {
        let schema = Schema::new().with(RecordType::new("X").nested("f", "Missing"));
        let registry = Registry::new();
        let err = Builder::new(&schema, &registry)
            .build("X", &json!({"f": {}}), None)
            .unwrap_err();
        assert!(matches!(err, RemapError::UnknownRecord(ref name) if name == "Missing"));
    }

    #[test]
    fn deserialize_converts_into_struct() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Y {
            x: String,
            y: i64,
        }

        #[derive(Debug, PartialEq, Deserialize)]
        struct X {
            s: String,
            i: i64,
            f: Y,
        }

        let schema = xy_schema();
        let registry = Registry::new();
        let data = json!({"s": "testX", "k": 2, "j": {"l": 1, "y": {"x": "testY", "l": 3}}});

        let built: X = Builder::new(&schema, &registry)
            .deserialize("X", &data, Some(&spec(json!({"i": "k", "f": ["j.y", {"y": "l"}]}))))
            .unwrap();

        assert_eq!(
            built,
            X { s: "testX".to_string(), i: 2, f: Y { x: "testY".to_string(), y: 3 } }
        );
    }

    #[test]
    fn deserialize_reports_type_mismatch() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct X {
            i: i64,
        }

        let schema = Schema::new().with(RecordType::new("X").field("i"));
        let registry = Registry::new();
        let err = Builder::new(&schema, &registry)
            .deserialize::<X>("X", &json!({"i": "nope"}), None)
            .unwrap_err();
        assert!(matches!(err, RemapError::Coerce { .. }));
        assert!(err.to_string().starts_with("Failed to convert record X"));
    }
}
