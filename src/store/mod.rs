//! Loading of schema, spec and data files.
//!
//! Files are YAML unless their extension is `.json`. A schema file lists
//! record types, their fields and their declared remaps:
//!
//! ```yaml
//! records:
//!   X:
//!     fields: [s, i, {name: f, record: Y}]
//!     remap:
//!       i: k
//!   Y:
//!     fields: [x, y]
//! ```
//!
//! Loading a schema fills both the record [`Schema`] and the [`Registry`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::ports::FileSystem;
use crate::record::{FieldDecl, FieldDef, RecordType, Schema};
use crate::registry::Registry;
use crate::spec::SpecMapping;

/// Record types plus the remaps declared for them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Record type descriptors.
    pub schema: Schema,
    /// Declared remaps.
    pub registry: Registry,
}

#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(default)]
    records: BTreeMap<String, RecordDecl>,
}

#[derive(Debug, Deserialize)]
struct RecordDecl {
    #[serde(default)]
    fields: Vec<FieldDecl>,
    #[serde(default)]
    remap: SpecMapping,
}

/// Reads and parses input files through a [`FileSystem`].
pub struct Store<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> Store<'a> {
    /// Creates a store reading through `fs`.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// Loads a schema file into a [`Catalog`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a nested
    /// field refers to a record type the file does not define.
    pub fn load_catalog(&self, path: &Path) -> Result<Catalog, String> {
        let file: SchemaFile = self.read(path, "schema")?;
        let mut catalog = Catalog::default();
        for (name, decl) in file.records {
            if !decl.remap.is_empty() {
                catalog.registry.declare_all(&name, &decl.remap);
            }
            catalog.schema.insert(RecordType {
                name,
                fields: decl.fields.into_iter().map(FieldDef::from).collect(),
            });
        }

        if let Some((record, target)) = catalog.schema.dangling().first() {
            return Err(format!(
                "Schema {}: record type {record} refers to undefined record type {target}",
                path.display()
            ));
        }
        log::info!(
            "loaded {} record types from {}",
            catalog.schema.records().count(),
            path.display()
        );
        Ok(catalog)
    }

    /// Loads a call-level remap spec.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a mapping.
    pub fn load_spec(&self, path: &Path) -> Result<SpecMapping, String> {
        self.read(path, "spec")
    }

    /// Loads source data.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_data(&self, path: &Path) -> Result<Value, String> {
        self.read(path, "data")
    }

    fn read<T: DeserializeOwned>(&self, path: &Path, what: &str) -> Result<T, String> {
        if !self.fs.exists(path) {
            return Err(format!("{what} file not found: {}", path.display()));
        }
        let contents = self
            .fs
            .read_to_string(path)
            .map_err(|e| format!("Failed to read {what} file {}: {e}", path.display()))?;
        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(&contents)
                .map_err(|e| format!("Failed to parse {what} file {}: {e}", path.display()))
        } else {
            serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse {what} file {}: {e}", path.display()))
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::record::FieldKind;
    use crate::spec::SpecEntry;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// In-memory filesystem for testing loading without touching disk.
    pub(crate) struct MemFs {
        files: Mutex<HashMap<PathBuf, String>>,
    }

    impl MemFs {
        pub(crate) fn new() -> Self {
            Self { files: Mutex::new(HashMap::new()) }
        }

        pub(crate) fn with(self, path: &str, contents: &str) -> Self {
            self.files.lock().unwrap().insert(PathBuf::from(path), contents.to_string());
            self
        }
    }

    impl FileSystem for MemFs {
        fn read_to_string(
            &self,
            path: &Path,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            let files = self.files.lock().unwrap();
            files
                .get(path)
                .cloned()
                .ok_or_else(|| format!("File not found: {}", path.display()).into())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    const SCHEMA: &str = "\
records:
  X:
    fields: [s, i, {name: f, record: Y}]
    remap:
      i: k
  Y:
    fields: [x, y]
";

    #[test]
    fn load_catalog_fills_schema_and_registry() {
        let fs = MemFs::new().with("/schema.yaml", SCHEMA);
        let catalog = Store::new(&fs).load_catalog(Path::new("/schema.yaml")).unwrap();

        let x = catalog.schema.get("X").unwrap();
        assert_eq!(x.fields.len(), 3);
        assert_eq!(x.fields[2].kind, FieldKind::Record("Y".to_string()));
        assert_eq!(
            catalog.registry.declared("X").unwrap().get("i"),
            Some(&SpecEntry::rename("k"))
        );
        assert!(catalog.registry.declared("Y").is_none());
    }

    #[test]
    fn load_catalog_accepts_json() {
        let fs = MemFs::new().with(
            "/schema.json",
            r#"{"records": {"X": {"fields": ["s"], "remap": {"s": ["a.b", {}]}}}}"#,
        );
        let catalog = Store::new(&fs).load_catalog(Path::new("/schema.json")).unwrap();
        assert_eq!(
            catalog.registry.declared("X").unwrap().get("s").and_then(SpecEntry::path),
            Some("a.b")
        );
    }

    #[test]
    fn load_catalog_keeps_invalid_entries_for_later() {
        let fs = MemFs::new().with("/schema.yaml", "records:\n  X:\n    fields: [s]\n    remap:\n      s: ~\n");
        let catalog = Store::new(&fs).load_catalog(Path::new("/schema.yaml")).unwrap();
        assert_eq!(
            catalog.registry.declared("X").unwrap().get("s"),
            Some(&SpecEntry::Invalid(Value::Null))
        );
    }

    #[test]
    fn load_catalog_rejects_undefined_nested_type() {
        let fs = MemFs::new().with("/schema.yaml", "records:\n  X:\n    fields: [{name: f, record: Z}]\n");
        let err = Store::new(&fs).load_catalog(Path::new("/schema.yaml")).unwrap_err();
        assert!(err.contains("record type X refers to undefined record type Z"));
    }

    #[test]
    fn missing_file_is_reported() {
        let fs = MemFs::new();
        let err = Store::new(&fs).load_data(Path::new("/data.json")).unwrap_err();
        assert_eq!(err, "data file not found: /data.json");
    }

    #[test]
    fn unparsable_file_is_reported() {
        let fs = MemFs::new().with("/data.json", "{not json");
        let err = Store::new(&fs).load_data(Path::new("/data.json")).unwrap_err();
        assert!(err.starts_with("Failed to parse data file /data.json"));
    }

    #[test]
    fn load_spec_reads_yaml_mapping() {
        let fs = MemFs::new().with("/spec.yaml", "i: k\nf: [j.y, {y: l}]\n");
        let spec = Store::new(&fs).load_spec(Path::new("/spec.yaml")).unwrap();
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.get("i"), Some(&SpecEntry::rename("k")));
    }

    #[test]
    fn json_data_keeps_key_order() {
        let fs = MemFs::new().with("/data.json", r#"{"s": "testX", "m": 3}"#);
        let data = Store::new(&fs).load_data(Path::new("/data.json")).unwrap();
        let keys: Vec<&String> = data.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["s", "m"]);
    }
}
