//! `remap show` command.

use std::fmt::Write as _;
use std::path::Path;

use crate::ports::FileSystem;
use crate::record::{FieldKind, RecordType};
use crate::spec::SpecMapping;
use crate::store::{Catalog, Store};

/// Execute the `show` command.
///
/// When `record` is provided, prints its fields with the remap declared for
/// each. Otherwise lists all record types in the schema.
///
/// # Errors
///
/// Returns an error string if the schema cannot be loaded or the record type
/// is not defined.
pub fn run(fs: &dyn FileSystem, schema: &Path, record: Option<&str>) -> Result<String, String> {
    let catalog = Store::new(fs).load_catalog(schema)?;

    if let Some(name) = record {
        let record_type = catalog
            .schema
            .get(name)
            .ok_or_else(|| format!("Record type {name} is not defined in {}", schema.display()))?;
        Ok(describe(record_type, catalog.registry.declared(name)))
    } else {
        Ok(list(&catalog))
    }
}

fn list(catalog: &Catalog) -> String {
    let rows: Vec<(&str, usize, usize)> = catalog
        .schema
        .records()
        .map(|record| {
            let remaps = catalog.registry.declared(&record.name).map_or(0, SpecMapping::len);
            (record.name.as_str(), record.fields.len(), remaps)
        })
        .collect();
    if rows.is_empty() {
        return "No record types found in schema.".to_string();
    }

    let name_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(6).max(6);
    let mut out = String::new();
    let _ = writeln!(out, "{:<name_width$}  FIELDS  REMAPS", "RECORD");
    let _ = writeln!(out, "{:-<name_width$}  ------  ------", "");
    for (name, fields, remaps) in &rows {
        let _ = writeln!(out, "{name:<name_width$}  {fields:>6}  {remaps:>6}");
    }
    out.push_str("\nUse `remap show --schema <FILE> <RECORD>` to view details.");
    out
}

fn describe(record: &RecordType, declared: Option<&SpecMapping>) -> String {
    let mut out = format!("Record: {}\n\nFields:", record.name);
    for field in &record.fields {
        let _ = write!(out, "\n  {}", field.name);
        if let FieldKind::Record(nested) = &field.kind {
            let _ = write!(out, ": {nested}");
        }
        if let Some(entry) = declared.and_then(|spec| spec.get(&field.name)) {
            let _ = write!(out, "  <- {entry}");
        }
    }

    // Declarations naming fields the record does not have are inert; flag them.
    let unused: Vec<&str> = declared
        .into_iter()
        .flat_map(SpecMapping::iter)
        .map(|(field, _)| field)
        .filter(|field| !record.fields.iter().any(|f| f.name == *field))
        .collect();
    if !unused.is_empty() {
        let _ = write!(out, "\n\nUnused remaps: {}", unused.join(", "));
    }
    out
}
