//! `remap resolve` command.

use serde_json::Value;

use crate::cli::Inputs;
use crate::ports::FileSystem;
use crate::repr;
use crate::resolve;

/// Execute the `resolve` command.
///
/// Prints the resolved value as JSON, then the nested spec (or `none`).
///
/// # Errors
///
/// Returns an error string if loading fails, the data is not a mapping, or
/// the field does not resolve.
pub fn run(fs: &dyn FileSystem, inputs: &Inputs, field: &str) -> Result<String, String> {
    let loaded = super::load_inputs(fs, inputs)?;
    let Value::Object(data) = &loaded.data else {
        return Err(format!("Data must be a mapping, got: {}", repr::value(&loaded.data)));
    };

    let resolved = resolve::resolve(
        &loaded.catalog.registry,
        &inputs.record,
        field,
        data,
        loaded.spec.as_ref(),
    )
    .map_err(|e| e.to_string())?;

    let value = serde_json::to_string(resolved.value)
        .map_err(|e| format!("Failed to render value: {e}"))?;
    let nested = resolved.nested.map_or_else(|| "none".to_string(), |spec| spec.to_string());
    Ok(format!("value: {value}\nnested: {nested}"))
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::commands::tests::{fixture_fs, inputs};
    use crate::store::tests::MemFs;

    #[test]
    fn resolves_declared_rename() {
        let out = run(&fixture_fs(), &inputs("X", false), "i").unwrap();
        assert_eq!(out, "value: 2\nnested: none");
    }

    #[test]
    fn resolves_call_spec_redirect_with_nested_spec() {
        let out = run(&fixture_fs(), &inputs("X", true), "f").unwrap();
        assert_eq!(out, "value: {\"x\":\"testY\",\"l\":3}\nnested: {'y': 'l'}");
    }

    #[test]
    fn unresolvable_field_reports_error() {
        let out = run(&fixture_fs(), &inputs("X", false), "f").unwrap_err();
        assert!(out.starts_with("Key 'f' not found in : {'s': 'testX'"));
    }

    #[test]
    fn data_must_be_mapping() {
        let fs = fixture_fs().with("/data.json", "[1, 2]");
        let err = run(&fs, &inputs("X", false), "s").unwrap_err();
        assert_eq!(err, "Data must be a mapping, got: [1, 2]");
    }

    #[test]
    fn missing_spec_file_is_reported() {
        let fs = MemFs::new()
            .with("/schema.yaml", crate::commands::tests::SCHEMA)
            .with("/data.json", crate::commands::tests::DATA);
        let err = run(&fs, &inputs("X", true), "s").unwrap_err();
        assert_eq!(err, "spec file not found: /spec.yaml");
    }
}
