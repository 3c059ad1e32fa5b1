//! `remap build` command.

use crate::cli::Inputs;
use crate::ports::FileSystem;
use crate::record::Builder;

/// Execute the `build` command.
///
/// Reshapes the data into the record's own fields, nested records included,
/// and renders it as pretty JSON.
///
/// # Errors
///
/// Returns an error string if loading or building fails.
pub fn run(fs: &dyn FileSystem, inputs: &Inputs) -> Result<String, String> {
    let loaded = super::load_inputs(fs, inputs)?;
    let builder = Builder::new(&loaded.catalog.schema, &loaded.catalog.registry);
    let built = builder
        .build(&inputs.record, &loaded.data, loaded.spec.as_ref())
        .map_err(|e| e.to_string())?;
    serde_json::to_string_pretty(&built).map_err(|e| format!("Failed to render record: {e}"))
}
