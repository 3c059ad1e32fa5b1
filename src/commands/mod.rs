//! Command dispatch and handlers.
//!
//! Handlers render their output to a string so they can be exercised against
//! an in-memory filesystem; [`dispatch`] prints it.

pub mod build;
pub mod resolve;
pub mod show;

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::cli::{Command, Inputs};
use crate::ports::FileSystem;
use crate::spec::SpecMapping;
use crate::store::{Catalog, Store};

/// Dispatch a parsed command to its handler using the real filesystem.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let output = dispatch_with_fs(command, &LiveFileSystem)?;
    println!("{output}");
    Ok(())
}

/// Dispatch a command reading files through `fs`, returning its output.
///
/// # Errors
///
/// Returns an error string if loading or resolution fails.
pub fn dispatch_with_fs(command: &Command, fs: &dyn FileSystem) -> Result<String, String> {
    match command {
        Command::Resolve { inputs, field } => resolve::run(fs, inputs, field),
        Command::Build { inputs } => build::run(fs, inputs),
        Command::Show { schema, record } => show::run(fs, schema, record.as_deref()),
    }
}

/// Everything loaded from the files named by [`Inputs`].
struct Loaded {
    catalog: Catalog,
    data: serde_json::Value,
    spec: Option<SpecMapping>,
}

fn load_inputs(fs: &dyn FileSystem, inputs: &Inputs) -> Result<Loaded, String> {
    let store = Store::new(fs);
    let catalog = store.load_catalog(&inputs.schema)?;
    if catalog.schema.get(&inputs.record).is_none() {
        return Err(format!(
            "Record type {} is not defined in {}",
            inputs.record,
            inputs.schema.display()
        ));
    }
    let data = store.load_data(&inputs.data)?;
    let spec = inputs.spec.as_deref().map(|path| store.load_spec(path)).transpose()?;
    Ok(Loaded { catalog, data, spec })
}
