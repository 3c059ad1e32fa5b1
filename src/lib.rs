//! Resolve where record fields live in nested data.
//!
//! A record type declares its fields; a remap spec says where each field's
//! value is read from in the source mapping: under another key, at a dotted
//! path, or under its own name with a nested spec for building the value.
//! Specs come from two places: declarations per record type in a
//! [`Registry`], and a spec passed with each build, which wins on conflicts.
//!
//! ```
//! use remap::{resolve, Registry};
//! use serde_json::json;
//!
//! let mut registry = Registry::new();
//! registry.declare("X", "i", "k");
//!
//! let data = json!({"s": "test", "k": 2});
//! let data = data.as_object().unwrap();
//! let resolved = resolve(&registry, "X", "i", data, None).unwrap();
//! assert_eq!(resolved.value, &json!(2));
//! assert!(resolved.nested.is_none());
//! ```

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod error;
pub mod ports;
pub mod record;
pub mod registry;
pub mod repr;
pub mod resolve;
pub mod spec;
pub mod store;

pub use error::{RemapError, Result};
pub use record::{Builder, RecordType, Schema};
pub use registry::Registry;
pub use resolve::{resolve, resolve_with, Resolved};
pub use spec::{SpecEntry, SpecMapping};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    init_logging(cli.verbose);
    commands::dispatch(&cli.command)
}

/// Initialise `env_logger` from `REMAP_LOG` (default `warn`).
///
/// `verbose` forces the `debug` level. Repeated calls are ignored.
pub fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().filter_or("REMAP_LOG", "warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}
