//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `remap`.
#[derive(Debug, Parser)]
#[command(name = "remap", version, about = "Resolve record fields in nested data via remap specs")]
pub struct Cli {
    /// Log resolution steps (overrides `REMAP_LOG`).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Inputs shared by commands that resolve against data.
#[derive(Debug, Args)]
pub struct Inputs {
    /// Schema file declaring record types and their remaps.
    #[arg(long)]
    pub schema: PathBuf,

    /// Source data file (JSON or YAML).
    #[arg(long)]
    pub data: PathBuf,

    /// Record type to resolve against.
    #[arg(long)]
    pub record: String,

    /// Call-level remap spec overriding the declared one.
    #[arg(long)]
    pub spec: Option<PathBuf>,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Locate one field's value and the nested spec that applies to it.
    Resolve {
        /// Data and record inputs.
        #[command(flatten)]
        inputs: Inputs,

        /// Field to resolve.
        #[arg(long)]
        field: String,
    },
    /// Reshape the data into the record's own fields and print it as JSON.
    Build {
        /// Data and record inputs.
        #[command(flatten)]
        inputs: Inputs,
    },
    /// List record types, or show one record's fields and declared remaps.
    Show {
        /// Schema file declaring record types and their remaps.
        #[arg(long)]
        schema: PathBuf,

        /// Record type to show.
        record: Option<String>,
    },
}
