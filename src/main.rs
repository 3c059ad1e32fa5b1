//! Binary entrypoint for the `remap` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Logging is initialised in remap::run once --verbose is known.
    match remap::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
