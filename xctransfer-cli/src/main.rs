//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use env_logger::Target;
use log::{LevelFilter, error};
use xctransfer_cli::{CliError, run};

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .target(Target::Stderr)
        .init();

    match run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) if err.is_usage() => {
            error!("{err}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("xctransfer: {err}");
            ExitCode::FAILURE
        }
    }
}
