//! Binary crate for the `weathercard` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and merging them with saved defaults
//! - Interactive configuration
//! - Printing the card and reporting failures

use clap::Parser;
use std::process::ExitCode;

mod cli;
mod configure;
mod logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    logging::init(cmd.verbose);

    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report(&err);
            ExitCode::FAILURE
        }
    }
}
