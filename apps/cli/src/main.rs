//! # Recap Entry Point
//!
//! Parses arguments, installs logging and prints the command's output.
//! Errors go to stderr with exit code 1.

use std::process::ExitCode;

use clap::Parser;
use recap_cli::{init_tracing, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
