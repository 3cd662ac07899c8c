// Entrypoint for the CLI application.
// - Keeps `main` small: parse the flags, initialize logging, run.
// - Any error surfaces as one line on stderr and exit code 1.

use clap::Parser;
use secgrp::cli::{self, Cli};

fn main() {
    // Logging is off unless RUST_LOG is set, so --list output on stdout
    // stays machine-readable.
    env_logger::init();

    let args = Cli::parse();
    if let Err(e) = cli::run(args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
