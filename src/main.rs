//! # Vendor Private CLI
//!
//! Binary entry point for the `vendor-private` command-line tool. It parses
//! arguments with `clap` and dispatches to a command; all of the real work
//! lives in the `vendor_private` library.
//!
//! Any error is printed once to stderr and the process exits with status 1.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
