//! # Check Command Implementation
//!
//! Resolves every declared private repository against the manifest and
//! prints the result, without running git or touching the vendor root.
//! Useful for validating `go.private` in CI before a real sync.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use vendor_private::orchestrator;

use crate::cli::InputArgs;

/// Output formats for the resolved module list
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum CheckFormat {
    /// One line per module: name, version, branch, url
    #[default]
    Text,
    /// A JSON array of resolved modules
    Json,
}

/// Resolve private modules without running git
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = CheckFormat::Text)]
    pub format: CheckFormat,
}

/// Execute the `check` command.
pub fn execute(args: CheckArgs, inputs: &InputArgs) -> Result<()> {
    let modules = orchestrator::resolve(&inputs.inputs())
        .context("Failed to resolve private modules")?
        .unwrap_or_default();

    match args.format {
        CheckFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&modules)?);
        }
        CheckFormat::Text if modules.is_empty() => {
            println!("Private repositories list is empty");
        }
        CheckFormat::Text => {
            for module in &modules {
                println!(
                    "{} {} {} {}",
                    module.name, module.version, module.main_branch, module.url
                );
            }
        }
    }
    Ok(())
}
