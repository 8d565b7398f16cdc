//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::commands;
use vendor_private::defaults;

/// Vendor Private - Pin private Go module checkouts to the versions in go.mod
#[derive(Parser, Debug)]
#[command(name = "vendor-private")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to `sync`)
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    inputs: InputArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

/// Locations of the inputs and the vendor root, shared by every command.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the dependency manifest
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = "VENDOR_PRIVATE_MANIFEST",
        default_value = defaults::MANIFEST_FILE
    )]
    pub manifest: PathBuf,

    /// Path to the private repository declarations (`<git-url> <main-branch>` per line)
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = "VENDOR_PRIVATE_DECLARATIONS",
        default_value = defaults::PRIVATE_FILE
    )]
    pub private: PathBuf,

    /// Directory that holds the private working copies
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "VENDOR_PRIVATE_DIR",
        default_value = defaults::VENDOR_DIR
    )]
    pub vendor_dir: PathBuf,
}

impl InputArgs {
    pub fn inputs(&self) -> vendor_private::orchestrator::Inputs {
        vendor_private::orchestrator::Inputs {
            manifest: self.manifest.clone(),
            private: self.private.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone or update every private module to its pinned version
    Sync(commands::sync::SyncArgs),

    /// Resolve private modules against the manifest without running git
    Check(commands::check::CheckArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = vendor_private::output::OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            None => commands::sync::execute(
                commands::sync::SyncArgs::default(),
                &self.inputs,
                &output,
            ),
            Some(Commands::Sync(args)) => commands::sync::execute(args, &self.inputs, &output),
            Some(Commands::Check(args)) => commands::check::execute(args, &self.inputs),
            Some(Commands::Completions(args)) => commands::completions::execute(args),
        }
    }
}

/// Set up `env_logger`, letting `RUST_LOG` override `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when running under a test harness
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
