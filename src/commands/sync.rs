//! # Sync Command Implementation
//!
//! The default command. It checks the inputs, creates the vendor root,
//! resolves every private repository against the manifest and converges
//! each working copy to its pinned tag. A successful run ends by printing
//! `DONE`; any failure stops the run immediately with a non-zero exit.
//!
//! With `--dry-run` it only reports what each module would need (clone,
//! update or nothing) and leaves the filesystem untouched.

use anyhow::{Context, Result};
use clap::Args;

use vendor_private::orchestrator::{self, RunReport};
use vendor_private::output::{emoji, OutputConfig};
use vendor_private::sync::{RepositorySynchronizer, SyncEvent, SyncOutcome, SyncReporter};

use crate::cli::InputArgs;

/// Arguments for the sync command
#[derive(Args, Debug, Default)]
pub struct SyncArgs {
    /// Show what would be done without cloning, pulling or checking out
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Prints each sync event as a progress line on stdout.
struct ConsoleReporter<'a> {
    output: &'a OutputConfig,
}

impl SyncReporter for ConsoleReporter<'_> {
    fn report(&self, event: &SyncEvent<'_>) {
        println!("{}", self.output.format_event(event));
    }
}

/// Execute the sync command
pub fn execute(args: SyncArgs, inputs: &InputArgs, output: &OutputConfig) -> Result<()> {
    let synchronizer = RepositorySynchronizer::new(inputs.vendor_dir.clone());

    if args.dry_run {
        return dry_run(inputs, &synchronizer, output);
    }

    let reporter = ConsoleReporter { output };
    let report = orchestrator::execute(&inputs.inputs(), &synchronizer, &reporter)
        .map_err(|e| {
            let kind = e.kind();
            anyhow::Error::new(e).context(format!("Sync failed ({} error)", kind))
        })?;

    match report {
        RunReport::NoPrivateRepositories => println!("Private repositories list is empty"),
        RunReport::Synced(results) => {
            let unchanged = results
                .iter()
                .filter(|(_, outcome)| *outcome == SyncOutcome::Unchanged)
                .count();
            log::info!(
                "{} module(s) synced, {} already at their pinned version",
                results.len() - unchanged,
                unchanged
            );
        }
    }

    println!("DONE");
    Ok(())
}

fn dry_run(
    inputs: &InputArgs,
    synchronizer: &RepositorySynchronizer,
    output: &OutputConfig,
) -> Result<()> {
    println!(
        "{} DRY RUN MODE - No changes will be made",
        emoji(output, "🔎", "[DRY RUN]")
    );

    let planned = orchestrator::plan(&inputs.inputs(), synchronizer)
        .context("Failed to plan sync")?;

    let Some(planned) = planned else {
        println!("Private repositories list is empty");
        return Ok(());
    };

    for (module, action) in planned {
        println!(
            "  {} {} -> {} ({})",
            emoji(output, "📦", "-"),
            module.name,
            module.version,
            action
        );
    }
    Ok(())
}
