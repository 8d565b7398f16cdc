//! # Run Orchestration
//!
//! Ties the readers, resolver and synchronizer into one run:
//!
//! 1.  **Pre-flight**: both input files must exist, and the vendor root is
//!     created if needed.
//! 2.  **Declarations**: read the private repository file. If it declares
//!     nothing, the run ends successfully here.
//! 3.  **Resolution**: read the manifest and resolve every declaration. Any
//!     failure here stops the run before git is invoked.
//! 4.  **Synchronization**: converge each working copy in declaration order.

use std::path::PathBuf;

use log::info;

use crate::error::Result;
use crate::manifest;
use crate::registry;
use crate::resolver::{ResolvedPrivateModule, VersionResolver};
use crate::sync::{RepositorySynchronizer, SyncAction, SyncOutcome, SyncReporter};
use crate::workspace;

/// Locations of the two input files.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub manifest: PathBuf,
    pub private: PathBuf,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            manifest: crate::defaults::manifest_path(),
            private: crate::defaults::private_path(),
        }
    }
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    /// The declaration file listed no repositories.
    NoPrivateRepositories,
    /// Every resolved module, paired with how it reached its version.
    Synced(Vec<(ResolvedPrivateModule, SyncOutcome)>),
}

/// Checks the inputs exist, then reads and resolves them.
///
/// Returns `None` when no private repositories are declared.
pub fn resolve(inputs: &Inputs) -> Result<Option<Vec<ResolvedPrivateModule>>> {
    workspace::check_required_files(&[&inputs.manifest, &inputs.private])?;
    read_and_resolve(inputs)
}

fn read_and_resolve(inputs: &Inputs) -> Result<Option<Vec<ResolvedPrivateModule>>> {
    let repositories = registry::from_file(&inputs.private)?;
    if repositories.is_empty() {
        info!("No private repositories declared in {}", inputs.private.display());
        return Ok(None);
    }

    let declarations = manifest::from_file(&inputs.manifest)?;
    let resolver = VersionResolver::new()?;
    resolver.resolve(&repositories, &declarations).map(Some)
}

/// Runs the whole pipeline.
pub fn execute(
    inputs: &Inputs,
    synchronizer: &RepositorySynchronizer,
    reporter: &dyn SyncReporter,
) -> Result<RunReport> {
    workspace::check_required_files(&[&inputs.manifest, &inputs.private])?;
    synchronizer.prepare()?;

    let Some(modules) = read_and_resolve(inputs)? else {
        return Ok(RunReport::NoPrivateRepositories);
    };

    let outcomes = synchronizer.sync_all(&modules, reporter)?;
    Ok(RunReport::Synced(modules.into_iter().zip(outcomes).collect()))
}

/// Resolves the inputs and reports what each module would need, without
/// creating the vendor root or mutating any working copy.
pub fn plan(
    inputs: &Inputs,
    synchronizer: &RepositorySynchronizer,
) -> Result<Option<Vec<(ResolvedPrivateModule, SyncAction)>>> {
    let Some(modules) = resolve(inputs)? else {
        return Ok(None);
    };

    modules
        .into_iter()
        .map(|module| {
            let action = synchronizer.plan(&module)?;
            Ok((module, action))
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}
