//! # Repository Synchronization
//!
//! Drives each resolved module's working copy at `<vendor-root>/<name>` to
//! the version pinned in the manifest.
//!
//! ## Transitions
//!
//! For every module, in order:
//!
//! 1.  **Absent**: clone the repository into the vendor root, then check out
//!     `tags/<version>`.
//! 2.  **Present on the target tag**: nothing to do. No branch checkout and
//!     no pull happen.
//! 3.  **Present on any other commit**: check out the main branch (a pull
//!     while detached at a tag has nothing to fast-forward), pull, then check
//!     out `tags/<version>`.
//!
//! A failed exact-tag query counts as "not on a tag" and falls through to
//! case 3. Every other git failure stops the whole run at once; modules
//! after the failing one are not touched.

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;
use crate::repository::{
    DefaultGitOperations, DefaultWorkspaceOperations, GitOperations, WorkspaceOperations,
};
use crate::resolver::ResolvedPrivateModule;

/// What a module's working copy needs, decided before any mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// No working copy yet.
    Clone,
    /// Working copy exists but is not on the target tag. `current` is the
    /// tag it sits on, if any.
    Update { current: Option<String> },
    /// Working copy is already exactly on the target tag.
    Unchanged,
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncAction::Clone => f.write_str("clone"),
            SyncAction::Update { current: Some(tag) } => write!(f, "update from {}", tag),
            SyncAction::Update { current: None } => f.write_str("update"),
            SyncAction::Unchanged => f.write_str("unchanged"),
        }
    }
}

/// How a module ended up on its target version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Cloned,
    Updated,
    Unchanged,
}

/// Progress notifications emitted while synchronizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent<'a> {
    Cloned {
        name: &'a str,
        path: &'a Path,
    },
    AlreadyAtVersion {
        name: &'a str,
        version: &'a str,
    },
    BranchCheckedOut {
        name: &'a str,
        branch: &'a str,
    },
    Pulled {
        name: &'a str,
        path: &'a Path,
        output: &'a str,
    },
    VersionCheckedOut {
        name: &'a str,
        version: &'a str,
    },
}

impl fmt::Display for SyncEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncEvent::Cloned { name, path } => {
                write!(f, "Module <{}> cloned to <{}>", name, path.display())
            }
            SyncEvent::AlreadyAtVersion { name, version } => write!(
                f,
                "Module <{}> already has been set to version <{}>",
                name, version
            ),
            SyncEvent::BranchCheckedOut { name, branch } => write!(
                f,
                "Module <{}> checkout to branch <{}> for pull updates",
                name, branch
            ),
            SyncEvent::Pulled { name, path, output } => {
                write!(
                    f,
                    "Module <{}> pulled for update to <{}>",
                    name,
                    path.display()
                )?;
                let output = output.trim_end();
                if !output.is_empty() {
                    write!(f, "\n{}", output)?;
                }
                Ok(())
            }
            SyncEvent::VersionCheckedOut { name, version } => {
                write!(f, "Module <{}> checkout to version <{}>", name, version)
            }
        }
    }
}

/// Receives progress notifications from the synchronizer.
pub trait SyncReporter {
    fn report(&self, event: &SyncEvent<'_>);
}

/// Discards every notification.
pub struct NoOpReporter;

impl SyncReporter for NoOpReporter {
    fn report(&self, _event: &SyncEvent<'_>) {}
}

/// Converges working copies under a vendor root to their resolved versions.
pub struct RepositorySynchronizer {
    vendor_root: PathBuf,
    git_ops: Box<dyn GitOperations>,
    workspace_ops: Box<dyn WorkspaceOperations>,
}

impl RepositorySynchronizer {
    /// Creates a synchronizer backed by the system `git` and filesystem.
    pub fn new(vendor_root: PathBuf) -> Self {
        Self {
            vendor_root,
            git_ops: Box::new(DefaultGitOperations),
            workspace_ops: Box::new(DefaultWorkspaceOperations),
        }
    }

    /// Creates a synchronizer with custom collaborators.
    pub fn with_operations(
        vendor_root: PathBuf,
        git_ops: Box<dyn GitOperations>,
        workspace_ops: Box<dyn WorkspaceOperations>,
    ) -> Self {
        Self {
            vendor_root,
            git_ops,
            workspace_ops,
        }
    }

    pub fn vendor_root(&self) -> &Path {
        &self.vendor_root
    }

    /// Location of a module's working copy.
    pub fn module_path(&self, module: &ResolvedPrivateModule) -> PathBuf {
        self.vendor_root.join(&module.name)
    }

    /// Creates the vendor root if it is missing.
    pub fn prepare(&self) -> Result<()> {
        self.workspace_ops.ensure_dir(&self.vendor_root)
    }

    /// Decides what `module` needs without changing anything.
    ///
    /// The exact-tag query is the only git call this makes, and it only runs
    /// when the working copy exists.
    pub fn plan(&self, module: &ResolvedPrivateModule) -> Result<SyncAction> {
        let path = self.module_path(module);
        if !self.workspace_ops.exists(&path) {
            return Ok(SyncAction::Clone);
        }

        let current = self.git_ops.describe_exact_tag(&path)?;
        if current.as_deref() == Some(module.version.as_str()) {
            Ok(SyncAction::Unchanged)
        } else {
            Ok(SyncAction::Update { current })
        }
    }

    /// Brings a single module to its target version.
    pub fn sync_module(
        &self,
        module: &ResolvedPrivateModule,
        reporter: &dyn SyncReporter,
    ) -> Result<SyncOutcome> {
        let path = self.module_path(module);

        let outcome = match self.plan(module)? {
            SyncAction::Unchanged => {
                reporter.report(&SyncEvent::AlreadyAtVersion {
                    name: &module.name,
                    version: &module.version,
                });
                return Ok(SyncOutcome::Unchanged);
            }
            SyncAction::Clone => {
                self.git_ops.clone_into(&module.url, &self.vendor_root)?;
                reporter.report(&SyncEvent::Cloned {
                    name: &module.name,
                    path: &path,
                });
                SyncOutcome::Cloned
            }
            SyncAction::Update { current } => {
                debug!(
                    "Module {} is on {:?}, expected {}",
                    module.name, current, module.version
                );
                self.git_ops.checkout(&path, &module.main_branch)?;
                reporter.report(&SyncEvent::BranchCheckedOut {
                    name: &module.name,
                    branch: &module.main_branch,
                });

                let output = self.git_ops.pull(&path)?;
                reporter.report(&SyncEvent::Pulled {
                    name: &module.name,
                    path: &path,
                    output: &output,
                });
                SyncOutcome::Updated
            }
        };

        self.git_ops
            .checkout(&path, &format!("tags/{}", module.version))?;
        reporter.report(&SyncEvent::VersionCheckedOut {
            name: &module.name,
            version: &module.version,
        });

        Ok(outcome)
    }

    /// Synchronizes every module in order, stopping at the first failure.
    pub fn sync_all(
        &self,
        modules: &[ResolvedPrivateModule],
        reporter: &dyn SyncReporter,
    ) -> Result<Vec<SyncOutcome>> {
        modules
            .iter()
            .map(|module| self.sync_module(module, reporter))
            .collect()
    }
}
