//! # Working Copy Collaborators
//!
//! The synchronizer never calls `git` or touches the filesystem directly.
//! It goes through two traits so the state machine can be exercised in tests
//! without real repositories:
//!
//! - **`GitOperations`**: clone, checkout, pull and the exact-tag query.
//! - **`WorkspaceOperations`**: whether a working copy directory exists, and
//!   creating the vendor root.
//!
//! `DefaultGitOperations` and `DefaultWorkspaceOperations` wrap the system
//! `git` command and `std::fs`.

use std::path::Path;

use crate::error::Result;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations {
    /// Clones `url` into `parent_dir`; git picks the directory name.
    fn clone_into(&self, url: &str, parent_dir: &Path) -> Result<()>;

    /// Checks out a branch or `tags/<version>` in an existing working copy.
    fn checkout(&self, repo_dir: &Path, rev: &str) -> Result<()>;

    /// Pulls the current branch and returns git's stdout.
    fn pull(&self, repo_dir: &Path) -> Result<String>;

    /// Returns the tag HEAD is exactly on, if any.
    fn describe_exact_tag(&self, repo_dir: &Path) -> Result<Option<String>>;
}

/// Filesystem checks the synchronizer depends on.
pub trait WorkspaceOperations {
    /// Whether a working copy directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Creates `path` and its parents if missing.
    fn ensure_dir(&self, path: &Path) -> Result<()>;
}

/// Runs the system `git` command.
pub struct DefaultGitOperations;

impl GitOperations for DefaultGitOperations {
    fn clone_into(&self, url: &str, parent_dir: &Path) -> Result<()> {
        crate::git::clone(url, parent_dir)
    }

    fn checkout(&self, repo_dir: &Path, rev: &str) -> Result<()> {
        crate::git::checkout(repo_dir, rev)
    }

    fn pull(&self, repo_dir: &Path) -> Result<String> {
        crate::git::pull(repo_dir)
    }

    fn describe_exact_tag(&self, repo_dir: &Path) -> Result<Option<String>> {
        crate::git::describe_exact_tag(repo_dir)
    }
}

/// Uses the host filesystem.
pub struct DefaultWorkspaceOperations;

impl WorkspaceOperations for DefaultWorkspaceOperations {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        crate::workspace::ensure_vendor_root(path)
    }
}
