//! # Error Handling
//!
//! This module defines the single error type used across the `vendor-private`
//! library. It uses `thiserror` to describe every way a sync run can stop,
//! each variant carrying enough context (a path, a declaration line, a
//! repository name, or a git command and its stderr) to produce one
//! descriptive message for the user.
//!
//! ## Error Kinds
//!
//! Every variant belongs to one of three kinds, available through
//! [`Error::kind`]:
//!
//! - **Configuration**: missing or unreadable input files, malformed
//!   declaration lines, repository URLs that yield no name, and failure to
//!   create the vendor root.
//! - **Resolution**: a declared repository that the manifest never mentions,
//!   a manifest line without a version token, or an empty resolved set.
//! - **External tool**: `git` could not be started or exited non-zero.
//!
//! None of them is recovered locally. They propagate with `?` up to the
//! binary, which prints the message and exits non-zero.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for vendor-private operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required input file does not exist.
    #[error("{} file does not exist", path.display())]
    MissingInput { path: PathBuf },

    /// An input file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A private repository declaration line has fewer than two fields.
    #[error("Invalid private repo record - <{line}>, example: <repo url> <main branch>")]
    InvalidDeclaration { line: String },

    /// A repository URL whose last path segment is empty once `.git` is removed.
    #[error("Private repository url - <{url}>, is invalid")]
    InvalidRepositoryUrl { url: String },

    /// The vendor root directory could not be created.
    #[error("{} directory could not be created: {source}", path.display())]
    VendorRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A declared private repository has no matching manifest line.
    #[error("Private repository <{name}> does not exist in the manifest")]
    ModuleNotInManifest { name: String },

    /// The matched manifest line has no `v`-prefixed version token.
    #[error("Does not parse module version <{line}>")]
    UnparseableVersion { line: String },

    /// Repositories were declared but none of them resolved.
    #[error("Modules to update is empty")]
    NothingResolved,

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A git command ran and exited with a non-zero status.
    #[error("git {command} failed in {}: {stderr}{}", dir.display(), hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitCommand {
        command: String,
        dir: PathBuf,
        stderr: String,
        /// Optional hint for how to resolve the failure
        hint: Option<String>,
    },

    /// The git executable could not be started.
    #[error("Failed to run git {command}: {source}")]
    GitSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// The three error categories a run can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Resolution,
    ExternalTool,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Resolution => "resolution",
            ErrorKind::ExternalTool => "external tool",
        };
        f.write_str(label)
    }
}

impl Error {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingInput { .. }
            | Error::ReadInput { .. }
            | Error::InvalidDeclaration { .. }
            | Error::InvalidRepositoryUrl { .. }
            | Error::VendorRoot { .. } => ErrorKind::Configuration,
            Error::ModuleNotInManifest { .. }
            | Error::UnparseableVersion { .. }
            | Error::NothingResolved
            | Error::Regex(_) => ErrorKind::Resolution,
            Error::GitCommand { .. } | Error::GitSpawn { .. } => ErrorKind::ExternalTool,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
