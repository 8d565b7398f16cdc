//! Private repository declarations.
//!
//! The declaration file (`go.private` by default) lists one repository per
//! line as `<git-url> <main-branch>`. Blank lines are ignored and any extra
//! fields after the branch are ignored too.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

/// A repository mirrored privately, with the branch it tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrivateRepositoryDeclaration {
    pub url: String,
    pub main_branch: String,
}

/// Parses a single non-blank declaration line.
pub fn parse_line(line: &str) -> Result<PrivateRepositoryDeclaration> {
    let line = line.trim();
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(url), Some(main_branch)) => Ok(PrivateRepositoryDeclaration {
            url: url.to_string(),
            main_branch: main_branch.to_string(),
        }),
        _ => Err(Error::InvalidDeclaration {
            line: line.to_string(),
        }),
    }
}

/// Parses the whole declaration file, preserving declaration order.
///
/// Fails on the first malformed line.
pub fn parse(content: &str) -> Result<Vec<PrivateRepositoryDeclaration>> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

/// Reads and parses the declaration file at `path`.
pub fn from_file(path: &Path) -> Result<Vec<PrivateRepositoryDeclaration>> {
    let content = fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}
