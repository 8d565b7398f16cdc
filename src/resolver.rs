//! # Version Resolution
//!
//! Joins each private repository declaration to the manifest line that
//! mentions it and extracts the version that line pins.
//!
//! ## Matching
//!
//! A repository's name is the last `/`-separated segment of its URL with any
//! `.git` suffix removed. The first manifest line (in file order) containing
//! that name as a substring is the match. There is no further
//! disambiguation, so `foo` will match a `foobar` line if it comes first.
//!
//! ## Version Extraction
//!
//! The version is the last run of non-whitespace characters that starts with
//! a `v` at a word boundary. For `github.com/x/foo v1.2.3 // indirect` that
//! is `v1.2.3`.

use log::{debug, warn};
use regex::Regex;
use semver::Version;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::manifest::DependencyDeclaration;
use crate::registry::PrivateRepositoryDeclaration;

/// Pattern for a version token inside a manifest line.
pub const VERSION_PATTERN: &str = r"\bv\S*";

/// A private repository joined with the version the manifest pins it to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPrivateModule {
    pub url: String,
    pub name: String,
    pub version: String,
    pub main_branch: String,
}

/// Derives the working-copy name from a repository URL.
///
/// Returns `None` when the trailing segment is empty, e.g. for `""`,
/// `https://host/org/` or `https://host/org/.git`.
pub fn repository_name(url: &str) -> Option<&str> {
    let segment = url.rsplit('/').next().unwrap_or(url);
    let name = segment.strip_suffix(".git").unwrap_or(segment);
    (!name.is_empty()).then_some(name)
}

/// Returns the first declaration whose text contains `name`.
pub fn find_declaration<'a>(
    name: &str,
    declarations: &'a [DependencyDeclaration],
) -> Option<&'a DependencyDeclaration> {
    declarations.iter().find(|decl| decl.trimmed().contains(name))
}

/// Extracts version tokens from manifest lines and resolves declarations.
pub struct VersionResolver {
    pattern: Regex,
}

impl VersionResolver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(VERSION_PATTERN)?,
        })
    }

    /// Returns the last `v`-prefixed token in `line`.
    pub fn extract_version(&self, line: &str) -> Result<String> {
        self.pattern
            .find_iter(line)
            .last()
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| Error::UnparseableVersion {
                line: line.to_string(),
            })
    }

    /// Resolves one repository against the manifest.
    pub fn resolve_one(
        &self,
        repository: &PrivateRepositoryDeclaration,
        declarations: &[DependencyDeclaration],
    ) -> Result<ResolvedPrivateModule> {
        let name = repository_name(&repository.url).ok_or_else(|| Error::InvalidRepositoryUrl {
            url: repository.url.clone(),
        })?;

        let declaration =
            find_declaration(name, declarations).ok_or_else(|| Error::ModuleNotInManifest {
                name: name.to_string(),
            })?;

        let version = self.extract_version(declaration.trimmed())?;
        debug!(
            "Resolved {} to {} from manifest line <{}>",
            name,
            version,
            declaration.trimmed()
        );
        if parse_semver_tag(&version).is_none() {
            warn!(
                "Version <{}> of module <{}> is not a semantic version",
                version, name
            );
        }

        Ok(ResolvedPrivateModule {
            url: repository.url.clone(),
            name: name.to_string(),
            version,
            main_branch: repository.main_branch.clone(),
        })
    }

    /// Resolves every repository in declaration order, failing on the first
    /// one that cannot be resolved.
    pub fn resolve(
        &self,
        repositories: &[PrivateRepositoryDeclaration],
        declarations: &[DependencyDeclaration],
    ) -> Result<Vec<ResolvedPrivateModule>> {
        let modules = repositories
            .iter()
            .map(|repository| self.resolve_one(repository, declarations))
            .collect::<Result<Vec<_>>>()?;

        if modules.is_empty() {
            return Err(Error::NothingResolved);
        }
        Ok(modules)
    }
}

/// Parses a `v`-prefixed tag into a semantic version.
pub fn parse_semver_tag(tag: &str) -> Option<Version> {
    let version_str = tag.strip_prefix('v').unwrap_or(tag);
    Version::parse(version_str).ok()
}
