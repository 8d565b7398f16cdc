//! # Manifest Reading
//!
//! Extracts the dependency lines from the first `require ( ... )` block of a
//! Go-style manifest. Nothing beyond locating that block is parsed: each line
//! between the markers is kept verbatim as a [`DependencyDeclaration`] and
//! interpreted later by the resolver.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Line that opens the dependency block.
pub const REQUIRE_START: &str = "require (";

/// Line that closes the dependency block.
pub const REQUIRE_END: &str = ")";

/// One line from the manifest's dependency block, e.g.
/// `example.com/org/privmod v2.0.0 // indirect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDeclaration {
    raw: String,
}

impl DependencyDeclaration {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The line exactly as it appeared in the manifest.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The line with leading and trailing whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.raw.trim()
    }
}

/// Returns the lines strictly between `require (` and `)`, in file order.
///
/// Only the first block is read. If the start marker never appears the
/// result is empty; if the end marker is missing, every line after the
/// start marker is returned.
pub fn parse(content: &str) -> Vec<DependencyDeclaration> {
    content
        .lines()
        .skip_while(|line| *line != REQUIRE_START)
        .skip(1)
        .take_while(|line| *line != REQUIRE_END)
        .map(DependencyDeclaration::new)
        .collect()
}

/// Reads and parses the manifest at `path`.
pub fn from_file(path: &Path) -> Result<Vec<DependencyDeclaration>> {
    let content = fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const GO_MOD: &str = "module example.com/org/app

go 1.21

require (
\texample.com/org/privmod v2.0.0
\tgithub.com/pkg/errors v0.9.1 // indirect
)

require (
\tgithub.com/other/ignored v1.0.0
)
";

    fn raws(decls: &[DependencyDeclaration]) -> Vec<&str> {
        decls.iter().map(|d| d.raw()).collect()
    }

    #[test]
    fn test_parse_returns_lines_between_markers() {
        let decls = parse(GO_MOD);
        assert_eq!(
            raws(&decls),
            vec![
                "\texample.com/org/privmod v2.0.0",
                "\tgithub.com/pkg/errors v0.9.1 // indirect",
            ]
        );
    }

    #[test]
    fn test_parse_keeps_lines_verbatim() {
        let decls = parse(GO_MOD);
        assert_eq!(decls[0].raw(), "\texample.com/org/privmod v2.0.0");
        assert_eq!(decls[0].trimmed(), "example.com/org/privmod v2.0.0");
    }

    #[test]
    fn test_parse_without_start_marker_is_empty() {
        let content = "module example.com/org/app\n\nrequire example.com/x v1.0.0\n";
        assert!(parse(content).is_empty());
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_parse_empty_block() {
        assert!(parse("require (\n)\n").is_empty());
    }

    #[test]
    fn test_parse_missing_end_marker_reads_to_end() {
        let content = "require (\n\ta v1.0.0\n\tb v2.0.0\n";
        assert_eq!(raws(&parse(content)), vec!["\ta v1.0.0", "\tb v2.0.0"]);
    }

    #[test]
    fn test_parse_keeps_blank_lines_inside_block() {
        let content = "require (\n\ta v1.0.0\n\n\tb v2.0.0\n)\n";
        assert_eq!(raws(&parse(content)), vec!["\ta v1.0.0", "", "\tb v2.0.0"]);
    }

    #[test]
    fn test_parse_markers_must_match_exactly() {
        // An indented marker is not a marker
        let content = "  require (\n\ta v1.0.0\n)\n";
        assert!(parse(content).is_empty());
    }

    #[test]
    fn test_from_file_reads_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("go.mod");
        std::fs::write(&path, GO_MOD).unwrap();

        let decls = from_file(&path).unwrap();
        assert_eq!(decls.len(), 2);
    }

    #[test]
    fn test_from_file_missing_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("go.mod");

        let err = from_file(&path).unwrap_err();
        assert!(matches!(err, Error::ReadInput { .. }));
    }
}
