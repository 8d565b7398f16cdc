//! Shared test utilities for CLI end-to-end tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new()
//!     .with_manifest(manifests::PRIVMOD_V2)
//!     .with_private("https://example.com/org/privmod.git main\n");
//! fixture.command().assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::manifests;
    pub use super::TestFixture;
    #[allow(unused_imports)]
    pub use super::{git_in, OriginRepo};
}

/// Manifest contents used across tests.
#[allow(dead_code)]
pub mod manifests {
    /// Pins `privmod` at v2.0.0 next to a public dependency.
    pub const PRIVMOD_V2: &str = "module example.com/org/app

go 1.21

require (
\tgithub.com/pkg/errors v0.9.1
\texample.com/org/privmod v2.0.0
)
";

    /// Builds a manifest pinning `privmod` to `version`.
    pub fn privmod(version: &str) -> String {
        format!(
            "module example.com/org/app\n\ngo 1.21\n\nrequire (\n\texample.com/org/privmod {} // indirect\n)\n",
            version
        )
    }
}

/// A temporary project directory holding `go.mod` and `go.private`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `go.mod` with the given content.
    pub fn with_manifest(self, content: &str) -> Self {
        self.write_manifest(content);
        self
    }

    /// Overwrite `go.mod` in place.
    pub fn write_manifest(&self, content: &str) {
        self.temp_dir
            .child("go.mod")
            .write_str(content)
            .expect("Failed to write go.mod");
    }

    /// Write `go.private` with the given content.
    pub fn with_private(self, content: &str) -> Self {
        self.temp_dir
            .child("go.private")
            .write_str(content)
            .expect("Failed to write go.private");
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn vendor_path(&self) -> PathBuf {
        self.path().join("vendor-private")
    }

    /// A command for the binary, run from the fixture directory with colours off.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vendor-private");
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("VENDOR_PRIVATE_MANIFEST")
            .env_remove("VENDOR_PRIVATE_DECLARATIONS")
            .env_remove("VENDOR_PRIVATE_DIR");
        cmd
    }
}

/// Runs `git <args>` in `dir`, panicking on failure, and returns stdout.
#[allow(dead_code)]
pub fn git_in(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
            "-c",
            "tag.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A local repository standing in for a private remote.
#[allow(dead_code)]
pub struct OriginRepo {
    _temp_dir: assert_fs::TempDir,
    path: PathBuf,
}

#[allow(dead_code)]
impl OriginRepo {
    /// Creates `<tmp>/<name>` on branch `main` with one tagged commit per tag.
    pub fn with_tags(name: &str, tags: &[&str]) -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join(name);
        std::fs::create_dir_all(&path).expect("Failed to create origin directory");

        git_in(&path, &["init", "-q"]);
        git_in(&path, &["checkout", "-q", "-b", "main"]);

        let origin = Self {
            _temp_dir: temp_dir,
            path,
        };
        for tag in tags {
            origin.commit_and_tag(tag);
        }
        origin
    }

    /// Adds a commit on `main` and tags it.
    pub fn commit_and_tag(&self, tag: &str) {
        std::fs::write(self.path.join("VERSION"), tag).expect("Failed to write VERSION");
        git_in(&self.path, &["add", "VERSION"]);
        git_in(&self.path, &["commit", "-q", "-m", tag]);
        git_in(&self.path, &["tag", tag]);
    }

    /// The clone URL; a plain local path.
    pub fn url(&self) -> String {
        self.path.display().to_string()
    }

    /// A `go.private` line for this origin tracking `main`.
    pub fn declaration(&self) -> String {
        format!("{} main\n", self.url())
    }
}
