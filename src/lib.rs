//! # Vendor Private Library
//!
//! Keeps privately mirrored Go modules checked out at exactly the versions a
//! project's `go.mod` pins them to. It is meant as a precondition step in
//! build pipelines: any inconsistency stops the run with one descriptive
//! error rather than continuing with a partially synced dependency set.
//!
//! ## Quick Example
//!
//! ```
//! use vendor_private::manifest;
//! use vendor_private::registry;
//! use vendor_private::resolver::VersionResolver;
//!
//! let go_mod = "module example.com/org/app\n\nrequire (\n\texample.com/org/privmod v2.0.0\n)\n";
//! let go_private = "https://example.com/org/privmod.git main\n";
//!
//! let declarations = manifest::parse(go_mod);
//! let repositories = registry::parse(go_private).unwrap();
//!
//! let resolver = VersionResolver::new().unwrap();
//! let modules = resolver.resolve(&repositories, &declarations).unwrap();
//! assert_eq!(modules[0].name, "privmod");
//! assert_eq!(modules[0].version, "v2.0.0");
//! ```
//!
//! ## Core Concepts
//!
//! - **Manifest (`manifest`)**: the lines of the `require ( ... )` block.
//! - **Declarations (`registry`)**: `<git-url> <main-branch>` pairs from
//!   `go.private`.
//! - **Resolution (`resolver`)**: joins each declaration to its manifest line
//!   and extracts the pinned version.
//! - **Synchronization (`sync`)**: clones, updates and checks out each working
//!   copy under the vendor root, skipping ones already on the right tag.
//! - **Collaborators (`repository`, `git`, `workspace`)**: the system `git`
//!   command and filesystem, behind traits for testing.
//!
//! `orchestrator` runs these in order for the CLI.

pub mod defaults;
pub mod error;
pub mod git;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod registry;
pub mod repository;
pub mod resolver;
pub mod sync;
pub mod workspace;

#[cfg(test)]
mod resolver_proptest;
