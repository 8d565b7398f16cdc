//! Default values for vendor-private inputs.
//!
//! Every default is a path relative to the current directory, so the tool
//! behaves the same when run from a project root with no flags.

use std::path::PathBuf;

/// Default dependency manifest.
pub const MANIFEST_FILE: &str = "go.mod";

/// Default private repository declaration file.
pub const PRIVATE_FILE: &str = "go.private";

/// Default directory holding the private working copies.
pub const VENDOR_DIR: &str = "vendor-private";

/// Returns the default manifest path.
pub fn manifest_path() -> PathBuf {
    PathBuf::from(MANIFEST_FILE)
}

/// Returns the default declaration file path.
pub fn private_path() -> PathBuf {
    PathBuf::from(PRIVATE_FILE)
}

/// Returns the default vendor root.
pub fn vendor_root() -> PathBuf {
    PathBuf::from(VENDOR_DIR)
}
