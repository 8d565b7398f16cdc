//! Pre-flight checks run before any resolution: the two input files must
//! exist, and the vendor root is created if it is missing.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Fails with [`Error::MissingInput`] for the first path that does not exist.
pub fn check_required_files(paths: &[&Path]) -> Result<()> {
    match paths.iter().find(|path| !path.exists()) {
        Some(missing) => Err(Error::MissingInput {
            path: missing.to_path_buf(),
        }),
        None => Ok(()),
    }
}

/// Creates the vendor root directory if it does not exist yet.
pub fn ensure_vendor_root(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    debug!("Creating vendor root {}", path.display());
    fs::create_dir_all(path).map_err(|source| Error::VendorRoot {
        path: path.to_path_buf(),
        source,
    })
}
