//! Project root discovery.
//! The project root is the Drupal docroot: the directory holding `themes/`.

use log::debug;
use std::path::{Path, PathBuf};

use crate::constants::{DOCROOT_CANDIDATES, PROJECT_ROOT_ENV};
use crate::error::{Error, Result};

/// Finds the project root for the current process.
///
/// Uses `DECK_PROJECT_ROOT` when set and non-empty, otherwise searches
/// upwards from the current directory.
pub fn find_project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;

    if let Some(value) = std::env::var_os(PROJECT_ROOT_ENV).filter(|v| !v.is_empty()) {
        let root = cwd.join(value);
        debug!("Using project root from {}: {}", PROJECT_ROOT_ENV, root.display());
        return Ok(root);
    }

    find_project_root_from(&cwd)
}

/// Searches `start` and its ancestors for a directory containing `themes/`,
/// either directly or inside a `docroot/` or `web/` child.
///
/// # Errors
/// * `Error::ProjectRootNotFound` if no ancestor qualifies
pub fn find_project_root_from<P: AsRef<Path>>(start: P) -> Result<PathBuf> {
    let start = start.as_ref();

    for dir in start.ancestors() {
        if is_docroot(dir) {
            debug!("Found project root at {}", dir.display());
            return Ok(dir.to_path_buf());
        }
        for candidate in DOCROOT_CANDIDATES {
            let nested = dir.join(candidate);
            if is_docroot(&nested) {
                debug!("Found project root at {}", nested.display());
                return Ok(nested);
            }
        }
    }

    Err(Error::ProjectRootNotFound {
        start: start.to_path_buf(),
    })
}

fn is_docroot(dir: &Path) -> bool {
    dir.join("themes").is_dir()
}
