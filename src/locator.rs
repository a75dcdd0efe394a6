//! Resolves where the starter kit lives and where the new theme goes.

use log::debug;
use std::path::{Path, PathBuf};

use crate::constants::{CUSTOM_THEMES_SEGMENTS, TEMPLATE_SEGMENTS};
use crate::error::{Error, Result};

/// Returns the starter kit directory under `project_root`.
///
/// This check runs before any copy is scheduled, so a missing starter kit
/// never leaves partial output behind.
///
/// # Errors
/// * `Error::TemplateNotFound` if the path is absent or not a directory
pub fn locate<P: AsRef<Path>>(project_root: P) -> Result<PathBuf> {
    let template_root = template_path(project_root);
    if !template_root.is_dir() {
        return Err(Error::TemplateNotFound {
            path: template_root,
        });
    }
    debug!("Using starter kit at {}", template_root.display());
    Ok(template_root)
}

/// Path of the starter kit, whether or not it exists.
pub fn template_path<P: AsRef<Path>>(project_root: P) -> PathBuf {
    TEMPLATE_SEGMENTS
        .iter()
        .fold(project_root.as_ref().to_path_buf(), |path, segment| {
            path.join(segment)
        })
}

/// Directory the theme named `machine_name` is generated into.
pub fn destination<P: AsRef<Path>>(project_root: P, machine_name: &str) -> PathBuf {
    CUSTOM_THEMES_SEGMENTS
        .iter()
        .fold(project_root.as_ref().to_path_buf(), |path, segment| {
            path.join(segment)
        })
        .join(machine_name)
}
