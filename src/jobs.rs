//! The fixed set of copy jobs making up a sub-theme.
//! Each job selects part of the starter kit and says how to write it out.
//! Jobs write disjoint parts of the destination and can run in any order.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fmt;
use std::path::PathBuf;

use crate::error::Result;

/// Top-level files that receive renaming and content substitution.
pub const CORE_FILES_PATTERN: &str = "*.{yml,yml.tpl,theme}";

/// Top-level hidden entries.
pub const DOTFILES_PATTERN: &str = ".*";

/// Directory holding front-end sources.
pub const ASSETS_DIR: &str = "assets";

/// Directory holding preprocess hook includes.
pub const HOOKS_DIR: &str = "hooks";

/// The npm manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// Which entries of the starter kit a job reads.
#[derive(Debug, Clone)]
pub enum Selection {
    /// Direct children of the starter kit whose file name matches.
    TopLevel(GlobSet),
    /// A subdirectory and everything below it.
    Tree(PathBuf),
    /// A single named file.
    File(PathBuf),
}

/// What happens to a selected file on its way out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transform {
    /// Rewrite the file name with the machine name.
    pub rename: bool,
    /// Replace the content placeholder with the display name.
    pub replace_content: bool,
}

impl Transform {
    pub const VERBATIM: Transform = Transform {
        rename: false,
        replace_content: false,
    };

    pub const RENDER: Transform = Transform {
        rename: true,
        replace_content: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobKind {
    CoreFiles,
    Assets,
    Dotfiles,
    Hooks,
    Manifest,
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobKind::CoreFiles => "core files",
            JobKind::Assets => "assets",
            JobKind::Dotfiles => "dotfiles",
            JobKind::Hooks => "hooks",
            JobKind::Manifest => "manifest",
        };
        f.write_str(name)
    }
}

/// One category of files copied from the starter kit.
#[derive(Debug, Clone)]
pub struct CopyJob {
    pub kind: JobKind,
    pub selection: Selection,
    /// Subdirectory of the destination the job writes into.
    pub destination: PathBuf,
    pub transform: Transform,
    /// Whether entries with a dot-prefixed path component are included.
    pub include_hidden: bool,
}

fn glob_set(pattern: &str) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    builder.add(Glob::new(pattern)?);
    Ok(builder.build()?)
}

impl CopyJob {
    /// Returns the five jobs that together produce a sub-theme.
    ///
    /// # Errors
    /// * `Error::Pattern` if a built-in pattern fails to compile
    pub fn all() -> Result<Vec<CopyJob>> {
        Ok(vec![
            CopyJob {
                kind: JobKind::CoreFiles,
                selection: Selection::TopLevel(glob_set(CORE_FILES_PATTERN)?),
                destination: PathBuf::new(),
                transform: Transform::RENDER,
                // Hidden files belong to the dotfiles job.
                include_hidden: false,
            },
            CopyJob {
                kind: JobKind::Assets,
                selection: Selection::Tree(PathBuf::from(ASSETS_DIR)),
                destination: PathBuf::from(ASSETS_DIR),
                transform: Transform::VERBATIM,
                include_hidden: true,
            },
            CopyJob {
                kind: JobKind::Dotfiles,
                selection: Selection::TopLevel(glob_set(DOTFILES_PATTERN)?),
                destination: PathBuf::new(),
                transform: Transform::VERBATIM,
                include_hidden: true,
            },
            // Hidden entries under hooks/ have never been part of a generated theme.
            CopyJob {
                kind: JobKind::Hooks,
                selection: Selection::Tree(PathBuf::from(HOOKS_DIR)),
                destination: PathBuf::from(HOOKS_DIR),
                transform: Transform::VERBATIM,
                include_hidden: false,
            },
            CopyJob {
                kind: JobKind::Manifest,
                selection: Selection::File(PathBuf::from(MANIFEST_FILE)),
                destination: PathBuf::new(),
                transform: Transform::VERBATIM,
                include_hidden: false,
            },
        ])
    }
}
