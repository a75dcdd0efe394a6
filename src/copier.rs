//! Copies the entries selected by one job into the destination theme.

use log::debug;
use serde::Serialize;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::jobs::{CopyJob, JobKind, Selection};
use crate::naming::{is_template_name, transform_file_name};
use crate::request::GenerationRequest;
use crate::substitute::substitute_content;

/// How an entry reached the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Bytes copied unchanged.
    Copied,
    /// Content rewritten with the display name.
    Rendered,
    /// Directory created.
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            EntryKind::Copied => "Copying",
            EntryKind::Rendered => "Rendering",
            EntryKind::Directory => "Creating",
        };
        f.write_str(action)
    }
}

/// One entry written by a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedEntry {
    pub job: JobKind,
    pub source: PathBuf,
    pub target: PathBuf,
    pub kind: EntryKind,
}

/// Everything a job wrote.
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub job: JobKind,
    pub entries: Vec<CopiedEntry>,
}

/// A source entry and where it lands relative to the job's destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub source: PathBuf,
    pub relative: PathBuf,
    pub is_dir: bool,
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

fn relative_to(path: &Path, base: &Path) -> Result<PathBuf> {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .map_err(|e| Error::Io(io::Error::other(e)))
}

/// Lists the starter kit entries selected by `job`, sorted by path.
///
/// A selection whose source is absent yields nothing; the starter kit may
/// legitimately ship without assets, hooks or a manifest.
pub fn plan(job: &CopyJob, template_root: &Path) -> Result<Vec<PlannedEntry>> {
    let mut planned = Vec::new();

    match &job.selection {
        Selection::TopLevel(patterns) => {
            let walker = WalkDir::new(template_root)
                .min_depth(1)
                .max_depth(1)
                .sort_by_file_name();
            for entry in walker {
                let entry = entry?;
                let name = entry.file_name().to_string_lossy();
                if !job.include_hidden && is_hidden(&entry) {
                    continue;
                }
                if !patterns.is_match(name.as_ref()) {
                    continue;
                }
                planned.push(PlannedEntry {
                    source: entry.path().to_path_buf(),
                    relative: PathBuf::from(entry.file_name()),
                    is_dir: entry.file_type().is_dir(),
                });
            }
        }
        Selection::Tree(dir) => {
            let tree_root = template_root.join(dir);
            if !tree_root.is_dir() {
                debug!("No {} directory in starter kit", dir.display());
                return Ok(planned);
            }
            let include_hidden = job.include_hidden;
            let walker = WalkDir::new(&tree_root)
                .min_depth(1)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| include_hidden || !is_hidden(e));
            for entry in walker {
                let entry = entry?;
                planned.push(PlannedEntry {
                    source: entry.path().to_path_buf(),
                    relative: relative_to(entry.path(), &tree_root)?,
                    is_dir: entry.file_type().is_dir(),
                });
            }
        }
        Selection::File(name) => {
            let source = template_root.join(name);
            if source.is_file() {
                planned.push(PlannedEntry {
                    source,
                    relative: name.clone(),
                    is_dir: false,
                });
            } else {
                debug!("No {} in starter kit", name.display());
            }
        }
    }

    Ok(planned)
}

/// Destination-relative path for a planned entry, renamed if the job asks.
pub fn target_relative(job: &CopyJob, entry: &PlannedEntry, machine_name: &str) -> PathBuf {
    let relative = job.destination.join(&entry.relative);
    if !job.transform.rename || entry.is_dir {
        return relative;
    }
    match relative.file_name().and_then(|n| n.to_str()) {
        Some(file_name) => relative.with_file_name(transform_file_name(file_name, machine_name)),
        None => relative,
    }
}

async fn write_entry(
    job: &CopyJob,
    entry: &PlannedEntry,
    target: &Path,
    display_name: &str,
) -> Result<EntryKind> {
    if entry.is_dir {
        tokio::fs::create_dir_all(target)
            .await
            .map_err(|e| Error::copy_io(target, e))?;
        return Ok(EntryKind::Directory);
    }

    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::copy_io(parent, e))?;
    }

    if job.transform.replace_content {
        let content = tokio::fs::read_to_string(&entry.source)
            .await
            .map_err(|e| Error::copy_io(&entry.source, e))?;
        tokio::fs::write(target, substitute_content(&content, display_name))
            .await
            .map_err(|e| Error::copy_io(target, e))?;
        Ok(EntryKind::Rendered)
    } else {
        tokio::fs::copy(&entry.source, target)
            .await
            .map_err(|e| Error::copy_io(target, e))?;
        Ok(EntryKind::Copied)
    }
}

/// Runs one job to completion or to its first I/O error.
///
/// # Arguments
/// * `job` - The job to run
/// * `template_root` - Starter kit directory, only ever read
/// * `destination` - Root of the theme being generated
/// * `request` - Names substituted into file names and contents
///
/// # Errors
/// * `Error::Walk` if the starter kit cannot be listed
/// * `Error::CopyIo` naming the path of the first failed read or write
pub async fn run_job(
    job: CopyJob,
    template_root: PathBuf,
    destination: PathBuf,
    request: GenerationRequest,
) -> Result<JobReport> {
    debug!("Starting {} job", job.kind);
    let planned = plan(&job, &template_root)?;
    let mut entries = Vec::with_capacity(planned.len());

    for entry in &planned {
        let relative = target_relative(&job, entry, request.machine_name());
        let target = destination.join(&relative);

        if let Some(name) = entry.source.file_name().and_then(|n| n.to_str()) {
            if job.transform.rename && is_template_name(name) {
                debug!("Resolving template {} to {}", name, relative.display());
            }
        }

        let kind = write_entry(&job, entry, &target, request.display_name()).await?;
        debug!("{}: '{}'", kind, target.display());

        entries.push(CopiedEntry {
            job: job.kind,
            source: entry.source.clone(),
            target,
            kind,
        });
    }

    debug!("Finished {} job: {} entries", job.kind, entries.len());
    Ok(JobReport {
        job: job.kind,
        entries,
    })
}
