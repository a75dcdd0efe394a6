//! Generation entry point.
//! Checks the starter kit, runs every copy job concurrently and reports once
//! all of them have finished.

use log::{debug, info};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;

use crate::copier::{run_job, CopiedEntry, EntryKind, JobReport};
use crate::error::{Error, Result};
use crate::jobs::CopyJob;
use crate::locator::{destination, locate};
use crate::request::GenerationRequest;

/// Summary of a finished generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub theme: String,
    pub machine_name: String,
    pub destination: PathBuf,
    /// Every entry written, ordered by target path.
    pub entries: Vec<CopiedEntry>,
}

impl GenerationReport {
    fn new(request: &GenerationRequest, destination: PathBuf, jobs: Vec<JobReport>) -> Self {
        let mut entries: Vec<CopiedEntry> =
            jobs.into_iter().flat_map(|report| report.entries).collect();
        entries.sort_by(|a, b| a.target.cmp(&b.target));
        Self {
            theme: request.display_name().to_string(),
            machine_name: request.machine_name().to_string(),
            destination,
            entries,
        }
    }

    /// Number of files written, directories excluded.
    pub fn file_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.kind != EntryKind::Directory)
            .count()
    }
}

/// Waits for every job and keeps the first error observed.
///
/// Jobs are not cancelled when a sibling fails; output they already wrote
/// stays in place.
async fn drain(mut set: JoinSet<Result<JobReport>>) -> Result<Vec<JobReport>> {
    let mut reports = Vec::new();
    let mut first_error: Option<Error> = None;

    while let Some(joined) = set.join_next().await {
        let outcome = joined.map_err(|e| Error::TaskFailed(e.to_string()));
        match outcome.and_then(|result| result) {
            Ok(report) => reports.push(report),
            Err(err) => {
                debug!("Copy job failed: {}", err);
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(reports),
    }
}

/// Generates the sub-theme described by `request` under `project_root`.
///
/// # Flow
/// 1. Verifies the starter kit exists; nothing is written if it does not
/// 2. Creates the destination theme directory if absent
/// 3. Runs the five copy jobs concurrently
/// 4. Resolves once every job has finished
///
/// # Errors
/// * `Error::TemplateNotFound` before any write if the starter kit is missing
/// * The first `Error::CopyIo` (or other job failure) once all jobs have stopped
pub async fn generate<P: AsRef<Path>>(
    request: &GenerationRequest,
    project_root: P,
) -> Result<GenerationReport> {
    let project_root = project_root.as_ref();
    let template_root = locate(project_root)?;
    let jobs = CopyJob::all()?;

    let theme_root = destination(project_root, request.machine_name());
    tokio::fs::create_dir_all(&theme_root)
        .await
        .map_err(|e| Error::copy_io(&theme_root, e))?;
    info!(
        "Generating '{}' into {}",
        request.display_name(),
        theme_root.display()
    );

    let mut set = JoinSet::new();
    for job in jobs {
        set.spawn(run_job(
            job,
            template_root.clone(),
            theme_root.clone(),
            request.clone(),
        ));
    }

    let reports = drain(set).await?;
    let report = GenerationReport::new(request, theme_root, reports);
    info!(
        "Generated {} files for '{}'",
        report.file_count(),
        report.machine_name
    );
    Ok(report)
}
