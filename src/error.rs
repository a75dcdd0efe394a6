//! Error handling for the sub-theme generator.
//! Defines custom error types and results used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for generator operations.
///
/// The first three variants are pre-flight failures raised before any file is
/// written. Everything else is reported while copying.
#[derive(Error, Debug)]
pub enum Error {
    /// The theme name was missing, empty, or normalized to nothing.
    #[error("You didn't give me a usable theme name{}.", reason_suffix(.0))]
    InvalidName(String),

    /// The Deck starter kit is not present under the project root.
    #[error("Deck was not found at '{}'.", .path.display())]
    TemplateNotFound { path: PathBuf },

    /// No project root could be discovered from the working directory.
    #[error("Could not find a project root above '{}'.", .start.display())]
    ProjectRootNotFound { start: PathBuf },

    /// A read or write failed while copying a file.
    #[error("Copy failed for '{}': {source}.", .path.display())]
    CopyIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal of the template failed.
    #[error("Template walk error: {0}.")]
    Walk(#[from] walkdir::Error),

    /// A file selection pattern could not be compiled.
    #[error("Pattern error: {0}.")]
    Pattern(#[from] globset::Error),

    /// Represents errors that occur during other file system operations
    #[error("IO error: {0}.")]
    Io(#[from] io::Error),

    /// The report could not be serialized.
    #[error("JSON error: {0}.")]
    Json(#[from] serde_json::Error),

    /// A copy task panicked or was aborted.
    #[error("Copy task failed: {0}.")]
    TaskFailed(String),
}

fn reason_suffix(reason: &str) -> String {
    if reason.is_empty() {
        String::new()
    } else {
        format!(" ({reason})")
    }
}

impl Error {
    /// Wraps an I/O error with the path it happened on.
    pub fn copy_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::CopyIo {
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
