//! The validated input to a generation run.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::slug;

/// A theme name together with its derived machine name.
///
/// Built once by the caller before any filesystem work; holding one means
/// both names are valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    display_name: String,
    machine_name: String,
}

impl GenerationRequest {
    /// Validates `display_name` and derives the machine name from it.
    ///
    /// # Errors
    /// * `Error::InvalidName` if the name is blank or normalizes to nothing
    pub fn new<S: Into<String>>(display_name: S) -> Result<Self> {
        let display_name = display_name.into();
        let machine_name = slug::normalize(&display_name)?;
        Ok(Self {
            display_name,
            machine_name,
        })
    }

    /// Builds a request from an optional command-line value.
    pub fn from_arg(theme: Option<&str>) -> Result<Self> {
        match theme {
            Some(name) => Self::new(name),
            None => Err(Error::InvalidName(String::new())),
        }
    }

    /// The name exactly as given, used inside file contents.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The normalized name, used for the directory and file names.
    pub fn machine_name(&self) -> &str {
        &self.machine_name
    }
}
