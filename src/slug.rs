//! Display name to machine name conversion.
//! A machine name is lowercase ASCII letters and digits joined by single
//! hyphens, safe as a directory name and inside file names.

use std::sync::LazyLock;

use deunicode::deunicode;
use regex::Regex;

use crate::error::{Error, Result};

/// Separator placed between the words of a machine name.
pub const SEPARATOR: char = '-';

static NON_ALPHANUMERIC_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("separator pattern is valid"));

/// Converts a display name into a machine name.
///
/// # Arguments
/// * `display_name` - Free-form name as typed by the user
///
/// # Returns
/// * `Result<String>` - Lowercase, hyphen-separated identifier
///
/// # Errors
/// * `Error::InvalidName` if the name is blank or transliterates to no
///   letters or digits
///
/// # Example
/// ```
/// use deck_subtheme::slug::normalize;
///
/// assert_eq!(normalize("My Thème 2").unwrap(), "my-theme-2");
/// assert_eq!(normalize("Тема").unwrap(), "tema");
/// ```
pub fn normalize(display_name: &str) -> Result<String> {
    if display_name.trim().is_empty() {
        return Err(Error::InvalidName(String::new()));
    }

    let lowered = deunicode(display_name).to_lowercase();
    let separator = SEPARATOR.to_string();
    let collapsed = NON_ALPHANUMERIC_RUNS.replace_all(&lowered, separator.as_str());
    let machine_name = collapsed.trim_matches(SEPARATOR);

    if machine_name.is_empty() {
        return Err(Error::InvalidName(format!(
            "'{display_name}' transliterates to no letters or digits"
        )));
    }

    debug_assert!(is_machine_name(machine_name), "bad machine name {machine_name:?}");
    Ok(machine_name.to_string())
}

/// Returns true when `value` already has the machine name shape.
pub fn is_machine_name(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with(SEPARATOR)
        && !value.ends_with(SEPARATOR)
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == SEPARATOR)
}
