//! Placeholder substitution inside file contents.

use crate::constants::CONTENT_TOKEN;

/// Replaces every `{{ SUBTHEME }}` in `text` with the display name.
///
/// The bare filename placeholder is left untouched: it is only meaningful in
/// file names.
pub fn substitute_content(text: &str, display_name: &str) -> String {
    text.replace(CONTENT_TOKEN, display_name)
}
