//! Destination file names for the core theme files.
//! Pure functions over name components; nothing here touches the filesystem.

use crate::constants::{FILENAME_TOKEN, TEMPLATE_EXTENSION};

/// Returns true for names such as `x.info.yml.tpl`: a template marker
/// following a real extension.
pub fn is_template_name(file_name: &str) -> bool {
    let parts: Vec<&str> = file_name.split('.').collect();
    parts.len() > 2 && parts.last() == Some(&TEMPLATE_EXTENSION)
}

/// Maps a source `(base, extension)` pair to its destination pair.
///
/// `extension` is given without the leading dot. Every occurrence of the
/// filename placeholder in `base` becomes `machine_name`; a `tpl` extension
/// is then dropped in favour of the extension carried by the base name.
///
/// # Example
/// ```
/// use deck_subtheme::naming::transform_name;
///
/// let (base, ext) = transform_name("SUBTHEME.info.yml", "tpl", "test");
/// assert_eq!((base.as_str(), ext.as_str()), ("test.info", "yml"));
/// ```
pub fn transform_name(base: &str, extension: &str, machine_name: &str) -> (String, String) {
    let base = base.replace(FILENAME_TOKEN, machine_name);

    if extension == TEMPLATE_EXTENSION {
        if let Some((stem, real_extension)) = base.rsplit_once('.') {
            if !stem.is_empty() && !real_extension.is_empty() {
                return (stem.to_string(), real_extension.to_string());
            }
        }
    }

    (base, extension.to_string())
}

/// Applies [`transform_name`] to a whole file name.
pub fn transform_file_name(file_name: &str, machine_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((base, extension)) if !base.is_empty() => {
            let (base, extension) = transform_name(base, extension, machine_name);
            format!("{base}.{extension}")
        }
        // No extension, or a bare dotfile such as `.SUBTHEME`.
        _ => file_name.replace(FILENAME_TOKEN, machine_name),
    }
}
