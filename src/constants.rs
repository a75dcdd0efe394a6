//! Common constants used throughout the generator.

/// Path segments from the project root to the Deck starter kit.
pub const TEMPLATE_SEGMENTS: [&str; 4] = ["themes", "contrib", "deck", "subtheme"];

/// Path segments from the project root to the directory holding generated themes.
pub const CUSTOM_THEMES_SEGMENTS: [&str; 2] = ["themes", "custom"];

/// Placeholder replaced by the machine name inside file names.
pub const FILENAME_TOKEN: &str = "SUBTHEME";

/// Placeholder replaced by the display name inside file contents.
pub const CONTENT_TOKEN: &str = "{{ SUBTHEME }}";

/// Extension marking a file as a template for the extension before it.
pub const TEMPLATE_EXTENSION: &str = "tpl";

/// Environment variable overriding project root discovery.
pub const PROJECT_ROOT_ENV: &str = "DECK_PROJECT_ROOT";

/// Docroot directories searched for when the project root is not a docroot itself.
pub const DOCROOT_CANDIDATES: [&str; 2] = ["docroot", "web"];
