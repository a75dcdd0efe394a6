//! deck-subtheme scaffolds a Drupal sub-theme from the Deck starter kit.
//! It copies the starter kit into `themes/custom/<machine name>`, renaming
//! the core theme files and filling the theme name into their contents.

/// Command-line interface module
pub mod cli;

/// Fixed paths, placeholders and environment variable names
pub mod constants;

/// Per-job file copying
pub mod copier;

/// Error types and handling
pub mod error;

/// Concurrent generation and completion reporting
pub mod generator;

/// The five copy job definitions
pub mod jobs;

/// Starter kit and destination paths
pub mod locator;

/// Logger setup for the binary
pub mod logger;

/// Destination file names for core theme files
pub mod naming;

/// Validated generation input
pub mod request;

/// Project root discovery
pub mod root;

/// Display name to machine name conversion
pub mod slug;

/// Placeholder substitution in file contents
pub mod substitute;
