//! Command-line interface implementation.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::PROJECT_ROOT_ENV;

/// Command-line arguments structure.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a Drupal sub-theme from the Deck starter kit", long_about = None)]
pub struct Args {
    /// Human readable theme name, e.g. --theme="My Theme"
    #[arg(long, value_name = "NAME", num_args = 0..=1, default_missing_value = "")]
    pub theme: Option<String>,

    /// Project root holding themes/ (discovered from the working directory if omitted)
    #[arg(long, value_name = "PATH", env = PROJECT_ROOT_ENV)]
    pub root: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the generation report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text on an unknown argument
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::UnknownArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
