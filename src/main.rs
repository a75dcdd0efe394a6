//! Binary entry point.
//! Parses arguments, validates the theme name, finds the project root and
//! runs the generator.

use deck_subtheme::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    generator::generate,
    logger::init_logger,
    request::GenerationRequest,
    root::find_project_root,
};

/// Main application entry point.
#[tokio::main]
async fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args).await {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the theme name before touching the filesystem
/// 2. Resolves the project root from `--root` or discovery
/// 3. Generates the theme and prints what was written
async fn run(args: Args) -> Result<()> {
    let request = GenerationRequest::from_arg(args.theme.as_deref())?;

    let project_root = match args.root {
        Some(root) => std::env::current_dir()?.join(root),
        None => find_project_root()?,
    };

    let report = generate(&request, &project_root).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for entry in &report.entries {
        println!("{}: '{}'", entry.kind, entry.target.display());
    }
    println!(
        "Theme '{}' generated successfully in {}.",
        report.theme,
        report.destination.display()
    );
    Ok(())
}
