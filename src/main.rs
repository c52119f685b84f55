//! pyinit's main application entry point.
//! Handles command-line argument parsing and coordinates name validation,
//! scaffolding, version-control setup and lock file generation.

use pyinit::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    name::ProjectName,
    project::initialize,
    renderer::MiniJinjaRenderer,
    runner::SystemCommandRunner,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the project name (hyphens are rejected before any side effect)
/// 2. Creates the directory layout and writes the template files
/// 3. Sets up version control per the --vcs policy
/// 4. Generates the Poetry lock file (best effort)
fn run(args: Args) -> Result<()> {
    let name = ProjectName::new(&args.name)?;
    let engine = MiniJinjaRenderer::new();
    let runner = SystemCommandRunner::new();
    let base_dir = std::env::current_dir()?;

    let project_dir = initialize(&base_dir, &name, &engine, &runner, args.vcs)?;

    println!("Created project '{}' in {}.", name, project_dir.display());
    Ok(())
}
