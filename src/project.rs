//! Project initialization.
//!
//! The core of pyinit: given a validated name, create the directory
//! layout and write the templated files, then hand off to the
//! version-control and lock-file steps. All paths are resolved against an
//! explicit base directory; the working directory of the process is never
//! changed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::name::ProjectName;
use crate::renderer::TemplateRenderer;
use crate::runner::CommandRunner;
use crate::templates;
use crate::vcs::{self, VcsMode};

/// Creates the project directory tree and writes the template files.
///
/// Layout produced under `base_dir`:
/// ```text
/// <name>/
///   <name>/
///     __init__.py      (empty)
///     __main__.py
///   .gitignore
///   flake.nix
///   pyproject.toml
///   README.md
/// ```
///
/// Steps run in order with no rollback: if a later write fails, earlier
/// directories and files remain on disk.
///
/// # Returns
/// * `Result<PathBuf>` - Absolute-or-relative path of the created project root
///
/// # Errors
/// * `Error::ProjectDirectoryExists` if `base_dir/<name>` already exists
/// * `Error::IoError` for any other filesystem failure
/// * `Error::MinijinjaError` if a template fails to render
pub fn scaffold(
    base_dir: &Path,
    name: &ProjectName,
    engine: &dyn TemplateRenderer,
) -> Result<PathBuf> {
    let project_dir = base_dir.join(name.as_str());
    let package_dir = project_dir.join(name.as_str());
    let context = serde_json::json!({ "name": name.as_str() });

    if project_dir.exists() {
        return Err(Error::ProjectDirectoryExists {
            project_dir: project_dir.display().to_string(),
        });
    }

    fs::create_dir(&project_dir).map_err(Error::IoError)?;
    fs::create_dir(&package_dir).map_err(Error::IoError)?;

    // Package marker, deliberately empty.
    fs::write(package_dir.join("__init__.py"), "").map_err(Error::IoError)?;

    write_rendered(engine, templates::MAIN_PY, &context, package_dir.join("__main__.py"))?;

    fs::write(project_dir.join(".gitignore"), templates::GITIGNORE)
        .map_err(Error::IoError)?;

    write_rendered(engine, templates::FLAKE_NIX, &context, project_dir.join("flake.nix"))?;
    write_rendered(
        engine,
        templates::PYPROJECT_TOML,
        &context,
        project_dir.join("pyproject.toml"),
    )?;
    write_rendered(engine, templates::README_MD, &context, project_dir.join("README.md"))?;

    Ok(project_dir)
}

fn write_rendered(
    engine: &dyn TemplateRenderer,
    template: &str,
    context: &serde_json::Value,
    dest: PathBuf,
) -> Result<()> {
    let content = engine.render(template, context)?;
    log::debug!("Writing file: {}", dest.display());
    fs::write(dest, content).map_err(Error::IoError)
}

/// Full initialization procedure: scaffold, set up version control, and
/// generate the Poetry lock file.
///
/// The lock-file step invokes `poetry lock --no-update` inside the new
/// project; its failure (poetry missing, resolution error) is logged and
/// ignored, matching the fire-and-forget contract of the lock step.
pub fn initialize(
    base_dir: &Path,
    name: &ProjectName,
    engine: &dyn TemplateRenderer,
    runner: &dyn CommandRunner,
    vcs_mode: VcsMode,
) -> Result<PathBuf> {
    let project_dir = scaffold(base_dir, name, engine)?;

    vcs::setup_repository(runner, &project_dir, vcs_mode)?;

    match runner.run("poetry", &["lock", "--no-update"], &project_dir) {
        Ok(true) => {}
        Ok(false) => log::warn!("'poetry lock' exited with a non-zero status"),
        Err(Error::CommandError { detail, .. }) => {
            log::warn!("Could not run poetry: {}; skipping lock file generation", detail)
        }
        Err(e) => return Err(e),
    }

    Ok(project_dir)
}
