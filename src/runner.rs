//! External command execution.
//!
//! The version-control and dependency-lock steps shell out to `git` and
//! `poetry`. Callers go through the [`CommandRunner`] trait so tests can
//! substitute a recording stub instead of invoking real tools.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Trait for running external commands.
pub trait CommandRunner {
    /// Runs `program` with `args` inside `cwd` and waits for completion.
    ///
    /// # Returns
    /// * `Ok(true)` if the command exited successfully
    /// * `Ok(false)` if it exited with a non-zero status
    ///
    /// # Errors
    /// * `Error::CommandError` if the process could not be spawned,
    ///   typically because the tool is not installed
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<bool>;
}

/// Command runner backed by `std::process::Command`.
///
/// Child stdout/stderr are inherited so the underlying tool's output is
/// visible to the user.
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        SystemCommandRunner::new()
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<bool> {
        log::debug!("Running '{} {}' in {}", program, args.join(" "), cwd.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::CommandError {
                program: program.to_string(),
                detail: e.to_string(),
            })?;

        Ok(status.success())
    }
}
