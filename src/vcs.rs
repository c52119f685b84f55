//! Version-control setup for freshly scaffolded projects.
//!
//! Repository detection is an explicit three-way outcome rather than a
//! single boolean: an existing work tree, no work tree, and a failed
//! detection (e.g. `git` not installed) each take their own branch, and
//! [`VcsMode`] controls what happens on each.

use std::path::Path;

use clap::ValueEnum;

use crate::error::{Error, Result};
use crate::runner::CommandRunner;

/// Outcome of probing whether a directory is already under version control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoState {
    /// The directory is inside an existing git work tree.
    InsideWorkTree,
    /// Detection ran and reported no surrounding work tree.
    NotARepository,
    /// Detection itself failed, typically because git is not installed.
    DetectionFailed,
}

/// Policy for the version-control step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VcsMode {
    /// Initialize a repository only when the target is provably not
    /// inside an existing work tree.
    Auto,
    /// Always initialize, stage and commit, even inside an existing
    /// repository or when detection fails.
    Force,
    /// Never touch version control.
    Skip,
}

/// Probes `dir` for an enclosing git work tree.
///
/// Uses `git rev-parse --is-inside-work-tree`; a spawn failure maps to
/// `RepoState::DetectionFailed` instead of an error so the caller can
/// decide how to proceed.
pub fn detect_repo_state(runner: &dyn CommandRunner, dir: &Path) -> RepoState {
    match runner.run("git", &["rev-parse", "--is-inside-work-tree"], dir) {
        Ok(true) => RepoState::InsideWorkTree,
        Ok(false) => RepoState::NotARepository,
        Err(_) => RepoState::DetectionFailed,
    }
}

/// Initializes a git repository in `dir`, stages everything and creates
/// the initial commit, honoring `mode`.
///
/// Non-zero exit statuses from git are logged and swallowed; a spawn
/// failure is surfaced only under `VcsMode::Force`, where the user asked
/// for the repository explicitly.
pub fn setup_repository(
    runner: &dyn CommandRunner,
    dir: &Path,
    mode: VcsMode,
) -> Result<()> {
    match mode {
        VcsMode::Skip => {
            log::debug!("Skipping version-control setup");
            return Ok(());
        }
        VcsMode::Force => {}
        VcsMode::Auto => match detect_repo_state(runner, dir) {
            RepoState::NotARepository => {}
            RepoState::InsideWorkTree => {
                log::info!(
                    "'{}' is already inside a git work tree; not initializing a new repository",
                    dir.display()
                );
                return Ok(());
            }
            RepoState::DetectionFailed => {
                log::warn!(
                    "Could not determine whether '{}' is under version control; \
                     skipping repository setup (use --vcs force to override)",
                    dir.display()
                );
                return Ok(());
            }
        },
    }

    for args in [
        vec!["init"],
        vec!["add", "-A"],
        vec!["commit", "-m", "Initial commit"],
    ] {
        match runner.run("git", &args, dir) {
            Ok(true) => {}
            Ok(false) => {
                log::warn!("'git {}' exited with a non-zero status", args.join(" "));
            }
            Err(e) => {
                if mode == VcsMode::Force {
                    return Err(e);
                }
                if let Error::CommandError { detail, .. } = &e {
                    log::warn!("Could not run git: {}", detail);
                }
                return Ok(());
            }
        }
    }

    Ok(())
}
