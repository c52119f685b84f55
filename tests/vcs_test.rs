use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;

use pyinit::error::{Error, Result};
use pyinit::runner::CommandRunner;
use pyinit::vcs::{detect_repo_state, setup_repository, RepoState, VcsMode};

/// Records every invocation and replays a scripted queue of results.
/// Once the queue is exhausted, every command succeeds.
struct ScriptedRunner {
    calls: RefCell<Vec<String>>,
    responses: RefCell<VecDeque<Result<bool>>>,
}

impl ScriptedRunner {
    fn new(responses: Vec<Result<bool>>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            responses: RefCell::new(responses.into()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str], _cwd: &Path) -> Result<bool> {
        self.calls
            .borrow_mut()
            .push(format!("{} {}", program, args.join(" ")));
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(true))
    }
}

fn spawn_failure() -> Result<bool> {
    Err(Error::CommandError {
        program: "git".to_string(),
        detail: "No such file or directory".to_string(),
    })
}

#[test]
fn test_detect_inside_work_tree() {
    let runner = ScriptedRunner::new(vec![Ok(true)]);
    let state = detect_repo_state(&runner, Path::new("."));

    assert_eq!(state, RepoState::InsideWorkTree);
    assert_eq!(runner.calls(), vec!["git rev-parse --is-inside-work-tree"]);
}

#[test]
fn test_detect_not_a_repository() {
    let runner = ScriptedRunner::new(vec![Ok(false)]);
    assert_eq!(detect_repo_state(&runner, Path::new(".")), RepoState::NotARepository);
}

#[test]
fn test_detect_failure_when_git_is_absent() {
    let runner = ScriptedRunner::new(vec![spawn_failure()]);
    assert_eq!(detect_repo_state(&runner, Path::new(".")), RepoState::DetectionFailed);
}

#[test]
fn test_skip_mode_runs_nothing() {
    let runner = ScriptedRunner::new(vec![]);
    setup_repository(&runner, Path::new("."), VcsMode::Skip).unwrap();

    assert!(runner.calls().is_empty());
}

#[test]
fn test_auto_initializes_fresh_directory() {
    let runner = ScriptedRunner::new(vec![Ok(false)]);
    setup_repository(&runner, Path::new("."), VcsMode::Auto).unwrap();

    assert_eq!(
        runner.calls(),
        vec![
            "git rev-parse --is-inside-work-tree",
            "git init",
            "git add -A",
            "git commit -m Initial commit",
        ]
    );
}

#[test]
fn test_auto_leaves_existing_repository_alone() {
    let runner = ScriptedRunner::new(vec![Ok(true)]);
    setup_repository(&runner, Path::new("."), VcsMode::Auto).unwrap();

    assert_eq!(runner.calls(), vec!["git rev-parse --is-inside-work-tree"]);
}

#[test]
fn test_auto_skips_on_detection_failure() {
    let runner = ScriptedRunner::new(vec![spawn_failure()]);
    setup_repository(&runner, Path::new("."), VcsMode::Auto).unwrap();

    assert_eq!(runner.calls(), vec!["git rev-parse --is-inside-work-tree"]);
}

#[test]
fn test_force_skips_detection() {
    let runner = ScriptedRunner::new(vec![]);
    setup_repository(&runner, Path::new("."), VcsMode::Force).unwrap();

    assert_eq!(
        runner.calls(),
        vec!["git init", "git add -A", "git commit -m Initial commit"]
    );
}

#[test]
fn test_force_surfaces_spawn_failure() {
    let runner = ScriptedRunner::new(vec![spawn_failure()]);
    let err = setup_repository(&runner, Path::new("."), VcsMode::Force).unwrap_err();

    assert!(matches!(err, Error::CommandError { .. }));
}

#[test]
fn test_nonzero_git_exit_is_tolerated() {
    // Commit fails (e.g. nothing staged); setup still reports success.
    let runner = ScriptedRunner::new(vec![Ok(false), Ok(true), Ok(true), Ok(false)]);
    setup_repository(&runner, Path::new("."), VcsMode::Auto).unwrap();

    assert_eq!(runner.calls().len(), 4);
}
