use std::fs;
use std::process::Command;

use tempfile::TempDir;

#[test]
fn test_hyphenated_name_exits_nonzero_with_diagnostic() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_pyinit"))
        .arg("my-tool")
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    // Multi-line diagnostic on stderr naming the problem and the fix.
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.lines().count() >= 2);
    assert!(stderr.contains("Hyphens ('-') are not allowed"));
    assert!(stderr.contains("Use 'my_tool' instead of 'my-tool'"));

    // Validation failed before any filesystem side effect.
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_empty_name_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_pyinit"))
        .arg("")
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
