//! Integration tests for sloc CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_sloc(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_sloc"))
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn create_project(root: &Path) {
    fs::write(root.join("a.go"), "package a\n\nfunc A() {\n}\n").unwrap();
    fs::write(root.join("b.go"), "// one\n// two\n").unwrap();
    fs::write(root.join("readme.txt"), "not counted\n").unwrap();
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_sloc(&["--help"]);

    assert!(success);
    assert!(stdout.contains("sloc"));
    assert!(stdout.contains("--loglevel"));
    assert!(stdout.contains("--suffix"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_sloc(&["--version"]);

    assert!(success);
    assert!(stdout.contains("sloc"));
}

#[test]
fn test_table_output() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_sloc(&[path_str(temp.path())]);

    assert!(success);
    assert!(stdout.contains("FILENAME"));
    assert!(stdout.contains("White Space"));
    assert!(stdout.contains("Comment"));
    assert!(stdout.contains("Code"));
    assert!(stdout.contains("a.go"));
    assert!(stdout.contains("b.go"));
    assert!(!stdout.contains("readme.txt"));

    let total = stdout
        .lines()
        .find(|l| l.starts_with("TOTAL"))
        .expect("missing TOTAL row");
    let values: Vec<&str> = total.split_whitespace().skip(1).collect();
    assert_eq!(values, ["1", "2", "3"]);
}

#[test]
fn test_json_output() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_sloc(&[path_str(temp.path()), "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["headers"][0], "FILENAME");
    assert_eq!(parsed["rows"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["footer"]["label"], "TOTAL");
    assert_eq!(parsed["footer"]["values"], serde_json::json!(["1", "2", "3"]));
}

#[test]
fn test_multiple_roots() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    create_project(first.path());
    create_project(second.path());

    for extra in [&[][..], &["--parallel"][..]] {
        let mut args = vec![path_str(first.path()), path_str(second.path()), "-o", "json"];
        args.extend_from_slice(extra);
        let (stdout, _, success) = run_sloc(&args);

        assert!(success);
        let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(parsed["rows"].as_array().unwrap().len(), 4);
        assert_eq!(parsed["footer"]["values"], serde_json::json!(["2", "4", "6"]));
    }
}

#[test]
fn test_custom_suffix() {
    let temp = tempdir().unwrap();
    create_project(temp.path());
    fs::write(temp.path().join("lib.rs"), "/// doc\npub fn f() {}\n").unwrap();

    let (stdout, _, success) = run_sloc(&[path_str(temp.path()), "--suffix", ".rs", "-o", "csv"]);

    assert!(success);
    assert!(stdout.contains("lib.rs"));
    assert!(!stdout.contains("a.go"));
    assert!(stdout.lines().any(|l| l == "\"TOTAL\",0,1,1"));
}

#[test]
fn test_invalid_path() {
    let temp = tempdir().unwrap();
    create_project(temp.path());
    let missing = temp.path().join("missing");

    let (stdout, stderr, success) = run_sloc(&[path_str(temp.path()), path_str(&missing)]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("path does not exist"));
    assert!(!stdout.contains("TOTAL"));
}

#[test]
fn test_invalid_log_level() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, stderr, success) = run_sloc(&[path_str(temp.path()), "--loglevel", "VERBOSE"]);

    assert!(!success);
    assert!(stderr.contains("invalid log level"));
    assert!(!stdout.contains("TOTAL"));
}

#[test]
fn test_log_level_is_case_sensitive() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, stderr, success) = run_sloc(&[path_str(temp.path()), "--loglevel", "debug"]);

    assert!(!success);
    assert!(stderr.contains("invalid log level: found 'debug'"));
    assert!(!stdout.contains("TOTAL"));
}

#[test]
fn test_error_reported_once() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("missing");

    let (_, stderr, success) = run_sloc(&[path_str(&missing)]);

    assert!(!success);
    assert_eq!(stderr.matches("path does not exist").count(), 1);
}

#[test]
fn test_debug_log_goes_to_stderr() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, stderr, success) =
        run_sloc(&[path_str(temp.path()), "--loglevel", "DEBUG", "-o", "json"]);

    assert!(success);
    assert!(stderr.contains("scanning"));
    assert!(stderr.contains("ignoring"));
    serde_json::from_str::<serde_json::Value>(&stdout).expect("stdout must stay clean");
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().unwrap();
    let locked = temp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(temp.path().join("c.go"), "x := 1\n").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let (stdout, _, success) = run_sloc(&[path_str(temp.path())]);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success);
    assert!(stdout.contains("c.go"));
    assert!(stdout.contains("TOTAL"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_fails() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().unwrap();
    create_project(temp.path());
    let locked = temp.path().join("locked.go");
    fs::write(&locked, "x := 1\n").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let readable = fs::read(&locked).is_ok();
    let (stdout, stderr, success) = run_sloc(&[path_str(temp.path())]);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    // Privileged users can still read the file.
    if readable {
        return;
    }
    assert!(!success);
    assert!(stderr.contains("Error: failed to read file"));
    assert!(stderr.contains("locked.go"));
    assert!(!stdout.contains("TOTAL"));
}

#[cfg(unix)]
#[test]
fn test_file_symlink_is_counted() {
    use std::os::unix::fs::symlink;

    let temp = tempdir().unwrap();
    let target = tempdir().unwrap();
    fs::write(temp.path().join("c.go"), "x := 1\n").unwrap();
    fs::write(target.path().join("real.go"), "// doc\ny := 2\n").unwrap();
    symlink(target.path().join("real.go"), temp.path().join("link.go")).unwrap();

    let (stdout, _, success) = run_sloc(&[path_str(temp.path()), "-o", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["rows"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["footer"]["values"], serde_json::json!(["0", "1", "2"]));
}
