//! # cbrs CLI Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Verifies the behavior of the `cbrs` binary: standard flags, `cbrs run`
//! exit codes and diagnostics, `cbrs render` output and the effect of
//! configuration files.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_main_help_flag() {
    cbrs_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn test_main_version_flag() {
    cbrs_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_run_requires_a_program() {
    cbrs_cmd().arg("run").assert().failure();
}

/// A successful command exits 0 and its rendered line is logged first.
#[test]
fn test_run_success_logs_command_line() {
    let dir = tempdir().unwrap();
    cbrs_cmd_in(dir.path())
        .args(["run", "true"])
        .assert()
        .success()
        .stderr(predicate::str::contains("true"));
}

/// The failure is reported on exactly one stderr line.
#[test]
fn test_run_reports_nonzero_exit_code() {
    let dir = tempdir().unwrap();
    let assert = cbrs_cmd_in(dir.path())
        .args(["run", "--verbatim", "sh", "-c", "exit 7"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exited with exit code: 7"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("exit code: 7").count(), 1, "stderr was:\n{stderr}");
    assert!(stderr.contains("Command failed: sh -c exit 7"));
}

#[test]
fn test_run_reports_terminating_signal() {
    let dir = tempdir().unwrap();
    cbrs_cmd_in(dir.path())
        .args(["run", "--verbatim", "sh", "-c", "kill -TERM $$"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("terminated by: SIGTERM"));
}

/// The child reports the failed exec itself; the parent sees exit code 1.
#[test]
fn test_run_missing_program() {
    let dir = tempdir().unwrap();
    cbrs_cmd_in(dir.path())
        .args(["run", "cbrsnosuchprogram"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "The execvp of 'cbrsnosuchprogram' has failed with:",
        ))
        .stderr(predicate::str::contains("exited with exit code: 1"));
}

#[test]
fn test_run_missing_program_reports_exit_once() {
    let dir = tempdir().unwrap();
    let assert = cbrs_cmd_in(dir.path())
        .args(["run", "cbrsnosuchprogram"])
        .assert()
        .code(1);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("exited with exit code: 1").count(), 1, "stderr was:\n{stderr}");
    assert_eq!(stderr.matches("The execvp of").count(), 1, "stderr was:\n{stderr}");
}

/// With the default policy `-c` reaches the shell as the literal `"-c"`,
/// which the shell then fails to open as a script.
#[test]
fn test_run_default_policy_passes_quoted_arguments() {
    let dir = tempdir().unwrap();
    cbrs_cmd_in(dir.path())
        .args(["run", "sh", "-c", "exit 0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sh \"-c\" exit 0"));
}

#[test]
fn test_render_marks_quoted_arguments() {
    let dir = tempdir().unwrap();
    cbrs_cmd_in(dir.path())
        .args(["render", "cc", "-c", "main.c", "plain words"])
        .assert()
        .success()
        .stdout(
            "0  cc\n\
             1  \"-c\"  quoted: '-' at byte 0\n\
             2  \"main.c\"  quoted: '.' at byte 4\n\
             3  plain words\n\
             $ cc \"-c\" \"main.c\" plain words\n",
        );
}

#[test]
fn test_render_verbatim() {
    let dir = tempdir().unwrap();
    cbrs_cmd_in(dir.path())
        .args(["render", "--verbatim", "cc", "-c", "main.c"])
        .assert()
        .success()
        .stdout("0  cc\n1  -c\n2  main.c\n$ cc -c main.c\n");
}

#[test]
fn test_project_config_disables_quoting() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(".cbrs.toml"),
        "[command]\nquote_unsafe_args = false\n",
    )
    .unwrap();

    cbrs_cmd_in(dir.path())
        .args(["render", "ls", "-l"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1  -l\n"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".cbrs.toml"), "[buffer]\nbase_capacity = 0\n").unwrap();

    cbrs_cmd_in(dir.path())
        .args(["render", "true"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("base_capacity must be greater than zero"));
}

#[test]
fn test_user_config_is_picked_up() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("project");
    fs::create_dir_all(project.join(".git")).unwrap();
    fs::create_dir_all(dir.path().join("cbrs")).unwrap();
    fs::write(
        dir.path().join("cbrs").join("config.toml"),
        "[command]\nquote_unsafe_args = false\n",
    )
    .unwrap();

    cbrs_cmd_in(dir.path())
        .current_dir(&project)
        .args(["render", "ls", "-l"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1  -l\n"));
}

/// A project key equal to the built-in default still beats the user file.
#[test]
fn test_project_config_default_value_overrides_user_config() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("project");
    fs::create_dir_all(project.join(".git")).unwrap();
    fs::write(
        project.join(".cbrs.toml"),
        "[command]\nquote_unsafe_args = true\n",
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("cbrs")).unwrap();
    fs::write(
        dir.path().join("cbrs").join("config.toml"),
        "[command]\nquote_unsafe_args = false\n",
    )
    .unwrap();

    cbrs_cmd_in(dir.path())
        .current_dir(&project)
        .args(["render", "ls", "-l"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1  \"-l\"  quoted: '-' at byte 0\n"));
}
