//! Basic CLI behavior: usage, version, program sources and exit codes

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

use common::{create_program, rawk, rawk_with_env, ExitStatus, MockEnvironment};

fn rawk_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rawk"));
    cmd.env_remove("MAWK_LONG_OPTIONS")
        .env_remove("RAWK_LOG")
        .env("RAWK_CONFIG_DIR", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

// ============================================================================
// Usage and version
// ============================================================================

#[test]
fn test_no_arguments_prints_usage() {
    rawk_cmd()
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Usage: rawk"));
}

#[test]
fn test_help_and_usage_options() {
    for spelling in ["help", "usage", "he", "u"] {
        rawk_cmd()
            .args(["-W", spelling, "{ print }"])
            .assert()
            .success()
            .stderr(predicate::str::contains("-W random=number"));
    }
}

#[test]
fn test_version_continues_processing() {
    let r = rawk(&["-W", "version", "-W", "dump", "BEGIN { }"]);
    assert_eq!(r.exit_status, ExitStatus::Success);
    assert!(r.stdout.starts_with(&format!("rawk {}", env!("CARGO_PKG_VERSION"))));
    assert!(r.contains("# program: command line"));
}

// ============================================================================
// No program
// ============================================================================

#[test]
fn test_lone_dash_without_program_exits_zero() {
    rawk_cmd()
        .arg("-")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_options_without_program_exit_zero() {
    rawk_cmd().args(["-v", "x=1"]).assert().success();
    rawk_cmd().arg("--").assert().success();
    rawk_cmd().arg("-Wexec").assert().success();
}

#[test]
fn test_glued_exec_as_last_argument_has_no_program() {
    for args in [&["-Wexec=prog.awk"][..], &["-W", "exec=prog.awk"][..]] {
        rawk_cmd()
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::is_empty());
    }
}

// ============================================================================
// Program sources
// ============================================================================

#[test]
fn test_inline_program_and_arguments() {
    let r = rawk(&["-W", "dump", "BEGIN { print 1 }", "x", "42"]);
    assert_eq!(r.exit_code, 0);
    assert!(r.contains("     1\tBEGIN { print 1 }\n"));
    assert!(r.contains("# ARGC = 3\n"));
    assert!(r.contains("# ARGV[0] = rawk\n"));
    assert!(r.contains("# ARGV[1] = x\n"));
    assert!(r.contains("# ARGV[2] = 42 (strnum)\n"));
}

#[test]
fn test_multiple_program_files_in_order() {
    let (_a_dir, a) = create_program("a.awk", "BEGIN { x = 1 }\n");
    let (_b_dir, b) = create_program("b.awk", "END { print x }\n");
    let a = a.to_string_lossy().into_owned();
    let b = b.to_string_lossy().into_owned();

    let r = rawk(&["-W", "dump", "-f", &a, "-f", &b, "in.txt"]);
    assert_eq!(r.exit_status, ExitStatus::Success, "stderr: {}", r.stderr);

    let first = r.stdout.find(&format!("# program: {}", a)).unwrap();
    let second = r.stdout.find(&format!("# program: {}", b)).unwrap();
    assert!(first < second);
    assert!(r.contains("# ARGC = 2\n"));
    assert!(r.contains("# ARGV[1] = in.txt\n"));
}

#[test]
fn test_program_from_stdin() {
    let mut env = MockEnvironment::new();
    env.set_stdin(b"{ print $1 }\n");
    let r = rawk_with_env(&["-W", "dump", "-f", "-"], &env);
    assert_eq!(r.exit_code, 0);
    assert!(r.contains("# program: -\n"));
    assert!(r.contains("     1\t{ print $1 }\n"));
}

#[test]
fn test_exec_ends_option_processing() {
    let (_dir, prog) = create_program("prog.awk", "{ print }\n");
    let prog = prog.to_string_lossy().into_owned();

    let r = rawk(&["-W", "dump", "-W", "exec", &prog, "-v", "a"]);
    assert_eq!(r.exit_code, 0, "stderr: {}", r.stderr);
    assert!(r.contains("# ARGC = 3\n"));
    assert!(r.contains("# ARGV[1] = -v\n"));
    assert!(r.contains("# ARGV[2] = a\n"));
}

#[test]
fn test_dash_after_program_file_is_an_argument() {
    let (_dir, prog) = create_program("prog.awk", "{ print }\n");
    let prog = prog.to_string_lossy().into_owned();

    let r = rawk(&["-Wdump", "-f", &prog, "-", "x"]);
    assert_eq!(r.exit_code, 0);
    assert!(r.contains("# ARGV[1] = -\n"));
    assert!(r.contains("# ARGV[2] = x\n"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_fatal_errors_exit_two() {
    rawk_cmd()
        .args(["-q", "{ }"])
        .assert()
        .code(2)
        .stderr(predicate::str::diff("rawk: not an option: -q\n"));

    rawk_cmd()
        .args(["-f", "/nonexistent/prog.awk"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("rawk: couldn't open file /nonexistent/prog.awk"));
}
