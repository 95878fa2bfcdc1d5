//! Exit codes of the `seed` binary. None of these leave the local machine.

use std::process::{Command, Output};

fn seed(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seed"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run seed binary")
}

#[test]
fn test_missing_url_prints_usage_and_exits_2() {
    let output = seed(&["-n", "2", "-t", "1"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--url"), "{stderr}");
    assert!(stderr.contains("Usage"), "{stderr}");
}

#[test]
fn test_empty_url_exits_2() {
    let output = seed(&["-u", ""]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unknown_flag_exits_2() {
    let output = seed(&["-u", "example.test", "--bogus"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_help_exits_0() {
    for flag in ["-h", "--help"] {
        let output = seed(&[flag]);

        assert_eq!(output.status.code(), Some(0));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Usage"), "{stdout}");
        assert!(stdout.contains("--users"), "{stdout}");
        assert!(stdout.contains("--tasks"), "{stdout}");
    }
}

#[test]
fn test_missing_task_names_exits_1_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("tasks.txt");

    let output = seed(&[
        "-u",
        "example.invalid",
        "--tasks-file",
        missing.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("failed to read task names"), "{stdout}");
    assert!(!stdout.contains("Connecting"), "{stdout}");
}

#[test]
fn test_refused_connection_exits_1_after_announcing_run() {
    let mut names = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut names, b"Buy milk\n").unwrap();

    let output = seed(&[
        "-u",
        "127.0.0.1:1",
        "-n",
        "2",
        "-t",
        "1",
        "--tasks-file",
        names.path().to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Seeding 2 users and 1 tasks at https://127.0.0.1:1"),
        "{stdout}"
    );
    assert!(stdout.contains("http request failed"), "{stdout}");
}
