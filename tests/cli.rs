use hellobye::Identity;
use std::process::{Command, Output};

const VERSIONED: &str = env!("CARGO_BIN_EXE_hellobye");
const ANONYMOUS: &str = env!("CARGO_BIN_EXE_hellobye-anon");

fn exec(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to start executable")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("Non UTF-8 output")
}

#[test]
fn versioned_without_name() -> anyhow::Result<()> {
    let output = exec(VERSIONED, &[]);
    assert_eq!(stdout(&output), format!("{}\n", Identity::from_build()?));
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
    Ok(())
}

#[test]
fn versioned_with_name() {
    let output = exec(VERSIONED, &["Ann"]);
    assert_eq!(stdout(&output), "Hello, Ann!\n...\nGoodbye!\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
}

#[test]
fn anonymous_without_name() {
    let output = exec(ANONYMOUS, &[]);
    assert_eq!(stdout(&output), "Hello!\n...\nGoodbye!\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn anonymous_with_name() {
    let output = exec(ANONYMOUS, &["Ann"]);
    assert_eq!(stdout(&output), "Hello, Ann!\n...\nGoodbye!\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn extra_arguments_are_ignored() {
    for bin in [VERSIONED, ANONYMOUS] {
        let one = exec(bin, &["Ann"]);
        let many = exec(bin, &["Ann", "Bob", "--verbose"]);
        assert_eq!(one.stdout, many.stdout);
        assert_eq!(one.status.code(), many.status.code());
    }
}

#[test]
fn flags_are_names() {
    let output = exec(VERSIONED, &["--help"]);
    assert_eq!(stdout(&output), "Hello, --help!\n...\nGoodbye!\n");
    assert_eq!(output.status.code(), Some(0));

    for args in [&["--"][..], &["--", "Ann"][..]] {
        let output = exec(VERSIONED, args);
        assert_eq!(stdout(&output), "Hello, --!\n...\nGoodbye!\n");
        assert_eq!(output.status.code(), Some(0));
    }

    let output = exec(ANONYMOUS, &["--", "Ann"]);
    assert_eq!(stdout(&output), "Hello, --!\n...\nGoodbye!\n");
}

#[test]
fn repeated_invocations() {
    for bin in [VERSIONED, ANONYMOUS] {
        for args in [&[][..], &["Ann"][..]] {
            let first = exec(bin, args);
            let second = exec(bin, args);
            assert_eq!(first.stdout, second.stdout);
            assert_eq!(first.status.code(), second.status.code());
        }
    }
}
