//! Binary-level startup checks.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a command running from an empty directory so no `.env` file leaks
/// in. The returned guard keeps the directory alive for the run.
fn command() -> (Command, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut cmd = Command::cargo_bin("hwwatch").expect("binary builds");
    cmd.current_dir(dir.path())
        .env_remove("PRACTICUM_TOKEN")
        .env_remove("TELEGRAM_TOKEN")
        .env_remove("TELEGRAM_CHAT_ID")
        .env_remove("RUST_LOG")
        .env_remove("LOG_FORMAT");
    (cmd, dir)
}

#[test]
fn refuses_to_start_without_any_configuration() {
    let (mut cmd, _dir) = command();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("PRACTICUM_TOKEN"));
}

#[test]
fn refuses_to_start_with_partial_configuration() {
    let (mut cmd, _dir) = command();
    cmd.env("PRACTICUM_TOKEN", "token")
        .env("TELEGRAM_TOKEN", "token")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TELEGRAM_CHAT_ID"));
}

#[test]
fn refuses_to_start_with_malformed_chat_id() {
    let (mut cmd, _dir) = command();
    cmd.env("PRACTICUM_TOKEN", "token")
        .env("TELEGRAM_TOKEN", "token")
        .env("TELEGRAM_CHAT_ID", "not-a-number")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TELEGRAM_CHAT_ID"));
}
