//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn checkin() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("checkin").unwrap()
}

/// A command isolated from any checkin.toml on the host.
fn isolated(dir: &TempDir) -> Command {
    let mut cmd = checkin();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("PORT")
        .env_remove("ADMIN_TOKEN");
    cmd
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    isolated(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created checkin.toml"));

    let written = std::fs::read_to_string(dir.path().join("checkin.toml")).unwrap();
    assert!(written.contains("admin_token"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("checkin.toml"), "port = 4000\n").unwrap();

    isolated(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let kept = std::fs::read_to_string(dir.path().join("checkin.toml")).unwrap();
    assert_eq!(kept, "port = 4000\n");
}

#[test]
fn serve_with_missing_config_fails() {
    let dir = TempDir::new().unwrap();

    isolated(&dir)
        .arg("serve")
        .arg("--config")
        .arg("nope.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn serve_with_bad_port_env_fails() {
    let dir = TempDir::new().unwrap();

    isolated(&dir)
        .env("PORT", "eighty")
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid PORT"));
}

#[test]
fn serve_with_malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("checkin.toml"), "port = \"not a number\"\n").unwrap();

    isolated(&dir)
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn serve_on_busy_port_fails() {
    let dir = TempDir::new().unwrap();
    let busy = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = busy.local_addr().unwrap().port();

    isolated(&dir)
        .arg("serve")
        .arg("--host")
        .arg("127.0.0.1")
        .arg("--port")
        .arg(port.to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to bind"));
}

#[test]
fn help_output() {
    checkin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Classroom check-in server"));
}

#[test]
fn version_output() {
    checkin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("checkin"));
}
