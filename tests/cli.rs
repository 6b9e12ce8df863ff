use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn bin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("coolify-mcp").unwrap();
    cmd.env_remove("COOLIFY_BASE_URL")
        .env_remove("COOLIFY_TOKEN")
        .env_remove("RUST_LOG")
        .env("HOME", home.path());
    cmd
}

#[test]
fn test_missing_credentials_exit_nonzero() {
    let home = TempDir::new().unwrap();
    bin(&home)
        .write_stdin("")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Missing required environment variables: COOLIFY_BASE_URL, COOLIFY_TOKEN",
        ));
}

#[test]
fn test_only_token_missing() {
    let home = TempDir::new().unwrap();
    bin(&home)
        .env("COOLIFY_BASE_URL", "http://127.0.0.1:9")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("COOLIFY_TOKEN"))
        .stderr(predicate::str::contains("COOLIFY_BASE_URL").not());
}

#[test]
fn test_unreadable_explicit_config() {
    let home = TempDir::new().unwrap();
    bin(&home)
        .arg("--config")
        .arg(home.path().join("absent.toml"))
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_serves_until_stdin_closes() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("coolify.toml");
    fs::write(
        &config,
        "[coolify]\nbase_url = \"http://127.0.0.1:9\"\ntoken = \"t\"\n\n[server]\nname = \"from-file\"\n",
    )
    .unwrap();

    bin(&home)
        .arg("--config")
        .arg(&config)
        .write_stdin(
            "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"initialize\"}\n{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\":\"from-file\""))
        .stdout(predicate::str::contains("{\"jsonrpc\":\"2.0\",\"id\":2,\"result\":{}}"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    bin(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
