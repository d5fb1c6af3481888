//! CLI smoke tests for the contactform-server binary
//!
//! These tests verify that the CLI commands work correctly, including
//! configuration validation, help output, and basic command functionality.

use std::process::{Command, Stdio};

/// Helper to run the contactform-server binary with given arguments
fn run_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_contactform-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute contactform-server")
}

#[test]
fn test_cli_help_command() {
    let output = run_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("contactform-server"),
        "Should contain binary name"
    );
    assert!(
        stdout.contains("Usage:") || stdout.contains("USAGE:"),
        "Should contain usage information"
    );
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(
        stdout.contains("check"),
        "Should contain 'check' subcommand"
    );
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_version_command() {
    let output = run_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("contactform-server"),
        "Should contain binary name"
    );
    assert!(
        stdout.chars().any(|c| c.is_ascii_digit()),
        "Should contain version numbers"
    );
}

#[test]
fn test_cli_invalid_command() {
    let output = run_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");
}

#[test]
fn test_cli_check_with_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg_path = tmp.path().join("cfg.yaml");
    let home = tmp.path().join("home");

    let yaml = format!(
        r#"
server:
  home_dir: "{}"
  host: "127.0.0.1"
  port: 5099

database:
  url: "sqlite://database/contacts.db"
"#,
        home.display()
    );
    std::fs::write(&cfg_path, yaml).unwrap();

    let output = run_server(&["--config", cfg_path.to_str().unwrap(), "check"]);

    assert!(output.status.success(), "Check command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration check passed"));
    assert!(stdout.contains("port: 5099"));
}

#[test]
fn test_cli_check_rejects_bad_dsn() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg_path = tmp.path().join("cfg.yaml");
    let home = tmp.path().join("home");

    let yaml = format!(
        r#"
server:
  home_dir: "{}"
  host: "127.0.0.1"
  port: 5099

database:
  url: "carrier-pigeon://coop/roost"
"#,
        home.display()
    );
    std::fs::write(&cfg_path, yaml).unwrap();

    let output = run_server(&["--config", cfg_path.to_str().unwrap(), "check"]);

    assert!(!output.status.success(), "Check should fail on unknown DSN");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported database type"));
}

#[test]
fn test_cli_print_config() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg_path = tmp.path().join("cfg.yaml");
    let home = tmp.path().join("home");

    let yaml = format!(
        r#"
server:
  home_dir: "{}"
  host: "127.0.0.1"
  port: 6001
"#,
        home.display()
    );
    std::fs::write(&cfg_path, yaml).unwrap();

    let output = run_server(&["--config", cfg_path.to_str().unwrap(), "--print-config"]);

    assert!(output.status.success(), "--print-config should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: 6001"));
    assert!(stdout.contains("rate_limit"));
}
