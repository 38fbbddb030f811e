//! End-to-end tests for the agent-host binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

/// Run the binary inside `dir`, isolated from the caller's home and environment
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_agent-host"))
        .current_dir(dir)
        .env("HOME", dir)
        .env_remove("AGENT_HOST_CONFIG")
        .env_remove("AGENT_HOST_REGISTRY")
        .env_remove("GOOGLE_AGENT_ENGINE")
        .arg("--log-file")
        .arg(dir.join("agent-host.log"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_missing_registry_exits_non_zero() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), &["--registry", "missing.csv", "delegates"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to initialize agent host"), "stderr: {}", stderr);
    assert!(stderr.contains("agent registry not found: missing.csv"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_registry_exits_non_zero() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("agent_registry.csv"), "prime_agent\n").unwrap();

    let output = run(dir.path(), &["manifest"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed registry record on line 1"), "stderr: {}", stderr);
}

#[test]
fn test_delegates_listed_in_order() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("agent_registry.csv"),
        "prime_agent,http://localhost:8001\nweather,https://weather.example.com\n",
    )
    .unwrap();

    let output = run(dir.path(), &["delegates"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split('\t').nth(1))
        .collect();
    assert_eq!(names, vec!["roll_agent", "prime_agent", "weather"]);
    assert!(stdout.contains("https://weather.example.com/.well-known/agent-card.json"));
}

#[test]
fn test_registry_path_from_dotenv() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env"), "AGENT_HOST_REGISTRY=reg.csv\n").unwrap();
    fs::write(dir.path().join("reg.csv"), "weather,https://weather.example.com\n").unwrap();

    let output = run(dir.path(), &["delegates"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("remote\tweather\t"));
}

#[test]
fn test_roll_without_registry() {
    let dir = tempdir().unwrap();

    let output = run(dir.path(), &["roll", "--sides", "20"]);
    assert!(output.status.success());

    let rolled: u32 = String::from_utf8_lossy(&output.stdout).trim().parse().unwrap();
    assert!((1..=20).contains(&rolled));
}
