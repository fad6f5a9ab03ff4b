//! Integration tests for batch mode (-s/--set flag)

use std::process::Command;

fn run_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_quadcell"))
        // Tests must be deterministic and not depend on a user's ~/.config/quadcell/config.toml.
        .env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"))
        .env("HOME", env!("CARGO_TARGET_TMPDIR"))
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn value_of(stdout: &str, cell: &str) -> String {
    stdout
        .lines()
        .find(|line| line.starts_with(&format!("{}\t", cell)))
        .and_then(|line| line.split('\t').nth(2))
        .unwrap_or_default()
        .to_string()
}

#[test]
fn test_literal_and_empty() {
    let (stdout, _, code) = run_command(&["-s", "A=5"]);
    assert_eq!(stdout, "A\t5\t5\nB\t\t\nC\t\t\nD\t\t\n");
    assert_eq!(code, 0);
}

#[test]
fn test_duplicate_letters() {
    let (stdout, _, code) = run_command(&["-s", "B=5", "-s", "A=BB"]);
    assert_eq!(value_of(&stdout, "A"), "10");
    assert_eq!(code, 0);
}

#[test]
fn test_propagation_chain() {
    let (stdout, _, _) = run_command(&["--set", "A=1", "--set", "B=A", "--set", "C=B", "--set", "A=2"]);
    assert_eq!(value_of(&stdout, "B"), "2");
    assert_eq!(value_of(&stdout, "C"), "2");
}

#[test]
fn test_cycle_is_invalid_and_recovers() {
    let (stdout, _, code) = run_command(&["-s", "A=B", "-s", "B=A"]);
    assert_eq!(value_of(&stdout, "A"), "invalid input");
    assert_eq!(value_of(&stdout, "B"), "invalid input");
    assert_eq!(code, 0);

    let (stdout, _, _) = run_command(&["-s", "A=B", "-s", "B=A", "-s", "B=5"]);
    assert_eq!(value_of(&stdout, "A"), "5");
}

#[test]
fn test_invalid_syntax() {
    let (stdout, _, code) = run_command(&["-s", "A=ABxy", "-s", "B=3A"]);
    assert_eq!(value_of(&stdout, "A"), "invalid input");
    assert_eq!(value_of(&stdout, "B"), "invalid input");
    assert_eq!(code, 0);
}

#[test]
fn test_config_overrides_markers() {
    let path = std::path::Path::new(env!("CARGO_TARGET_TMPDIR")).join("markers.toml");
    std::fs::write(&path, "[display]\ninvalid = \"#ERR\"\nempty = \"-\"\n").unwrap();
    let (stdout, _, _) = run_command(&["-c", path.to_str().unwrap(), "-s", "A=A"]);
    assert_eq!(stdout, "A\tA\t#ERR\nB\t\t-\nC\t\t-\nD\t\t-\n");
}

#[test]
fn test_bad_arguments_exit_code() {
    let (_, stderr, code) = run_command(&["-s", "E=1"]);
    assert!(stderr.contains("Invalid cell id: E"));
    assert_eq!(code, 1);

    let (_, stderr, code) = run_command(&["-s", "A1"]);
    assert!(stderr.contains("Malformed edit"));
    assert_eq!(code, 1);

    let (_, _, code) = run_command(&["--bogus"]);
    assert_eq!(code, 1);
}

#[test]
fn test_help() {
    let (_, stderr, code) = run_command(&["--help"]);
    assert!(stderr.contains("Usage: quadcell"));
    assert_eq!(code, 0);
}
