//! Integration tests for the numagg CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DIFFERENCE: &str = "The difference of the first number and all others is";

/// Binary running inside `dir`, isolated from the user's config and environment
fn numagg(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("numagg").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("NUMAGG_INPUT__UNREADABLE")
        .env_remove("NUMAGG_INPUT__DEFAULT_FILE")
        .env_remove("NUMAGG_PARSE__MALFORMED");
    cmd
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().unwrap();
    numagg(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PATH"))
        .stdout(predicate::str::contains("--config"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().unwrap();
    numagg(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("numagg"));
}

/// Test the three aggregates of an explicit file
#[test]
fn test_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    fs::write(&input, "10 20\n5 -3\n").unwrap();

    numagg(temp_dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Start app"))
        .stdout(predicate::str::contains("Sum is 32"))
        .stdout(predicate::str::contains("XOR is -26"))
        .stdout(predicate::str::contains(format!("{} -12", DIFFERENCE)))
        .stdout(predicate::str::contains("Default filename").not());
}

/// Test falling back to numbers.txt in the working directory
#[test]
fn test_default_filename() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("numbers.txt"), "7\n").unwrap();

    numagg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Default filename: numbers.txt"))
        .stdout(predicate::str::contains("Sum is 7"))
        .stdout(predicate::str::contains("XOR is 7"))
        .stdout(predicate::str::contains(format!("{} 7", DIFFERENCE)));
}

/// Test an empty file yields zero everywhere
#[test]
fn test_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("empty.txt");
    fs::write(&input, "").unwrap();

    numagg(temp_dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum is 0"))
        .stdout(predicate::str::contains("XOR is 0"))
        .stdout(predicate::str::contains(format!("{} 0", DIFFERENCE)));
}

/// Test a missing file is reported by every worker without changing the exit code
#[test]
fn test_missing_file_reports_errors() {
    let temp_dir = TempDir::new().unwrap();

    numagg(temp_dir.path())
        .arg("absent.txt")
        .assert()
        .success()
        .stderr(predicate::str::contains("Sum failed: cannot open absent.txt"))
        .stderr(predicate::str::contains("XOR failed: cannot open absent.txt"))
        .stderr(predicate::str::contains("Subtract failed: cannot open absent.txt"))
        .stdout(predicate::str::contains("Sum is").not());
}

/// Test the zero policy for unreadable files via the environment
#[test]
fn test_missing_file_as_zero_from_env() {
    let temp_dir = TempDir::new().unwrap();

    numagg(temp_dir.path())
        .env("NUMAGG_INPUT__UNREADABLE", "zero")
        .arg("absent.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum is 0"))
        .stdout(predicate::str::contains("XOR is 0"))
        .stdout(predicate::str::contains(format!("{} 0", DIFFERENCE)));
}

/// Test malformed tokens under both policies
#[test]
fn test_malformed_token_policies() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("bad.txt");
    fs::write(&input, "1 x 3\n").unwrap();

    numagg(temp_dir.path())
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("malformed token `x` at line 1"));

    let config_file = temp_dir.path().join("lenient.toml");
    fs::write(&config_file, "[parse]\nmalformed = \"zero\"\n").unwrap();

    numagg(temp_dir.path())
        .arg("--config")
        .arg(&config_file)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum is 4"))
        .stdout(predicate::str::contains("XOR is 2"))
        .stdout(predicate::str::contains(format!("{} -2", DIFFERENCE)));
}

/// Test numagg.toml in the working directory changes the default file
#[test]
fn test_local_config_default_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("numagg.toml"),
        "[input]\ndefault_file = \"data.txt\"\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("data.txt"), "4 4 4\n").unwrap();

    numagg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Default filename: data.txt"))
        .stdout(predicate::str::contains("Sum is 12"))
        .stdout(predicate::str::contains("XOR is 4"))
        .stdout(predicate::str::contains(format!("{} -4", DIFFERENCE)));
}

/// Test a missing --config file fails the run
#[test]
fn test_missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    numagg(temp_dir.path())
        .arg("--config")
        .arg("nope.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

/// Test quiet mode keeps the results but drops informational lines
#[test]
fn test_quiet_mode() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("numbers.txt"), "1 2\n").unwrap();

    numagg(temp_dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sum is 3"))
        .stdout(predicate::str::contains("Start app").not())
        .stdout(predicate::str::contains("Default filename").not());
}
