use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("keygen").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn write_settings(home: &TempDir, line: &str) {
    let dir = home.path().join(".config/keygen");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("settings"), line).unwrap();
}

fn stdout_lines(home: &TempDir, args: &[&str]) -> Vec<String> {
    let out = cmd(home).args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap().lines().map(String::from).collect()
}

#[test]
fn prints_one_key_of_requested_length() {
    let home = TempDir::new().unwrap();
    let lines = stdout_lines(&home, &["-l", "24"]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].chars().count(), 24);
}

#[test]
fn number_flag_prints_several_keys() {
    let home = TempDir::new().unwrap();
    let lines = stdout_lines(&home, &["-l", "10", "-n", "4"]);
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.chars().count() == 10));
}

#[test]
fn exclusions_and_disabled_pools_are_honoured() {
    let home = TempDir::new().unwrap();
    let lines = stdout_lines(&home, &["-l", "200", "--no-letters", "--no-symbols", "-x", "0123"]);
    assert!(lines[0].chars().all(|c| ('4'..='9').contains(&c)));
}

#[test]
fn unused_exclusions_are_reported_unless_quiet() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["-l", "5", "--no-symbols", "-x", "!a"])
        .assert()
        .success()
        .stderr(contains("were not blacklisted").and(contains("!")));
    cmd(&home)
        .args(["-q", "-l", "5", "--no-symbols", "-x", "!a"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_length_fails() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["-n", "2"])
        .assert()
        .failure()
        .stderr(contains("'keyLength'"));
}

#[test]
fn non_positive_length_fails() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["-l", "-4"])
        .assert()
        .failure()
        .stderr(contains("greater than 0"));
}

#[test]
fn oversized_length_fails_cleanly() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["-l", "99999999999999"])
        .assert()
        .code(1)
        .stderr(contains("must be at most"));
}

#[test]
fn zero_keys_still_validates_pools() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["-n", "0", "--no-digits", "--no-letters", "--no-symbols"])
        .assert()
        .failure()
        .stderr(contains("All character sets are empty"));
    cmd(&home)
        .args(["-l", "8", "-n", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("number of keys"));
}

#[test]
fn empty_pools_fail() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["-l", "8", "--no-digits", "--no-letters", "--no-symbols"])
        .assert()
        .failure()
        .stderr(contains("All character sets are empty"));
}

#[test]
fn saved_settings_round_trip() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["-l", "12", "-n", "2", "-x", "abc", "--save"])
        .assert()
        .success();
    assert!(home.path().join(".config/keygen/settings").exists());

    let lines = stdout_lines(&home, &["-s"]);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.chars().count() == 12));
    assert!(lines.iter().all(|l| !l.contains(['a', 'b', 'c'])));
}

#[test]
fn corrupt_saved_settings_fall_back_to_defaults() {
    let home = TempDir::new().unwrap();
    write_settings(&home, "garbage\n");
    let lines = stdout_lines(&home, &["-s"]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].chars().count(), 16);
    let rewritten = fs::read_to_string(home.path().join(".config/keygen/settings")).unwrap();
    assert_eq!(rewritten, "16,1,\n");
}

#[test]
fn saved_zero_length_fails() {
    let home = TempDir::new().unwrap();
    write_settings(&home, "0,1,\n");
    cmd(&home)
        .arg("-s")
        .assert()
        .failure()
        .stderr(contains("greater than 0"));
}

#[test]
fn saved_oversized_length_fails() {
    let home = TempDir::new().unwrap();
    write_settings(&home, "99999999999999,1,\n");
    cmd(&home)
        .arg("-s")
        .assert()
        .code(1)
        .stderr(contains("must be at most"));
}

#[test]
fn unreadable_settings_warn_unless_quiet() {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join(".config/keygen/settings")).unwrap();
    cmd(&home)
        .args(["-s", "-l", "5"])
        .assert()
        .success()
        .stderr(contains("Failed to load settings"));
    cmd(&home)
        .args(["-q", "-s", "-l", "5"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn piped_interactive_session() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .write_stdin("0123456789\n9\n5\n")
        .assert()
        .success()
        .stdout(contains("Welcome to").and(contains("Your password is:")));
}
