//! CLI contract tests
//!
//! Runs the phishguard binary the way a user would and checks output,
//! formats, and exit codes.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const PHISHING_TEXT: &str =
    "URGENT: Verify your account now! Click http://bit.ly/xyz or your account will face suspension.";
const LEGITIMATE_TEXT: &str = "Hi team, attaching the quarterly report for review.";

fn shipped_model() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models/phishguard-v1.json")
}

fn write_mail(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

fn run_phishguard(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_phishguard"))
        .arg("--model")
        .arg(shipped_model())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run phishguard");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn test_scan_text_output() {
    let dir = tempfile::tempdir().unwrap();
    write_mail(dir.path(), "phish.txt", PHISHING_TEXT);
    write_mail(dir.path(), "ok.txt", LEGITIMATE_TEXT);

    let (code, stdout, _) = run_phishguard(dir.path(), &["scan", "phish.txt", "ok.txt"]);
    assert_eq!(code, 0, "scan without --fail-on-phishing should exit 0");
    assert!(stdout.contains("Phishing Email Detected!"), "{stdout}");
    assert!(stdout.contains("Legitimate Email"), "{stdout}");
    assert!(stdout.contains("phish.txt"));
    assert!(stdout.contains("ok.txt"));
}

#[test]
fn test_scan_json_output() {
    let dir = tempfile::tempdir().unwrap();
    write_mail(dir.path(), "phish.txt", PHISHING_TEXT);

    let (code, stdout, _) =
        run_phishguard(dir.path(), &["scan", "phish.txt", "--format", "json"]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON");
    let verdicts = v["verdicts"].as_array().unwrap();
    assert_eq!(verdicts.len(), 1);
    assert_eq!(verdicts[0]["label"], "phishing");
    assert_eq!(verdicts[0]["source"], "phish.txt");
    assert_eq!(v["summary"]["phishing"], 1);
    assert_eq!(v["summary"]["legitimate"], 0);
}

#[test]
fn test_fail_on_phishing_exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    write_mail(dir.path(), "phish.txt", PHISHING_TEXT);
    write_mail(dir.path(), "ok.txt", LEGITIMATE_TEXT);

    let (code, _, _) =
        run_phishguard(dir.path(), &["scan", "phish.txt", "--fail-on-phishing"]);
    assert_eq!(code, 1, "--fail-on-phishing should exit 1 on a phishing verdict");

    let (code, _, _) = run_phishguard(dir.path(), &["scan", "ok.txt", "--fail-on-phishing"]);
    assert_eq!(code, 0, "--fail-on-phishing should exit 0 when all inputs are clean");
}

#[test]
fn test_scan_empty_input_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_mail(dir.path(), "empty.txt", "   \n");

    let (code, stdout, _) = run_phishguard(dir.path(), &["scan", "empty.txt"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Please enter some email text."), "{stdout}");
}

#[test]
fn test_scan_output_file() {
    let dir = tempfile::tempdir().unwrap();
    write_mail(dir.path(), "phish.txt", PHISHING_TEXT);

    let (code, _, _) = run_phishguard(
        dir.path(),
        &["scan", "phish.txt", "--format", "json", "--output", "report.json"],
    );
    assert_eq!(code, 0);
    let written = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(v["summary"]["phishing"], 1);
}

#[test]
fn test_scan_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_phishguard"))
        .arg("--model")
        .arg(shipped_model())
        .args(["scan", "-", "--format", "json"])
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(PHISHING_TEXT.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Invalid JSON");
    assert_eq!(v["verdicts"][0]["source"], "stdin");
    assert_eq!(v["verdicts"][0]["label"], "phishing");
}

#[test]
fn test_normalize_command() {
    let dir = tempfile::tempdir().unwrap();
    write_mail(dir.path(), "mail.txt", "Running FLIES jumped!");

    let (code, stdout, _) = run_phishguard(dir.path(), &["normalize", "mail.txt"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "run fli jump");
}

#[test]
fn test_doctor_with_shipped_model() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_phishguard(dir.path(), &["doctor"]);
    assert_eq!(code, 0, "{stdout}");
    assert!(stdout.contains("Model artifact: OK"));
    assert!(stdout.contains("Linguistic resources: OK"));
}

#[test]
fn test_missing_model_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_mail(dir.path(), "mail.txt", PHISHING_TEXT);

    let output = Command::new(env!("CARGO_BIN_EXE_phishguard"))
        .args(["--model", "/nonexistent/model.json", "scan", "mail.txt"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("model artifact"), "{stderr}");
}

#[test]
fn test_unknown_config_format_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_mail(dir.path(), "mail.txt", LEGITIMATE_TEXT);
    // A typo in the config must error instead of silently rendering text.
    std::fs::write(dir.path().join("phishguard.toml"), "[output]\nformat = \"jsn\"\n").unwrap();

    let (code, _, stderr) = run_phishguard(dir.path(), &["scan", "mail.txt"]);
    assert_ne!(code, 0, "invalid format should be fatal");
    assert!(stderr.contains("Unknown format"), "{stderr}");
}

#[test]
fn test_init_writes_config() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_phishguard(dir.path(), &["init"]);
    assert_eq!(code, 0);
    let contents = std::fs::read_to_string(dir.path().join("phishguard.toml")).unwrap();
    assert!(contents.contains("[model]"));

    // Second run must not clobber the existing file.
    std::fs::write(dir.path().join("phishguard.toml"), "# edited\n").unwrap();
    let (code, _, _) = run_phishguard(dir.path(), &["init"]);
    assert_eq!(code, 0);
    let contents = std::fs::read_to_string(dir.path().join("phishguard.toml")).unwrap();
    assert_eq!(contents, "# edited\n");
}
