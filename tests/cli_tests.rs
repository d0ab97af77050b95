use assert_cmd::Command;
use regex::Regex;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup(ciphertext: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("original.txt"), ciphertext).unwrap();
    fs::write(
        dir.path().join("freqs.csv"),
        "Letra,Freq\nO,10.73\nA,14.63\nE,12.57\n",
    )
    .unwrap();
    dir
}

fn freqcrack(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("freqcrack").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_cli_default_run_uses_fixed_file_names() {
    let dir = setup("Bbb aa C");
    let output = freqcrack(dir.path()).output().expect("Failed");
    assert!(output.status.success());

    let root = dir.path();
    assert_eq!(fs::read_to_string(root.join("decodificado.txt")).unwrap(), "Aaa ee O");
    assert_eq!(fs::read_to_string(root.join("freqs.csv")).unwrap(), "Letra\nA\nE\nO\n");
    assert_eq!(
        fs::read_to_string(root.join("freq_cipher.csv")).unwrap(),
        "Letra\nB\nA\nC\n"
    );
    assert!(root.join("freq_cipher.csv.sha256").exists());

    // Substitution lines only appear with `decode --trace`.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains(" -> #"), "stdout was: {}", stdout);
}

#[test]
fn test_cli_trace_prints_every_substitution() {
    let dir = setup("Bb a");
    let output = freqcrack(dir.path())
        .args(["decode", "--trace"])
        .output()
        .expect("Failed");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let re = Regex::new(r"(?m)^(\S) -> #(\d+) -> (\S)$").unwrap();
    let lines: Vec<(String, String, String)> = re
        .captures_iter(&stdout)
        .map(|c| (c[1].to_string(), c[2].to_string(), c[3].to_string()))
        .collect();

    assert_eq!(
        lines,
        vec![
            ("B".into(), "0".into(), "A".into()),
            ("b".into(), "0".into(), "a".into()),
            ("a".into(), "1".into(), "e".into()),
        ]
    );
}

#[test]
fn test_cli_paths_are_overridable() {
    let dir = setup("");
    let root = dir.path();
    fs::write(root.join("secret.txt"), "zz y").unwrap();

    let output = freqcrack(root)
        .args(["--input", "secret.txt", "--output", "plain.txt"])
        .output()
        .expect("Failed");
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(root.join("plain.txt")).unwrap(), "aa e");
    assert!(!root.join("decodificado.txt").exists());
}

#[test]
fn test_cli_config_file_is_merged_under_flags() {
    let dir = setup("");
    let root = dir.path();
    fs::write(root.join("secret.txt"), "zz y").unwrap();
    fs::write(
        root.join("settings.json"),
        r#"{"paths": {"input": "secret.txt", "output": "from_file.txt"}}"#,
    )
    .unwrap();

    let output = freqcrack(root)
        .args(["decode", "--config", "settings.json", "--output", "from_cli.txt"])
        .output()
        .expect("Failed");
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(root.join("from_cli.txt")).unwrap(), "aa e");
    assert!(!root.join("from_file.txt").exists());
}

#[test]
fn test_cli_unknown_letter_fails_without_output() {
    let dir = setup("Bbb aa C");
    let root = dir.path();
    fs::write(root.join("freq_cipher.csv"), "Letra\nB\nA\n").unwrap();

    let output = freqcrack(root)
        .args(["--cache-policy", "trust"])
        .output()
        .expect("Failed");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'C'"), "stderr was: {}", stderr);
    assert!(stderr.contains("offset 7"), "stderr was: {}", stderr);
    assert!(!root.join("decodificado.txt").exists());
}

#[test]
fn test_cli_analyze_writes_cache_but_no_plaintext() {
    let dir = setup("Bbb aa C");
    let root = dir.path();
    let output = freqcrack(root).arg("analyze").output().expect("Failed");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("50.00"));
    assert!(root.join("freq_cipher.csv").exists());
    assert!(!root.join("decodificado.txt").exists());
}

#[test]
fn test_cli_analyze_top_limits_listed_ranks() {
    let dir = setup("Bbb aa C");
    let output = freqcrack(dir.path())
        .args(["analyze", "--top", "1"])
        .output()
        .expect("Failed");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("50.00"), "stdout was: {}", stdout);
    assert!(!stdout.contains("33.33"), "stdout was: {}", stdout);
    assert!(!stdout.contains("16.67"), "stdout was: {}", stdout);
}

#[test]
fn test_cli_analyze_honours_cache_policy() {
    let dir = setup("Bbb aa C");
    let root = dir.path();
    assert!(freqcrack(root).arg("analyze").output().unwrap().status.success());

    let cached = freqcrack(root).arg("analyze").output().expect("Failed");
    assert!(cached.status.success());
    let stdout = String::from_utf8_lossy(&cached.stdout);
    assert!(stdout.contains("from cache"), "stdout was: {}", stdout);
    assert!(!stdout.contains("50.00"), "stdout was: {}", stdout);

    let refreshed = freqcrack(root)
        .args(["analyze", "--cache-policy", "refresh"])
        .output()
        .expect("Failed");
    assert!(refreshed.status.success());
    assert!(String::from_utf8_lossy(&refreshed.stdout).contains("50.00"));
}
