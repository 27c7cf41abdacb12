//! Integration tests for the capdoc CLI
//!
//! Runs the built binary against temporary directories and checks the files
//! it writes, its report line and its exit status.

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};

/// Test helper to get the CLI binary path
fn get_cli_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_capdoc"))
}

fn setup_temp_dir() -> TempDir {
    tempdir().expect("Failed to create temp directory")
}

fn run_cli_command(args: &[&str]) -> Result<std::process::Output> {
    let output = Command::new(get_cli_path()).args(args).output()?;
    Ok(output)
}

/// Test helper to check if PDF file exists and has content
fn assert_pdf_exists_and_valid(path: &Path) {
    assert!(path.exists(), "PDF file should exist: {}", path.display());
    let content = fs::read(path).expect("Failed to read PDF file");
    assert!(content.len() > 1000, "PDF file should have content");
    assert!(
        content.starts_with(b"%PDF-1.4\n"),
        "File should start with PDF header"
    );
    assert!(
        content.ends_with(b"%%EOF\n"),
        "File should end with EOF marker"
    );
}

#[test]
fn test_cli_statement_command() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("capability-statement.pdf");

    let output = run_cli_command(&[
        "statement",
        "-o",
        output_path.to_str().unwrap(),
        "--date",
        "2026-02-14",
    ])
    .expect("CLI command should run");

    assert!(output.status.success(), "Command should succeed");
    assert_pdf_exists_and_valid(&output_path);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("Wrote {} (2 pages)", output_path.display())
    );
}

#[test]
fn test_cli_statement_is_reproducible_with_fixed_date() {
    let temp_dir = setup_temp_dir();
    let first = temp_dir.path().join("first.pdf");
    let second = temp_dir.path().join("second.pdf");

    for path in [&first, &second] {
        let output = run_cli_command(&[
            "statement",
            "-o",
            path.to_str().unwrap(),
            "-d",
            "2026-02-14",
        ])
        .unwrap();
        assert!(output.status.success());
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_cli_statement_with_content_file() {
    let temp_dir = setup_temp_dir();
    let content_path = temp_dir.path().join("content.json");
    let output_path = temp_dir.path().join("custom.pdf");
    fs::write(
        &content_path,
        r#"{
            "branding": {
                "title": "Acme Capability Statement",
                "subtitle": "Platform Engineering",
                "contact_line": "acme.example"
            },
            "intro": "Acme builds platforms.",
            "sections": [
                {"title": "Core Services", "entries": ["Cloud", "Security"], "kind": "bullets"}
            ]
        }"#,
    )
    .unwrap();

    let output = run_cli_command(&[
        "statement",
        "-o",
        output_path.to_str().unwrap(),
        "--content",
        content_path.to_str().unwrap(),
    ])
    .unwrap();

    assert!(output.status.success());
    assert_pdf_exists_and_valid(&output_path);

    let pdf = String::from_utf8_lossy(&fs::read(&output_path).unwrap()).to_string();
    assert!(pdf.contains("(Acme Capability Statement) Tj"));
    assert!(pdf.contains("(Core Services) Tj"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("(1 pages)"));
}

#[test]
fn test_cli_statement_with_malformed_content_fails() {
    let temp_dir = setup_temp_dir();
    let content_path = temp_dir.path().join("content.json");
    let output_path = temp_dir.path().join("never.pdf");
    fs::write(&content_path, "{ not json").unwrap();

    let output = run_cli_command(&[
        "statement",
        "-o",
        output_path.to_str().unwrap(),
        "--content",
        content_path.to_str().unwrap(),
    ])
    .unwrap();

    assert!(!output.status.success());
    assert!(!output_path.exists());
    assert!(String::from_utf8_lossy(&output.stderr).contains("reading content from"));
}

#[test]
fn test_cli_statement_into_missing_directory_fails() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("missing").join("statement.pdf");

    let output = run_cli_command(&["statement", "-o", output_path.to_str().unwrap()]).unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("writing"));
}

#[test]
fn test_cli_article_command() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("docs").join("article.md");

    let output = run_cli_command(&["article", "-o", output_path.to_str().unwrap()]).unwrap();

    assert!(output.status.success());
    let article = fs::read_to_string(&output_path).unwrap();
    assert!(article.starts_with("# Token and Key Security Design for WaterApps\n"));
    assert!(article.contains("_Generated at (UTC): "));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("Wrote article: {}", output_path.display())
    );
}

#[test]
fn test_cli_help() {
    let output = run_cli_command(&["--help"]).unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("statement"));
    assert!(stdout.contains("article"));
}

#[test]
fn test_cli_unknown_command() {
    let output = run_cli_command(&["merge"]).unwrap();
    assert!(!output.status.success());
}
