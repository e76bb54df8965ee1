//! Integration tests for the `infer-metadata` CLI binary.

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const CATALOG: &str = r#"{"tags":["golang","python","standards"],"steps":["implementer","qa"],"kinds":["service","api"]}"#;

fn infer_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_infer-metadata"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Result<Output, Box<dyn std::error::Error>> {
    let mut child = infer_cmd()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or("missing stdin pipe")?
        .write_all(stdin.as_bytes())?;
    Ok(child.wait_with_output()?)
}

fn stderr_payload(output: &Output) -> Result<Value, Box<dyn std::error::Error>> {
    let stderr = String::from_utf8(output.stderr.clone())?;
    let line = stderr.lines().last().ok_or("empty stderr")?;
    Ok(serde_json::from_str(line)?)
}

#[test]
fn test_stdin_source() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_with_stdin(
        &["-", CATALOG],
        "This is a golang service with func main() {}",
    )?;

    assert!(
        output.status.success(),
        "infer-metadata failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["tags"], serde_json::json!(["golang"]));
    assert_eq!(payload["steps"], serde_json::json!([]));
    assert_eq!(payload["kinds"], serde_json::json!([]));
    assert_eq!(payload["confidence"]["tags"]["golang"], serde_json::json!(0.5));
    assert_eq!(payload["stats"]["content_length"], serde_json::json!(44));
    assert_eq!(payload["stats"]["tags_found"], serde_json::json!(1));
    Ok(())
}

#[test]
fn test_file_source_with_code_block() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let doc = tmp.path().join("guide.md");
    fs::write(
        &doc,
        "# Guía de estándar\n\nREST API endpoint over HTTP.\n\n```go\npackage main\n\nfunc main() {}\n```\n",
    )?;

    let output = infer_cmd()
        .arg(&doc)
        .arg(CATALOG)
        .stdin(Stdio::null())
        .output()?;
    assert!(output.status.success());

    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["tags"], serde_json::json!(["golang", "standards"]));
    assert_eq!(payload["steps"], serde_json::json!(["implementer"]));
    assert_eq!(
        payload["confidence"]["steps"]["implementer"],
        serde_json::json!(0.9)
    );
    assert_eq!(payload["kinds"], serde_json::json!(["api"]));
    assert_eq!(payload["confidence"]["kinds"]["api"], serde_json::json!(1.0));
    Ok(())
}

#[test]
fn test_pretty_output_is_indented() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_with_stdin(&["-", CATALOG], "")?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("{\n  \"tags\": []"));
    assert!(stdout.contains("\"content_length\": 0"));
    Ok(())
}

#[test]
fn test_compact_output() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_with_stdin(&["--output", "json", "-", CATALOG], "plan")?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.trim_end().lines().count(), 1);
    Ok(())
}

#[test]
fn test_identical_runs_identical_output() -> Result<(), Box<dyn std::error::Error>> {
    let text = "Security review of the auth pattern.\n```\ntest\n```\nBackend service API.";
    let first = run_with_stdin(&["-", CATALOG], text)?;
    let second = run_with_stdin(&["-", CATALOG], text)?;
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    Ok(())
}

#[test]
fn test_malformed_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_with_stdin(&["-", "{not json"], "golang")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let payload = stderr_payload(&output)?;
    let error = payload["error"].as_str().ok_or("missing error")?;
    assert!(error.starts_with("JSON parse failed: "));
    assert!(payload.get("cause").is_some());
    Ok(())
}

#[test]
fn test_missing_catalog_keys() -> Result<(), Box<dyn std::error::Error>> {
    let output = run_with_stdin(&["-", r#"{"tags":[]}"#], "golang")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let payload = stderr_payload(&output)?;
    assert_eq!(payload["error"], "Missing keys: steps, kinds");
    Ok(())
}

#[test]
fn test_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let output = infer_cmd()
        .arg(tmp.path().join("absent.md"))
        .arg(CATALOG)
        .stdin(Stdio::null())
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let payload = stderr_payload(&output)?;
    let error = payload["error"].as_str().ok_or("missing error")?;
    assert!(error.starts_with("Read failed: File not found"));
    assert!(payload["cause"].as_str().is_some());
    Ok(())
}

#[test]
fn test_wrong_argument_count() -> Result<(), Box<dyn std::error::Error>> {
    for args in [vec![], vec!["-"], vec!["-", CATALOG, "extra"]] {
        let output = infer_cmd().args(&args).stdin(Stdio::null()).output()?;

        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(output.stdout.is_empty());
        let payload = stderr_payload(&output)?;
        assert_eq!(payload["error"], "Invalid arguments");
        assert_eq!(payload["usage"], "infer-metadata <file|-> <catalogs_json>");
    }
    Ok(())
}

#[test]
fn test_file_with_nul_byte_is_classified() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let doc = tmp.path().join("nul.md");
    fs::write(&doc, "golang func main\0 trailing")?;

    let output = infer_cmd()
        .arg(&doc)
        .arg(r#"{"tags":["golang"],"steps":[],"kinds":[]}"#)
        .stdin(Stdio::null())
        .output()?;

    assert!(
        output.status.success(),
        "infer-metadata failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["tags"], serde_json::json!(["golang"]));
    Ok(())
}

#[test]
fn test_crlf_file_content_length() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let doc = tmp.path().join("crlf.md");
    fs::write(&doc, "a\r\nb\r\n")?;

    let output = infer_cmd()
        .arg(&doc)
        .arg(CATALOG)
        .stdin(Stdio::null())
        .output()?;
    assert!(output.status.success());

    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["stats"]["content_length"], serde_json::json!(4));
    Ok(())
}

#[test]
fn test_path_starting_with_hyphen() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("-notes.md"), "golang func main")?;

    let output = infer_cmd()
        .current_dir(tmp.path())
        .arg("-notes.md")
        .arg(CATALOG)
        .stdin(Stdio::null())
        .output()?;

    assert!(
        output.status.success(),
        "infer-metadata failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["tags"], serde_json::json!(["golang"]));
    assert_eq!(payload["stats"]["content_length"], serde_json::json!(16));
    Ok(())
}
