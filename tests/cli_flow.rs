mod common;

use clap::Parser;
use common::{single_candidate, spawn_stub, unreachable_base_url};
use resume_client::cli::{handle_command, Cli};
use resume_client::web::export_csv;
use resume_client::Candidate;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use tempfile::TempDir;

/// Empty config file so a `resume-client.yaml` in the working directory is never read.
fn empty_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "").unwrap();
    path
}

fn cli(base_url: &str, config: &Path, args: &[&str]) -> Cli {
    let mut argv = vec![
        "resume-client".to_string(),
        "--base-url".to_string(),
        base_url.to_string(),
        "--config".to_string(),
        config.display().to_string(),
    ];
    argv.extend(args.iter().map(|a| a.to_string()));
    Cli::try_parse_from(argv).unwrap()
}

#[tokio::test]
async fn test_match_writes_csv_and_html_outputs() {
    let (stub, base_url) = spawn_stub().await;
    let reply = single_candidate("Ada <Lovelace>", json!(["Rust", "SQL"]), 0.8667);
    stub.reply_to("Senior backend engineer", reply.clone());

    let dir = tempfile::tempdir().unwrap();
    let config = empty_config(&dir);
    let csv_path = dir.path().join("out/ranked.csv");
    let html_path = dir.path().join("out/ranked.html");

    let result = handle_command(cli(
        &base_url,
        &config,
        &[
            "match",
            "Senior backend engineer",
            "--csv",
            csv_path.to_str().unwrap(),
            "--html",
            html_path.to_str().unwrap(),
        ],
    ))
    .await;

    assert!(result.is_ok());
    assert_eq!(stub.match_calls.load(Ordering::SeqCst), 1);

    let candidates: Vec<Candidate> =
        serde_json::from_value(reply["candidates"].clone()).unwrap();
    let mut expected = Vec::new();
    export_csv(&candidates, &mut expected).unwrap();
    assert_eq!(std::fs::read(&csv_path).unwrap(), expected);

    let html = std::fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("Ada &lt;Lovelace&gt;"));
    assert!(html.contains("87%"));
    assert!(!html.contains("<Lovelace>"));
}

#[tokio::test]
async fn test_match_from_file_with_no_matches_writes_header_only_csv() {
    let (stub, base_url) = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let config = empty_config(&dir);
    let description = dir.path().join("jd.txt");
    std::fs::write(&description, "Rust").unwrap();
    let csv_path = dir.path().join("ranked.csv");

    let result = handle_command(cli(
        &base_url,
        &config,
        &[
            "match",
            "--file",
            description.to_str().unwrap(),
            "--csv",
            csv_path.to_str().unwrap(),
        ],
    ))
    .await;

    assert!(result.is_ok());
    assert_eq!(
        *stub.match_bodies.lock().unwrap(),
        vec![json!({ "job_description": "Rust" })]
    );
    let mut expected = Vec::new();
    export_csv(&[], &mut expected).unwrap();
    assert_eq!(std::fs::read(&csv_path).unwrap(), expected);
}

#[tokio::test]
async fn test_match_transport_failure_writes_no_output() {
    let base_url = unreachable_base_url().await;
    let dir = tempfile::tempdir().unwrap();
    let config = empty_config(&dir);
    let csv_path = dir.path().join("ranked.csv");
    let html_path = dir.path().join("ranked.html");

    let result = handle_command(cli(
        &base_url,
        &config,
        &[
            "-v",
            "match",
            "Data engineer",
            "--csv",
            csv_path.to_str().unwrap(),
            "--html",
            html_path.to_str().unwrap(),
        ],
    ))
    .await;

    assert!(result.is_ok());
    assert!(!csv_path.exists());
    assert!(!html_path.exists());
}

#[tokio::test]
async fn test_blank_match_sends_nothing() {
    let (stub, base_url) = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let config = empty_config(&dir);
    let csv_path = dir.path().join("ranked.csv");

    let result = handle_command(cli(
        &base_url,
        &config,
        &["match", "   ", "--csv", csv_path.to_str().unwrap()],
    ))
    .await;

    assert!(result.is_ok());
    assert_eq!(stub.match_calls.load(Ordering::SeqCst), 0);
    assert!(!csv_path.exists());
}

#[tokio::test]
async fn test_upload_of_missing_path_sends_nothing() {
    let (stub, base_url) = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let config = empty_config(&dir);
    let missing = dir.path().join("no-such-resume.pdf");

    let result = handle_command(cli(
        &base_url,
        &config,
        &["upload", missing.to_str().unwrap()],
    ))
    .await;

    assert!(result.is_ok());
    assert_eq!(stub.upload_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_upload_sends_file_contents() {
    let (stub, base_url) = spawn_stub().await;
    let dir = tempfile::tempdir().unwrap();
    let config = empty_config(&dir);
    let resume = dir.path().join("resume.pdf");
    std::fs::write(&resume, b"%PDF-1.4 resume").unwrap();

    let result = handle_command(cli(
        &base_url,
        &config,
        &["upload", resume.to_str().unwrap(), "--verbose"],
    ))
    .await;

    assert!(result.is_ok());
    assert_eq!(stub.upload_calls.load(Ordering::SeqCst), 1);
    let uploaded = stub.uploaded.lock().unwrap();
    assert_eq!(uploaded[0].field, "file");
    assert_eq!(uploaded[0].file_name.as_deref(), Some("resume.pdf"));
    assert_eq!(uploaded[0].bytes, b"%PDF-1.4 resume".to_vec());
}
