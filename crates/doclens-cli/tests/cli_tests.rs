use std::io::Write;

use assert_cmd::Command;
use doclens_testing::{MockBackend, payloads};
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn pdf_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("report")
        .suffix(".pdf")
        .tempfile()
        .unwrap();
    file.write_all(b"%PDF-1.4\n%fake content for upload\n")
        .unwrap();
    file
}

fn doclens() -> Command {
    Command::cargo_bin("doclens").unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn analyze_renders_sparse_analytics_with_defaults() {
    let backend = MockBackend::start().await;
    backend.mount_analyze(payloads::sparse_analysis_response()).await;
    let file = pdf_file();

    let uri = backend.uri();
    tokio::task::spawn_blocking(move || {
        doclens()
            .args(["--backend-url", &uri, "analyze"])
            .arg(file.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Document Type: Invoice"))
            .stdout(predicate::str::contains("Total Tokens: 1,500"))
            .stdout(predicate::str::contains("API Calls: 3"))
            .stdout(predicate::str::contains("Estimated Cost: $0.000000"))
            .stdout(predicate::str::contains("[1] start"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn analyze_renders_full_report() {
    let backend = MockBackend::start().await;
    backend.mount_analyze(payloads::full_analysis_response()).await;
    let file = pdf_file();

    let uri = backend.uri();
    tokio::task::spawn_blocking(move || {
        doclens()
            .args(["--backend-url", &uri, "analyze"])
            .arg(file.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Analysis complete:"))
            .stdout(predicate::str::contains(".pdf (0.00 MB)"))
            .stdout(predicate::str::contains("Key Sections"))
            .stdout(predicate::str::contains(
                "Agent Execution: 3 successful, 0 failed",
            ))
            .stdout(predicate::str::contains(
                "Thinking Process: classifier -> extractor -> summarizer (3 steps)",
            ))
            .stdout(predicate::str::contains("Call 4: prompt 700"))
            .stdout(predicate::str::contains("Processing Time: 14.62s"))
            .stdout(predicate::str::contains("Analytics (session f3b9c2a1...)"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn analyze_emits_json_when_requested() {
    let backend = MockBackend::start().await;
    backend.mount_analyze(payloads::sparse_analysis_response()).await;
    let file = pdf_file();

    let uri = backend.uri();
    tokio::task::spawn_blocking(move || {
        let output = doclens()
            .args(["--backend-url", &uri, "--format", "json", "analyze"])
            .arg(file.path())
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["document_type"], "Invoice");
        assert_eq!(parsed["analytics"]["token_usage"]["total_tokens"], 1500);
        assert_eq!(parsed["analytics"]["token_usage"]["estimated_cost_usd"], 0.0);
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn analyze_rejects_non_pdf_before_any_request() {
    let backend = MockBackend::start().await;
    // Nothing mounted: a request would fail the test via a 404 error path,
    // but the candidate must be rejected before the network is touched.
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"plain text").unwrap();

    let uri = backend.uri();
    tokio::task::spawn_blocking(move || {
        doclens()
            .args(["--backend-url", &uri, "analyze"])
            .arg(file.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("PDF"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn analyze_surfaces_backend_status_text() {
    let backend = MockBackend::start().await;
    backend.mount_analyze_failure(500).await;
    let file = pdf_file();

    let uri = backend.uri();
    tokio::task::spawn_blocking(move || {
        doclens()
            .args(["--backend-url", &uri, "analyze"])
            .arg(file.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Analysis failed"))
            .stderr(predicate::str::contains("Internal Server Error"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn history_renders_summary_and_sessions() {
    let backend = MockBackend::start().await;
    backend.mount_sessions(payloads::session_list()).await;
    backend.mount_summary(payloads::history_summary()).await;

    let uri = backend.uri();
    tokio::task::spawn_blocking(move || {
        doclens()
            .args(["--backend-url", &uri, "history"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Total Sessions: 12"))
            .stdout(predicate::str::contains("Total Tokens Used: 48,120"))
            .stdout(predicate::str::contains("Total Cost: $0.0007"))
            .stdout(predicate::str::contains("report.pdf [SUCCESS]"))
            .stdout(predicate::str::contains("contract.pdf [PARTIAL]"))
            .stdout(predicate::str::contains("Agents: 2/3"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn history_with_sparse_summary_shows_zeroed_totals() {
    let backend = MockBackend::start().await;
    backend
        .mount_sessions(serde_json::json!({"sessions": []}))
        .await;
    backend.mount_summary(payloads::sparse_history_summary()).await;

    let uri = backend.uri();
    tokio::task::spawn_blocking(move || {
        doclens()
            .args(["--backend-url", &uri, "history"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Total Sessions: 12"))
            .stdout(predicate::str::contains("Total Tokens Used: 0"))
            .stdout(predicate::str::contains("Total Cost: $0.0000"))
            .stdout(predicate::str::contains("Avg Duration: 0.0s"))
            .stdout(predicate::str::contains("No sessions found"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn history_degrades_without_summary() {
    let backend = MockBackend::start().await;
    backend.mount_sessions(payloads::session_list()).await;
    backend.mount_summary_failure(500).await;

    let uri = backend.uri();
    tokio::task::spawn_blocking(move || {
        doclens()
            .args(["--backend-url", &uri, "history"])
            .assert()
            .success()
            .stdout(predicate::str::contains("report.pdf [SUCCESS]"))
            .stdout(predicate::str::contains("Total Sessions:").not());
    })
    .await
    .unwrap();
}
