use std::time::Duration;

use doclens_client::{
    AnalysisRequestController, BackendClient, RequestPhase, SelectionOutcome, SubmitOutcome,
};
use doclens_testing::{MockBackend, payloads};
use doclens_types::UploadCandidate;

fn pdf_candidate() -> UploadCandidate {
    UploadCandidate::new("report.pdf", 2 * 1024 * 1024, "application/pdf")
}

fn controller(backend: &MockBackend) -> AnalysisRequestController {
    AnalysisRequestController::new(BackendClient::new(backend.uri()))
}

#[tokio::test]
async fn successful_submission_stores_result() {
    let backend = MockBackend::start().await;
    backend.mount_analyze(payloads::sparse_analysis_response()).await;

    let controller = controller(&backend);
    assert_eq!(controller.phase().await, RequestPhase::Idle);

    let outcome = controller.select_candidate(pdf_candidate()).await;
    assert_eq!(outcome, SelectionOutcome::Accepted);
    assert_eq!(controller.phase().await, RequestPhase::CandidateSelected);

    let outcome = controller.submit(b"%PDF-1.4".to_vec(), None).await;
    assert_eq!(outcome, SubmitOutcome::Completed);

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.phase, RequestPhase::Succeeded);
    let result = snapshot.result.unwrap();
    assert_eq!(result.document_type, "Invoice");
    assert!(result.insights.is_empty());
    assert_eq!(result.agent_trace, ["start"]);
    // Candidate is not cleared by a completed submission.
    assert!(snapshot.candidate.is_some());
}

#[tokio::test]
async fn rejected_selection_keeps_previous_candidate() {
    let backend = MockBackend::start().await;
    let controller = controller(&backend);

    controller.select_candidate(pdf_candidate()).await;

    let rejected = UploadCandidate::new("notes.txt", 512, "text/plain");
    let outcome = controller.select_candidate(rejected).await;
    assert!(matches!(outcome, SelectionOutcome::Rejected(_)));

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.phase, RequestPhase::CandidateSelected);
    assert_eq!(snapshot.candidate.unwrap().name, "report.pdf");
    assert!(snapshot.selection_error.unwrap().contains("PDF"));
}

#[tokio::test]
async fn accepted_selection_clears_prior_error() {
    let backend = MockBackend::start().await;
    let controller = controller(&backend);

    let rejected = UploadCandidate::new("notes.txt", 512, "text/plain");
    controller.select_candidate(rejected).await;
    assert!(controller.snapshot().await.selection_error.is_some());

    controller.select_candidate(pdf_candidate()).await;
    let snapshot = controller.snapshot().await;
    assert!(snapshot.selection_error.is_none());
    assert_eq!(snapshot.candidate.unwrap().name, "report.pdf");
}

#[tokio::test]
async fn submit_without_candidate_is_a_noop() {
    let backend = MockBackend::start().await;
    backend.mount_analyze_slow(payloads::sparse_analysis_response(), Duration::ZERO, 0).await;

    let controller = controller(&backend);
    let outcome = controller.submit(b"%PDF-1.4".to_vec(), None).await;
    assert_eq!(outcome, SubmitOutcome::Skipped);
    assert_eq!(controller.phase().await, RequestPhase::Idle);
}

#[tokio::test]
async fn racing_submits_issue_exactly_one_request() {
    let backend = MockBackend::start().await;
    // Delayed response keeps the first submission in flight while the
    // second call observes the guard. The mock verifies exactly one hit.
    backend
        .mount_analyze_slow(
            payloads::sparse_analysis_response(),
            Duration::from_millis(200),
            1,
        )
        .await;

    let controller = controller(&backend);
    controller.select_candidate(pdf_candidate()).await;

    let (first, second) = tokio::join!(
        controller.submit(b"%PDF-1.4".to_vec(), None),
        controller.submit(b"%PDF-1.4".to_vec(), None),
    );

    let outcomes = [first, second];
    assert_eq!(
        outcomes
            .iter()
            .filter(|o| **o == SubmitOutcome::Completed)
            .count(),
        1
    );
    assert_eq!(
        outcomes
            .iter()
            .filter(|o| **o == SubmitOutcome::Skipped)
            .count(),
        1
    );
    assert_eq!(controller.phase().await, RequestPhase::Succeeded);
}

#[tokio::test]
async fn backend_failure_surfaces_status_text_and_preserves_candidate() {
    let backend = MockBackend::start().await;
    backend.mount_analyze_failure(500).await;

    let controller = controller(&backend);
    controller.select_candidate(pdf_candidate()).await;

    let outcome = controller.submit(b"%PDF-1.4".to_vec(), None).await;
    let SubmitOutcome::Failed(message) = outcome else {
        panic!("expected failure, got {:?}", outcome);
    };
    assert!(message.contains("Analysis failed"));
    assert!(message.contains("Internal Server Error"));

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.phase, RequestPhase::Failed);
    // Re-submittable without re-selecting.
    assert_eq!(snapshot.candidate.unwrap().name, "report.pdf");
    assert!(snapshot.result.is_none());
}

#[tokio::test]
async fn resubmission_after_failure_replaces_outcome() {
    let backend = MockBackend::start().await;
    backend.mount_analyze_failure(502).await;

    let controller = controller(&backend);
    controller.select_candidate(pdf_candidate()).await;
    let outcome = controller.submit(b"%PDF-1.4".to_vec(), None).await;
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));

    // Backend recovers.
    backend.server().reset().await;
    backend.mount_analyze(payloads::full_analysis_response()).await;

    let outcome = controller.submit(b"%PDF-1.4".to_vec(), None).await;
    assert_eq!(outcome, SubmitOutcome::Completed);

    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.phase, RequestPhase::Succeeded);
    assert!(snapshot.failure.is_none());
    assert_eq!(snapshot.result.unwrap().document_type, "Invoice");
}

#[tokio::test]
async fn new_result_replaces_previous_wholesale() {
    let backend = MockBackend::start().await;
    backend.mount_analyze(payloads::full_analysis_response()).await;

    let controller = controller(&backend);
    controller.select_candidate(pdf_candidate()).await;
    controller.submit(b"%PDF-1.4".to_vec(), None).await;
    let first = controller.snapshot().await.result.unwrap();
    assert_eq!(first.insights.len(), 2);

    backend.server().reset().await;
    backend.mount_analyze(payloads::analysis_response_without_analytics()).await;

    controller.submit(b"%PDF-1.4".to_vec(), None).await;
    let second = controller.snapshot().await.result.unwrap();
    assert_eq!(second.document_type, "Report");
    // No merge semantics: the old insights are gone.
    assert!(second.insights.is_empty());
    assert!(second.analytics.is_none());
}
