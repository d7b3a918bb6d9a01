use doclens_types::{AnalysisResult, UploadCandidate};
use tokio::sync::Mutex;

use crate::api::BackendClient;

/// Lifecycle of a single document-analysis submission.
///
/// `Failed` and `Succeeded` are stable resting states: the controller never
/// auto-resets, only a new selection or re-submission moves it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Idle,
    CandidateSelected,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of a `select_candidate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Accepted,
    /// Inline message; the previously accepted candidate (if any) is kept.
    Rejected(String),
}

/// Result of a `submit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request completed and the result was stored.
    Completed,
    /// Transport failure or non-success status; message is human-readable.
    Failed(String),
    /// No candidate selected, or a submission was already in flight.
    Skipped,
}

/// Point-in-time copy of the controller state, for rendering.
#[derive(Debug, Clone)]
pub struct RequestSnapshot {
    pub phase: RequestPhase,
    pub candidate: Option<UploadCandidate>,
    pub selection_error: Option<String>,
    pub result: Option<AnalysisResult>,
    pub failure: Option<String>,
}

#[derive(Debug)]
struct RequestState {
    phase: RequestPhase,
    candidate: Option<UploadCandidate>,
    selection_error: Option<String>,
    result: Option<AnalysisResult>,
    failure: Option<String>,
}

/// Owns the candidate, the in-flight guard, and the last result.
///
/// At most one submission may be outstanding; `submit` while `Submitting`
/// is a guaranteed no-op, not a queued retry. All state is replaced on
/// transition, never mutated in place by callers.
pub struct AnalysisRequestController {
    backend: BackendClient,
    state: Mutex<RequestState>,
}

impl AnalysisRequestController {
    pub fn new(backend: BackendClient) -> Self {
        Self {
            backend,
            state: Mutex::new(RequestState {
                phase: RequestPhase::Idle,
                candidate: None,
                selection_error: None,
                result: None,
                failure: None,
            }),
        }
    }

    /// Offer a candidate for the next submission.
    ///
    /// Non-PDF candidates are rejected with an inline message and leave the
    /// current candidate and lifecycle phase untouched. An accepted
    /// candidate clears any prior selection error and replaces the previous
    /// candidate wholesale.
    pub async fn select_candidate(&self, candidate: UploadCandidate) -> SelectionOutcome {
        let mut state = self.state.lock().await;

        match candidate.validate() {
            Ok(()) => {
                state.selection_error = None;
                state.candidate = Some(candidate);
                if state.phase != RequestPhase::Submitting {
                    state.phase = RequestPhase::CandidateSelected;
                }
                SelectionOutcome::Accepted
            }
            Err(err) => {
                let message = err.to_string();
                state.selection_error = Some(message.clone());
                SelectionOutcome::Rejected(message)
            }
        }
    }

    /// Submit the current candidate.
    ///
    /// No-op unless a candidate is present and nothing is in flight. On
    /// success the previous result is fully replaced; on failure the
    /// candidate is preserved so the user can retry without re-selecting.
    /// The call holds no lock across the network await, so concurrent
    /// callers observe the `Submitting` guard and skip.
    pub async fn submit(&self, content: Vec<u8>, user_question: Option<&str>) -> SubmitOutcome {
        let candidate = {
            let mut state = self.state.lock().await;
            if state.phase == RequestPhase::Submitting {
                return SubmitOutcome::Skipped;
            }
            let Some(candidate) = state.candidate.clone() else {
                return SubmitOutcome::Skipped;
            };
            state.phase = RequestPhase::Submitting;
            state.failure = None;
            candidate
        };

        match self
            .backend
            .analyze_document(&candidate, content, user_question)
            .await
        {
            Ok(result) => {
                let mut state = self.state.lock().await;
                state.result = Some(result);
                state.phase = RequestPhase::Succeeded;
                SubmitOutcome::Completed
            }
            Err(err) => {
                let message = format!("Analysis failed: {}", err);
                let mut state = self.state.lock().await;
                state.failure = Some(message.clone());
                state.phase = RequestPhase::Failed;
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub async fn phase(&self) -> RequestPhase {
        self.state.lock().await.phase
    }

    pub async fn snapshot(&self) -> RequestSnapshot {
        let state = self.state.lock().await;
        RequestSnapshot {
            phase: state.phase,
            candidate: state.candidate.clone(),
            selection_error: state.selection_error.clone(),
            result: state.result.clone(),
            failure: state.failure.clone(),
        }
    }
}
