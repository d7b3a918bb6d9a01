use doclens_types::{AnalysisResult, HistorySummary, SessionListPayload, SessionRecord, UploadCandidate};
use reqwest::multipart;

use crate::error::{Error, Result};

/// HTTP client for the analysis backend.
///
/// Thin wrapper over `reqwest`: one method per endpoint, no retries, no
/// caching. The client carries no request timeout; an in-flight analysis
/// has no abort path, matching the backend contract.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Submit a document for analysis.
    ///
    /// Sends a single multipart request with the file under the `file` field
    /// and, when given, the user's question under `user_question`. A non-2xx
    /// response becomes `Error::Backend` carrying the status text.
    pub async fn analyze_document(
        &self,
        candidate: &UploadCandidate,
        content: Vec<u8>,
        user_question: Option<&str>,
    ) -> Result<AnalysisResult> {
        let part = multipart::Part::bytes(content)
            .file_name(candidate.name.clone())
            .mime_str(&candidate.media_type)?;

        let mut form = multipart::Form::new().part("file", part);
        if let Some(question) = user_question {
            form = form.text("user_question", question.to_string());
        }

        let response = self
            .http
            .post(format!("{}/analyze-pdf", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let response = expect_success(response)?;
        Ok(response.json().await?)
    }

    /// Fetch the most recent sessions, newest first, bounded by `limit`.
    ///
    /// The backend owns the ordering; this method does not re-sort. An
    /// absent or malformed `sessions` key normalizes to an empty list.
    pub async fn list_sessions(&self, limit: usize) -> Result<Vec<SessionRecord>> {
        let response = self
            .http
            .get(format!("{}/analytics/sessions", self.base_url))
            .query(&[("limit", limit)])
            .send()
            .await?;

        let response = expect_success(response)?;
        let body: serde_json::Value = response.json().await?;
        let payload: SessionListPayload = serde_json::from_value(body).unwrap_or_default();
        Ok(payload.sessions)
    }

    /// Fetch the aggregate history summary.
    pub async fn fetch_summary(&self) -> Result<HistorySummary> {
        let response = self
            .http
            .get(format!("{}/analytics/summary", self.base_url))
            .send()
            .await?;

        let response = expect_success(response)?;
        Ok(response.json().await?)
    }
}

fn expect_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Backend {
            status: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        })
    }
}
