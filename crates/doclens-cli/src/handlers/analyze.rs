use std::path::Path;

use anyhow::{Result, anyhow, bail};
use doclens_client::{
    AnalysisRequestController, BackendClient, SelectionOutcome, SubmitOutcome,
};
use doclens_types::UploadCandidate;

use crate::args::OutputFormat;
use crate::presentation::presenters::present_analysis;
use crate::presentation::renderer::render_with_badge;

pub async fn handle(
    backend: BackendClient,
    path: &Path,
    question: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let candidate = UploadCandidate::from_path(path)?;
    let badge = format!(
        "Analysis complete: {} ({:.2} MB)",
        candidate.name,
        candidate.size_mb()
    );
    let controller = AnalysisRequestController::new(backend);

    if let SelectionOutcome::Rejected(message) = controller.select_candidate(candidate).await {
        bail!("{}", message);
    }

    let content = tokio::fs::read(path).await?;
    match controller.submit(content, question.as_deref()).await {
        SubmitOutcome::Completed => {
            let snapshot = controller.snapshot().await;
            let result = snapshot
                .result
                .ok_or_else(|| anyhow!("submission completed without a stored result"))?;
            let view = present_analysis(&result);
            render_with_badge(&badge, &view, format)
        }
        SubmitOutcome::Failed(message) => bail!("{}", message),
        SubmitOutcome::Skipped => Ok(()),
    }
}
