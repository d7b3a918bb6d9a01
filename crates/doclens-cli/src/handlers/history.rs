use anyhow::Result;
use doclens_client::{BackendClient, HistoryAggregator, SessionHistoryController};

use crate::args::OutputFormat;
use crate::presentation::presenters::present_history;
use crate::presentation::renderer::render;

pub async fn handle(backend: BackendClient, limit: usize, format: OutputFormat) -> Result<()> {
    let aggregator = HistoryAggregator::new(backend);
    let mut controller = SessionHistoryController::new(aggregator);

    let view = controller.enter(limit).await;
    let view_model = present_history(view);
    render(&view_model, format)
}
