use doclens_analytics::{HistoryView, normalize_session, normalize_summary};

use crate::api::BackendClient;

/// Joins the two independent history reads into one view model.
///
/// Both reads are issued together and the combined result is published only
/// after both settle. Neither failure propagates: a failed session list
/// degrades to an empty list, a failed summary to `None`. The view never
/// shows a hard error page; backend outages render as absent data.
pub struct HistoryAggregator {
    backend: BackendClient,
}

impl HistoryAggregator {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    /// Fetch sessions (newest first, bounded by `limit`) and the aggregate
    /// summary. Re-fetches on every call; there is no cache.
    pub async fn fetch_history(&self, limit: usize) -> HistoryView {
        let (sessions, summary) = futures::join!(
            self.backend.list_sessions(limit),
            self.backend.fetch_summary(),
        );

        let sessions = sessions
            .map(|records| records.iter().map(normalize_session).collect())
            .unwrap_or_default();
        let summary = summary.ok().map(|raw| normalize_summary(&raw));

        HistoryView { sessions, summary }
    }
}

/// History view lifecycle. There is no distinct error state: a failed fetch
/// still reaches `Ready`, with empty or partial data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryPhase {
    Loading,
    Ready,
}

/// Drives the aggregator exactly once on entering the history view.
pub struct SessionHistoryController {
    aggregator: HistoryAggregator,
    phase: HistoryPhase,
    view: HistoryView,
}

impl SessionHistoryController {
    pub fn new(aggregator: HistoryAggregator) -> Self {
        Self {
            aggregator,
            phase: HistoryPhase::Loading,
            view: HistoryView::default(),
        }
    }

    /// Load the history view. The fetch runs only on the first call; later
    /// calls return the already-published view.
    pub async fn enter(&mut self, limit: usize) -> &HistoryView {
        if self.phase == HistoryPhase::Loading {
            self.view = self.aggregator.fetch_history(limit).await;
            self.phase = HistoryPhase::Ready;
        }
        &self.view
    }

    pub fn phase(&self) -> HistoryPhase {
        self.phase
    }

    pub fn view(&self) -> &HistoryView {
        &self.view
    }
}
