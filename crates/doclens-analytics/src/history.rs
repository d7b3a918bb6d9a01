use std::fmt;

use doclens_types::{HistorySummary, SessionRecord};
use serde::Serialize;

/// Derived outcome of a historical session.
///
/// A session with any failed agent is partial; it never surfaces as a hard
/// failure in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Success,
    Partial,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Success => "SUCCESS",
            SessionStatus::Partial => "PARTIAL",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical history list item with defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRow {
    pub session_id: String,
    /// Kept optional: a missing filename renders as a placeholder, but the
    /// canonical model does not invent one.
    pub filename: Option<String>,
    pub start_timestamp: Option<String>,
    pub total_tokens: u64,
    pub estimated_cost_usd: f64,
    pub total_duration_seconds: f64,
    pub successful_agents: u64,
    pub failed_agents: u64,
    pub status: SessionStatus,
}

impl SessionRow {
    pub fn total_agents(&self) -> u64 {
        self.successful_agents + self.failed_agents
    }
}

/// Canonical aggregate metrics with defaults applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistorySummaryView {
    pub total_sessions: u64,
    pub total_tokens: u64,
    pub total_cost: f64,
    pub average_duration: f64,
}

/// Combined history model published by the aggregator.
///
/// `summary` is `None` only when the summary fetch failed; a succeeded but
/// sparse summary normalizes to zeros instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistoryView {
    pub sessions: Vec<SessionRow>,
    pub summary: Option<HistorySummaryView>,
}

pub fn normalize_session(record: &SessionRecord) -> SessionRow {
    let failed_agents = record.failed_agents.unwrap_or(0);
    let status = if failed_agents > 0 {
        SessionStatus::Partial
    } else {
        SessionStatus::Success
    };

    SessionRow {
        session_id: record.session_id.clone().unwrap_or_default(),
        filename: record.filename.clone(),
        start_timestamp: record.start_timestamp.clone(),
        total_tokens: record.total_tokens.unwrap_or(0),
        estimated_cost_usd: record.estimated_cost_usd.unwrap_or(0.0),
        total_duration_seconds: record.total_duration_seconds.unwrap_or(0.0),
        successful_agents: record.successful_agents.unwrap_or(0),
        failed_agents,
        status,
    }
}

pub fn normalize_summary(raw: &HistorySummary) -> HistorySummaryView {
    HistorySummaryView {
        total_sessions: raw.total_sessions.unwrap_or(0),
        total_tokens: raw.total_tokens.unwrap_or(0),
        total_cost: raw.total_cost.unwrap_or(0.0),
        average_duration: raw.average_duration.unwrap_or(0.0),
    }
}
