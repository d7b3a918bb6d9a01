use std::fmt;

use doclens_analytics::{HistorySummaryView, SessionRow};
use serde::Serialize;

use crate::presentation::formatters::{
    format_cost, format_duration, format_timestamp, group_thousands,
};

#[derive(Debug, Serialize)]
pub struct HistoryViewModel {
    /// `None` when the summary fetch failed; the list still renders.
    pub summary: Option<HistorySummaryView>,
    pub sessions: Vec<SessionRow>,
}

impl fmt::Display for HistoryViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Analytics History")?;

        if let Some(summary) = &self.summary {
            writeln!(f)?;
            writeln!(f, "  Total Sessions: {}", summary.total_sessions)?;
            writeln!(
                f,
                "  Total Tokens Used: {}",
                group_thousands(summary.total_tokens)
            )?;
            writeln!(f, "  Total Cost: {}", format_cost(summary.total_cost, 4))?;
            writeln!(
                f,
                "  Avg Duration: {}",
                format_duration(summary.average_duration, 1)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Recent Sessions")?;

        if self.sessions.is_empty() {
            writeln!(f, "  No sessions found. Analyze a PDF to get started.")?;
            return Ok(());
        }

        for session in &self.sessions {
            let filename = session.filename.as_deref().unwrap_or("Unknown File");
            let started = session
                .start_timestamp
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| "N/A".to_string());

            writeln!(f)?;
            writeln!(f, "  {} [{}]", filename, session.status)?;
            writeln!(f, "    Started: {}", started)?;
            writeln!(
                f,
                "    Tokens: {} | Cost: {} | Duration: {} | Agents: {}/{}",
                group_thousands(session.total_tokens),
                format_cost(session.estimated_cost_usd, 6),
                format_duration(session.total_duration_seconds, 2),
                session.successful_agents,
                session.total_agents(),
            )?;
        }

        Ok(())
    }
}
