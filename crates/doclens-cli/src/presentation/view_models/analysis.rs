use std::fmt;

use doclens_analytics::AnalyticsView;
use serde::Serialize;

use crate::presentation::formatters::{
    format_cost, format_duration, group_thousands, short_session_id,
};

#[derive(Debug, Serialize)]
pub struct AnalysisReportViewModel {
    pub document_type: String,
    pub summary: String,
    pub key_sections: Vec<KeySection>,
    pub insights: Vec<String>,
    pub agent_trace: Vec<String>,
    pub analytics: AnalyticsView,
}

#[derive(Debug, Serialize)]
pub struct KeySection {
    pub title: String,
    pub body: String,
}

impl fmt::Display for AnalysisReportViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Document Type: {}", self.document_type)?;
        writeln!(f)?;
        writeln!(f, "Summary")?;
        writeln!(f, "  {}", self.summary)?;

        if !self.key_sections.is_empty() {
            writeln!(f)?;
            writeln!(f, "Key Sections")?;
            for section in &self.key_sections {
                writeln!(f, "  {}: {}", section.title, section.body)?;
            }
        }

        if !self.insights.is_empty() {
            writeln!(f)?;
            writeln!(f, "Insights")?;
            for insight in &self.insights {
                writeln!(f, "  - {}", insight)?;
            }
        }

        if !self.agent_trace.is_empty() {
            writeln!(f)?;
            writeln!(f, "Agent Execution Trace")?;
            for (idx, line) in self.agent_trace.iter().enumerate() {
                writeln!(f, "  [{}] {}", idx + 1, line)?;
            }
        }

        if self.analytics.reported {
            write_analytics(f, &self.analytics)?;
        }

        Ok(())
    }
}

fn write_analytics(f: &mut fmt::Formatter, analytics: &AnalyticsView) -> fmt::Result {
    writeln!(f)?;
    if analytics.session_id.is_empty() {
        writeln!(f, "Analytics")?;
    } else {
        writeln!(f, "Analytics (session {})", short_session_id(&analytics.session_id))?;
    }

    let usage = &analytics.token_usage;
    writeln!(
        f,
        "  Total Tokens: {} (prompt {} | completion {})",
        group_thousands(usage.total_tokens),
        group_thousands(usage.prompt_tokens),
        group_thousands(usage.completion_tokens),
    )?;
    writeln!(f, "  API Calls: {}", usage.api_calls)?;
    writeln!(
        f,
        "  Estimated Cost: {}",
        format_cost(usage.estimated_cost_usd, 6)
    )?;
    writeln!(
        f,
        "  Processing Time: {}",
        format_duration(analytics.total_duration_seconds, 2)
    )?;

    let execution = &analytics.agent_execution;
    writeln!(f)?;
    writeln!(
        f,
        "  Agent Execution: {} successful, {} failed, avg {}",
        execution.successful_agents,
        execution.failed_agents,
        format_duration(execution.average_duration_seconds, 2),
    )?;
    for (idx, exec) in execution.executions.iter().enumerate() {
        let marker = if exec.success { "ok" } else { "failed" };
        writeln!(
            f,
            "    [{}] {} {} {} ({})",
            idx + 1,
            exec.agent_name,
            exec.status,
            format_duration(exec.duration_seconds, 3),
            marker,
        )?;
    }

    let thinking = &analytics.thinking;
    if !thinking.agents.is_empty() {
        writeln!(f)?;
        writeln!(
            f,
            "  Thinking Process: {} ({} steps)",
            thinking.agents.join(" -> "),
            thinking.total_steps,
        )?;
    }

    if !usage.calls.is_empty() {
        writeln!(f)?;
        writeln!(f, "  Token Usage Breakdown")?;
        for (idx, call) in usage.calls.iter().enumerate() {
            writeln!(
                f,
                "    Call {}: prompt {} | completion {} | total {}",
                idx + 1,
                call.prompt_tokens,
                call.completion_tokens,
                call.total_tokens,
            )?;
        }
    }

    Ok(())
}
