use doclens_analytics::{HistoryView, normalize};
use doclens_types::AnalysisResult;

use super::view_models::{AnalysisReportViewModel, HistoryViewModel, KeySection};

pub fn present_analysis(result: &AnalysisResult) -> AnalysisReportViewModel {
    let key_sections = result
        .key_sections
        .iter()
        .map(|(title, value)| KeySection {
            title: title.clone(),
            body: stringify_section(value),
        })
        .collect();

    AnalysisReportViewModel {
        document_type: result.document_type.clone(),
        summary: result.summary.clone(),
        key_sections,
        insights: result.insights.clone(),
        agent_trace: result.agent_trace.clone(),
        analytics: normalize(result.analytics.as_ref()),
    }
}

pub fn present_history(view: &HistoryView) -> HistoryViewModel {
    HistoryViewModel {
        summary: view.summary.clone(),
        sessions: view.sessions.clone(),
    }
}

/// Section values are usually strings, but the backend may emit structured
/// JSON; anything non-string renders as compact JSON.
fn stringify_section(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
