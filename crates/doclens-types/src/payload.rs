//! Raw payload schemas for the analysis backend.
//!
//! These structs mirror the backend JSON verbatim. Every field the backend
//! may omit is optional or defaulted here; defaults for display are applied
//! later, at the normalization boundary, never by mutating these values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Completed analysis for one submitted document.
///
/// Immutable once received; a new successful submission replaces the whole
/// value. Missing `key_sections`/`insights`/`agent_trace` are treated as
/// empty, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub document_type: String,
    pub summary: String,
    #[serde(default)]
    pub key_sections: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub agent_trace: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<AnalyticsPayload>,
}

/// Telemetry attached to an analysis result.
///
/// Any top-level field may be absent; absence means "not reported", not
/// "zero". The backend evolves this schema by adding and removing optional
/// fields, so nothing in here may be required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsPayload {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub total_duration_seconds: Option<f64>,
    #[serde(default)]
    pub token_usage: Option<TokenUsagePayload>,
    #[serde(default)]
    pub agent_execution: Option<AgentExecutionPayload>,
    #[serde(default)]
    pub thinking_process: Option<ThinkingPayload>,
}

/// Aggregate LLM token accounting for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenUsagePayload {
    #[serde(default)]
    pub total_tokens: Option<u64>,
    #[serde(default)]
    pub prompt_tokens: Option<u64>,
    #[serde(default)]
    pub completion_tokens: Option<u64>,
    #[serde(default)]
    pub api_calls: Option<u64>,
    #[serde(default)]
    pub estimated_cost_usd: Option<f64>,
    /// One entry per provider call, in chronological order.
    #[serde(default)]
    pub call_details: Vec<CallDetail>,
}

/// Token accounting for one discrete provider call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallDetail {
    #[serde(default)]
    pub prompt_tokens: Option<u64>,
    #[serde(default)]
    pub completion_tokens: Option<u64>,
    #[serde(default)]
    pub total_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Per-agent execution outcomes for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentExecutionPayload {
    #[serde(default)]
    pub successful_agents: Option<u64>,
    #[serde(default)]
    pub failed_agents: Option<u64>,
    #[serde(default)]
    pub average_duration: Option<f64>,
    /// One entry per agent run, in execution order. Display indices are
    /// assigned at render time, not stored here.
    #[serde(default)]
    pub executions: Vec<AgentExecutionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentExecutionRecord {
    pub agent_name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub duration_seconds: Option<f64>,
}

/// Linear chain of agent hand-offs; adjacency is implied by sequence order
/// only, there are no explicit graph edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThinkingPayload {
    #[serde(default)]
    pub total_steps: Option<u64>,
    #[serde(default)]
    pub steps: Vec<ThinkingStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThinkingStep {
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// One history list item, as returned by `GET /analytics/sessions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    /// ISO 8601 start time, if the backend recorded one.
    #[serde(default)]
    pub start_timestamp: Option<String>,
    #[serde(default)]
    pub total_tokens: Option<u64>,
    #[serde(default)]
    pub estimated_cost_usd: Option<f64>,
    #[serde(default)]
    pub total_duration_seconds: Option<f64>,
    #[serde(default)]
    pub successful_agents: Option<u64>,
    #[serde(default)]
    pub failed_agents: Option<u64>,
}

/// Envelope for the session list endpoint. A missing `sessions` key
/// deserializes to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionListPayload {
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
}

/// Aggregate history metrics, as returned by `GET /analytics/summary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    #[serde(default)]
    pub total_sessions: Option<u64>,
    #[serde(default)]
    pub total_tokens: Option<u64>,
    #[serde(default)]
    pub total_cost: Option<f64>,
    #[serde(default)]
    pub average_duration: Option<f64>,
}
