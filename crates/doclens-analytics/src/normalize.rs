use doclens_types::{
    AgentExecutionPayload, AnalyticsPayload, ThinkingPayload, TokenUsagePayload,
};
use serde::Serialize;

/// Canonical, fully-defaulted analytics for one session.
///
/// Every numeric field is defined (absent becomes zero) and every collection
/// is defined (absent becomes empty). Values are never rounded here;
/// fixed-precision formatting is a presentation concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalyticsView {
    pub session_id: String,
    pub total_duration_seconds: f64,
    /// Whether the backend attached an analytics block at all.
    pub reported: bool,
    pub token_usage: TokenUsageView,
    pub agent_execution: AgentExecutionView,
    pub thinking: ThinkingView,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenUsageView {
    pub total_tokens: u64,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub api_calls: u64,
    pub estimated_cost_usd: f64,
    /// Chronological call order. The 1-based display index is computed when
    /// rendering, never stored.
    pub calls: Vec<CallView>,
    pub reported: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallView {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgentExecutionView {
    pub successful_agents: u64,
    pub failed_agents: u64,
    pub average_duration_seconds: f64,
    /// Execution order; indices assigned at render time.
    pub executions: Vec<ExecutionView>,
    pub reported: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionView {
    pub agent_name: String,
    pub status: String,
    pub success: bool,
    pub duration_seconds: f64,
}

/// Linear agent hand-off chain; adjacency is implied by order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThinkingView {
    pub total_steps: u64,
    pub agents: Vec<String>,
    pub reported: bool,
}

/// Map raw telemetry to the canonical view.
///
/// Pure and deterministic. An absent payload yields a well-formed empty
/// view; a partially-populated payload never raises. This is the contract
/// that keeps the client stable while the backend evolves its telemetry
/// schema.
pub fn normalize(raw: Option<&AnalyticsPayload>) -> AnalyticsView {
    let Some(raw) = raw else {
        return AnalyticsView::default();
    };

    AnalyticsView {
        session_id: raw.session_id.clone().unwrap_or_default(),
        total_duration_seconds: raw.total_duration_seconds.unwrap_or(0.0),
        reported: true,
        token_usage: normalize_token_usage(raw.token_usage.as_ref()),
        agent_execution: normalize_agent_execution(raw.agent_execution.as_ref()),
        thinking: normalize_thinking(raw.thinking_process.as_ref()),
    }
}

fn normalize_token_usage(raw: Option<&TokenUsagePayload>) -> TokenUsageView {
    let Some(raw) = raw else {
        return TokenUsageView::default();
    };

    let calls = raw
        .call_details
        .iter()
        .map(|call| CallView {
            prompt_tokens: call.prompt_tokens.unwrap_or(0),
            completion_tokens: call.completion_tokens.unwrap_or(0),
            total_tokens: call.total_tokens.unwrap_or(0),
            model: call.model.clone(),
        })
        .collect();

    TokenUsageView {
        total_tokens: raw.total_tokens.unwrap_or(0),
        prompt_tokens: raw.prompt_tokens.unwrap_or(0),
        completion_tokens: raw.completion_tokens.unwrap_or(0),
        api_calls: raw.api_calls.unwrap_or(0),
        estimated_cost_usd: raw.estimated_cost_usd.unwrap_or(0.0),
        calls,
        reported: true,
    }
}

fn normalize_agent_execution(raw: Option<&AgentExecutionPayload>) -> AgentExecutionView {
    let Some(raw) = raw else {
        return AgentExecutionView::default();
    };

    let executions = raw
        .executions
        .iter()
        .map(|record| ExecutionView {
            agent_name: record.agent_name.clone(),
            status: record.status.clone().unwrap_or_default(),
            success: record.success.unwrap_or(false),
            duration_seconds: record.duration_seconds.unwrap_or(0.0),
        })
        .collect();

    AgentExecutionView {
        successful_agents: raw.successful_agents.unwrap_or(0),
        failed_agents: raw.failed_agents.unwrap_or(0),
        average_duration_seconds: raw.average_duration.unwrap_or(0.0),
        executions,
        reported: true,
    }
}

fn normalize_thinking(raw: Option<&ThinkingPayload>) -> ThinkingView {
    let Some(raw) = raw else {
        return ThinkingView::default();
    };

    let agents = raw
        .steps
        .iter()
        .map(|step| step.agent.clone().unwrap_or_default())
        .collect();

    ThinkingView {
        total_steps: raw.total_steps.unwrap_or(0),
        agents,
        reported: true,
    }
}
