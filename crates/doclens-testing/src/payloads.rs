//! Canonical backend payload fixtures.
//!
//! Shapes mirror what the analysis backend actually emits, including the
//! sparse variants the normalization layer must tolerate.

use serde_json::{Value, json};

/// Fully-populated analysis response for an invoice document.
pub fn full_analysis_response() -> Value {
    json!({
        "document_type": "Invoice",
        "summary": "A supplier invoice for consulting services, net 30.",
        "key_sections": {
            "Billing": "Net 30, payable to Acme Consulting LLC",
            "Line Items": "3 items totaling $12,400"
        },
        "insights": [
            "Total due exceeds the referenced PO amount",
            "Payment terms differ from the master agreement"
        ],
        "agent_trace": [
            "System: Received file invoice.pdf. Text length: 18234 chars.",
            "Classifier: document_type=Invoice",
            "Extractor: 2 key sections",
            "Summarizer: done"
        ],
        "analytics": {
            "session_id": "f3b9c2a1-4d5e-6f70-8192-a3b4c5d6e7f8",
            "total_duration_seconds": 14.62,
            "token_usage": {
                "total_tokens": 5230,
                "prompt_tokens": 4100,
                "completion_tokens": 1130,
                "api_calls": 4,
                "estimated_cost_usd": 0.000075,
                "call_details": [
                    {"prompt_tokens": 900, "completion_tokens": 120, "total_tokens": 1020, "model": "gpt-4o-mini"},
                    {"prompt_tokens": 1400, "completion_tokens": 380, "total_tokens": 1780, "model": "gpt-4o-mini"},
                    {"prompt_tokens": 1100, "completion_tokens": 330, "total_tokens": 1430, "model": "gpt-4o-mini"},
                    {"prompt_tokens": 700, "completion_tokens": 300, "total_tokens": 1000, "model": "gpt-4o-mini"}
                ]
            },
            "agent_execution": {
                "successful_agents": 3,
                "failed_agents": 0,
                "average_duration": 4.87,
                "executions": [
                    {"agent_name": "classifier", "status": "completed", "success": true, "duration_seconds": 1.204},
                    {"agent_name": "extractor", "status": "completed", "success": true, "duration_seconds": 6.411},
                    {"agent_name": "summarizer", "status": "completed", "success": true, "duration_seconds": 6.993}
                ]
            },
            "thinking_process": {
                "total_steps": 3,
                "steps": [
                    {"agent": "classifier", "action": "classify document"},
                    {"agent": "extractor", "action": "extract key sections"},
                    {"agent": "summarizer", "action": "summarize"}
                ]
            }
        }
    })
}

/// Analysis response with sparse analytics: only totals and call count.
pub fn sparse_analysis_response() -> Value {
    json!({
        "document_type": "Invoice",
        "summary": "A supplier invoice.",
        "key_sections": {},
        "insights": [],
        "agent_trace": ["start"],
        "analytics": {
            "session_id": "abc123def456",
            "token_usage": {"total_tokens": 1500, "api_calls": 3}
        }
    })
}

/// Analysis response with no analytics block at all.
pub fn analysis_response_without_analytics() -> Value {
    json!({
        "document_type": "Report",
        "summary": "Quarterly report.",
        "key_sections": {},
        "insights": [],
        "agent_trace": []
    })
}

/// Session list with one clean and one partial session, most recent first.
pub fn session_list() -> Value {
    json!({
        "sessions": [
            {
                "session_id": "s-2024-002",
                "filename": "report.pdf",
                "start_timestamp": "2026-08-28T15:04:05Z",
                "total_tokens": 5230,
                "estimated_cost_usd": 0.000075,
                "total_duration_seconds": 14.62,
                "successful_agents": 3,
                "failed_agents": 0
            },
            {
                "session_id": "s-2024-001",
                "filename": "contract.pdf",
                "start_timestamp": "2026-08-27T09:12:44Z",
                "total_tokens": 2210,
                "estimated_cost_usd": 0.000031,
                "total_duration_seconds": 9.05,
                "successful_agents": 2,
                "failed_agents": 1
            }
        ]
    })
}

/// Fully-populated aggregate summary.
pub fn history_summary() -> Value {
    json!({
        "total_sessions": 12,
        "total_tokens": 48120,
        "total_cost": 0.000712,
        "average_duration": 11.8
    })
}

/// Summary where only the session count was recorded.
pub fn sparse_history_summary() -> Value {
    json!({"total_sessions": 12})
}
