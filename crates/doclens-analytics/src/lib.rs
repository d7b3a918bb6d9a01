//! Normalization layer between raw backend telemetry and anything that
//! renders it.
//!
//! The backend reports analytics on a best-effort basis: any field, section,
//! or collection may be missing from a given payload. Everything in this
//! crate is pure and infallible; absent data becomes explicit defaults, and
//! `reported` flags keep "absent" distinguishable from "zero" for callers
//! that need to round-trip the distinction.

pub mod history;
pub mod normalize;

pub use history::{
    HistorySummaryView, HistoryView, SessionRow, SessionStatus, normalize_session,
    normalize_summary,
};
pub use normalize::{
    AgentExecutionView, AnalyticsView, CallView, ExecutionView, ThinkingView, TokenUsageView,
    normalize,
};
