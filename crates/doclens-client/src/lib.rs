pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod history;

pub use api::BackendClient;
pub use config::{Config, DEFAULT_BACKEND_URL, resolve_backend_url};
pub use controller::{
    AnalysisRequestController, RequestPhase, RequestSnapshot, SelectionOutcome, SubmitOutcome,
};
pub use error::{Error, Result};
pub use history::{HistoryAggregator, HistoryPhase, SessionHistoryController};
