pub mod analysis;
pub mod history;

pub use analysis::{AnalysisReportViewModel, KeySection};
pub use history::HistoryViewModel;
