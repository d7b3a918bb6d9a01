use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Parser)]
#[command(name = "doclens")]
#[command(about = "Analyze documents with a multi-agent backend and inspect its telemetry", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL (falls back to DOCLENS_BACKEND_URL, then the config
    /// file, then http://localhost:8000)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a PDF for analysis and render the result
    Analyze {
        /// Path to the PDF to analyze
        path: PathBuf,

        /// Optional question to steer the analysis
        #[arg(long)]
        question: Option<String>,
    },

    /// Show historical sessions and aggregate usage metrics
    History {
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}
