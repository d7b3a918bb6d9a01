use anyhow::Result;
use doclens_client::{BackendClient, Config, resolve_backend_url};

use super::args::{Cli, Commands};
use super::handlers;

pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let backend_url = resolve_backend_url(cli.backend_url.as_deref(), &config);
    let backend = BackendClient::new(backend_url);

    match cli.command {
        Commands::Analyze { path, question } => {
            handlers::analyze::handle(backend, &path, question, cli.format).await
        }
        Commands::History { limit } => handlers::history::handle(backend, limit, cli.format).await,
    }
}
