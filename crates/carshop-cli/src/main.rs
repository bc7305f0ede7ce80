//! CLI entry point - the composition root.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use carshop_cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!(?cli, "Parsed command line");

    carshop_axum::start_server(cli.server_config()).await
}
