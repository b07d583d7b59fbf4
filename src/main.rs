//! Gallows - single-player hangman served over HTTP.

use anyhow::Result;
use clap::Parser;
use gallows::cli::{Cli, Command};
use gallows::{ServerConfig, Topic};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host, config } => run_server(host, port, config).await,
        Command::Topics => {
            list_topics();
            Ok(())
        }
    }
}

/// Run the HTTP game server
async fn run_server(host: String, port: u16, config: Option<std::path::PathBuf>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,gallows=debug")),
        )
        .init();

    let config = match config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::new(host, port),
    };

    info!(host = %config.host(), port = config.port(), "Starting gallows server");
    gallows::server::serve(&config).await
}

/// Print the topic catalog with word counts
fn list_topics() {
    for topic in Topic::all() {
        println!("{}: {} words", topic, topic.word_list().len());
    }
}
