//! Command-line interface for gallows.

use clap::{Parser, Subcommand};

/// Gallows - single-player hangman served over HTTP
#[derive(Parser, Debug)]
#[command(name = "gallows")]
#[command(about = "Single-player hangman served over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// TOML config file; takes precedence over --host/--port
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Print the topic catalog and word counts
    Topics,
}
