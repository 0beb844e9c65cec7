mod agent;
mod cli;
mod client;
mod config;
mod directory;
mod server;
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kith",
    version,
    about = "Natural-language user directory assistant — LLM-driven tool calls over MCP"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the MCP tool server (transport per config: stdio or sse)
    Serve,
    /// Ask one question and print the answer
    Ask {
        /// The natural-language question
        question: String,
    },
    /// Interactive question loop
    Repl,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::KithConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for MCP JSON-RPC.
    let filter =
        EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve => match config.server.transport.as_str() {
            "sse" => server::serve_sse(config).await?,
            _ => server::serve_stdio(config).await?,
        },
        Command::Ask { question } => cli::ask::ask(&config, &question).await?,
        Command::Repl => cli::repl::repl(&config).await?,
    }

    Ok(())
}
