//! Compass CLI - hybrid vector + graph travel assistant

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use compass_core::config::{CliOverrides, CompassConfig};

mod commands;
mod input;
mod logging;

#[derive(Parser)]
#[command(name = "compass")]
#[command(about = "Hybrid retrieval travel assistant (vector search + knowledge graph)", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path (defaults to ./compass.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "compass_graph=debug")
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Default)]
struct TurnArgs {
    /// Vector matches per query
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Graph expansion depth in hops
    #[arg(short, long)]
    depth: Option<usize>,

    /// Concurrent graph lookups per query
    #[arg(long)]
    max_concurrency: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive question/answer session (default)
    Chat {
        #[command(flatten)]
        turn: TurnArgs,
    },

    /// Answer a single question and exit
    Ask {
        /// The question to answer
        question: String,

        #[command(flatten)]
        turn: TurnArgs,
    },

    /// Verify the graph database is reachable
    CheckGraph,

    /// List the vector indexes visible to the configured API key
    CheckIndex,

    /// Create the configured vector index if it does not exist
    EnsureIndex,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let turn = match &self.command {
            Some(Commands::Chat { turn }) | Some(Commands::Ask { turn, .. }) => Some(turn),
            _ => None,
        };
        CliOverrides {
            top_k: turn.and_then(|t| t.top_k),
            depth: turn.and_then(|t| t.depth),
            max_concurrency: turn.and_then(|t| t.max_concurrency),
            log_level: self.log_level.clone(),
            json_logs: self.json_logs.then_some(true),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CompassConfig::load(cli.config.as_deref(), Some(&cli.overrides()))
        .context("failed to load configuration")?;

    logging::init(&config.observability);

    match cli.command {
        None | Some(Commands::Chat { .. }) => commands::chat(&config),
        Some(Commands::Ask { question, .. }) => commands::ask(&config, &question),
        Some(Commands::CheckGraph) => commands::check_graph(&config),
        Some(Commands::CheckIndex) => commands::check_index(&config),
        Some(Commands::EnsureIndex) => commands::ensure_index(&config),
    }
}
