//! Pricer CLI - Command Line Operations for Pricing, Risk and Strategy Search
//!
//! This is the operational entry point for the pricer workspace. Every
//! command reads one JSON request file and writes one JSON response.
//!
//! # Commands
//!
//! - `pricer price --request <file>` - Price one instrument with Greeks
//! - `pricer portfolio --request <file>` - Portfolio snapshot and group rollups
//! - `pricer curve --request <file>` - Payoff scan across spot
//! - `pricer heatmap --request <file>` - Two-axis scenario grid
//! - `pricer recommend --request <file>` - Ranked multi-leg strategies
//! - `pricer check` - Print the resolved configuration
//!
//! # Architecture
//!
//! As the service layer, this crate owns configuration and logging set-up;
//! the library crates receive settings as explicit structs.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use config::{CliConfig, LogLevel};
pub use error::{CliError, Result};

/// Pricing, portfolio risk and strategy search
#[derive(Parser)]
#[command(name = "pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Configuration file path (defaults to ./pricer.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Request and response files shared by every computing command.
#[derive(Args)]
struct IoArgs {
    /// Path to the JSON request
    #[arg(short, long)]
    request: PathBuf,

    /// Write the JSON response here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one instrument and report its Greeks
    Price(IoArgs),

    /// Aggregate a portfolio into a risk snapshot
    Portfolio(IoArgs),

    /// Scan a portfolio's payoff across spot
    Curve(IoArgs),

    /// Revalue a portfolio over a two-axis shock grid
    Heatmap(IoArgs),

    /// Search multi-leg strategies for a market view
    Recommend(IoArgs),

    /// Print the resolved configuration
    Check,
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;
    init_tracing(config.log_level.raised_by(cli.verbose));
    debug!(log_level = %config.log_level, "configuration resolved");

    match cli.command {
        Commands::Price(io) => commands::price::run(&config, &io.request, io.output.as_deref()),
        Commands::Portfolio(io) => {
            commands::portfolio::run(&config, &io.request, io.output.as_deref())
        }
        Commands::Curve(io) => commands::curve::run(&config, &io.request, io.output.as_deref()),
        Commands::Heatmap(io) => {
            commands::heatmap::run(&config, &io.request, io.output.as_deref())
        }
        Commands::Recommend(io) => {
            commands::recommend::run(&config, &io.request, io.output.as_deref())
        }
        Commands::Check => {
            info!("checking configuration");
            commands::check::run(&config)
        }
    }
}
