//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod compose;
pub mod config;
pub mod schedule;
pub mod thread;
pub mod vote;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tl_core::config::Config;

/// threadline - reply threads, votes and post composition for social feeds
#[derive(Debug, Parser)]
#[command(name = "threadline")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "THREADLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse and search reply threads
    #[command(subcommand)]
    Thread(thread::ThreadCommand),

    /// Replay vote presses on a reply
    Vote(vote::VoteArgs),

    /// Preview a post schedule
    Schedule(schedule::ScheduleArgs),

    /// Check a post before sending it
    Compose(compose::ComposeArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let explicit = cli.config.is_some();
    let config_path = cli.config.unwrap_or_else(default_config_path);

    // Dispatch to command handler
    match cli.command {
        Commands::Thread(cmd) => thread::execute(cmd, &load_config(&config_path, explicit)?),
        Commands::Vote(args) => vote::execute(args, &load_config(&config_path, explicit)?),
        Commands::Schedule(args) => schedule::execute(args),
        Commands::Compose(args) => compose::execute(args, &load_config(&config_path, explicit)?),
        Commands::Config(cmd) => config::execute(cmd, &config_path),
    }
}

/// Platform config location, falling back to ~/.threadline
pub fn default_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "threadline", "threadline")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".threadline")
        })
        .join("config.toml")
}

/// Load the config; a missing file means defaults unless it was asked for explicitly
fn load_config(path: &Path, explicit: bool) -> anyhow::Result<Config> {
    if !path.exists() && !explicit {
        tracing::debug!("No config at {:?}, using defaults", path);
        return Ok(Config::default());
    }
    Config::load(path).with_context(|| format!("Failed to read config {}", path.display()))
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
