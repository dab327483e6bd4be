//! Vote command
//!
//! Replay a sequence of vote presses on one reply and show each result.

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use tl_core::config::Config;
use tl_core::types::ReplyId;
use tl_core::vote::{VoteRegistry, VoteStatus};

use super::thread::load_tree;
use crate::render;

/// A vote button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Press {
    Up,
    Down,
}

impl From<Press> for VoteStatus {
    fn from(press: Press) -> Self {
        match press {
            Press::Up => VoteStatus::Up,
            Press::Down => VoteStatus::Down,
        }
    }
}

/// Arguments for the vote command
#[derive(Debug, Args)]
pub struct VoteArgs {
    /// Fixture file or directory
    pub fixture: PathBuf,

    /// Post ID
    #[arg(long, short)]
    pub post: String,

    /// Reply ID
    #[arg(long, short)]
    pub reply: String,

    /// Presses in order: up or down
    #[arg(required = true, value_enum)]
    pub presses: Vec<Press>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the vote command
pub fn execute(args: VoteArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let tree = load_tree(&args.fixture, &args.post, config)?;
    let reply_id = ReplyId::from_string(args.reply);

    let mut registry = VoteRegistry::new();
    let mut snapshots = Vec::with_capacity(args.presses.len());
    for press in &args.presses {
        snapshots.push(registry.vote(&tree, &reply_id, (*press).into())?);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
        return Ok(());
    }

    let baseline = tree
        .find(&reply_id)
        .map(|r| r.votes)
        .unwrap_or_default();
    println!(
        "Reply {} starts at {}",
        reply_id.to_string().green(),
        baseline
    );
    for (press, snapshot) in args.presses.iter().zip(&snapshots) {
        println!(
            "  {:<5} -> {}  ({})",
            VoteStatus::from(*press).to_string(),
            render::vote_badge(*snapshot),
            snapshot.status
        );
    }

    Ok(())
}
