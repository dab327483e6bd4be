//! Thread command
//!
//! Print, search and summarize reply threads from a fixture.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tl_core::config::Config;
use tl_core::reply::{ReplySource, ReplyTree};
use tl_core::search::CommentSearch;
use tl_core::error::ThreadlineError;
use tl_core::types::PostId;
use tl_core::vote::VoteController;
use tl_storage::FixtureStore;

use crate::render;

/// Thread subcommands
#[derive(Debug, Subcommand)]
pub enum ThreadCommand {
    /// Print the nested replies of a post
    Show {
        /// Fixture file or directory
        fixture: PathBuf,

        /// Post ID
        #[arg(long, short)]
        post: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the replies of a post by content or author
    Search {
        /// Fixture file or directory
        fixture: PathBuf,

        /// Post ID
        #[arg(long, short)]
        post: String,

        /// Text to look for (case-insensitive)
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize every post in a fixture
    Stats {
        /// Fixture file or directory
        fixture: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute the thread command
pub fn execute(cmd: ThreadCommand, config: &Config) -> Result<()> {
    match cmd {
        ThreadCommand::Show {
            fixture,
            post,
            json,
        } => show_thread(&fixture, &post, json, config),
        ThreadCommand::Search {
            fixture,
            post,
            query,
            json,
        } => search_thread(&fixture, &post, &query, json, config),
        ThreadCommand::Stats { fixture, json } => thread_stats(&fixture, json, config),
    }
}

fn open_store(fixture: &Path) -> Result<FixtureStore> {
    FixtureStore::open(fixture)
        .with_context(|| format!("Failed to open fixture {}", fixture.display()))
}

/// Open a fixture and load one post's tree
pub fn load_tree(fixture: &Path, post: &str, config: &Config) -> Result<ReplyTree> {
    let store = open_store(fixture)?;
    let post_id = PostId::from_string(post);
    Ok(store.load_tree(&post_id, config.thread.max_depth)?)
}

/// Like `load_tree`, but a post the fixture has no entry for shows as
/// having no replies yet
fn load_tree_or_empty(fixture: &Path, post: &str, config: &Config) -> Result<ReplyTree> {
    let store = open_store(fixture)?;
    let post_id = PostId::from_string(post);
    match store.load_tree(&post_id, config.thread.max_depth) {
        Err(ThreadlineError::PostNotFound(_)) => {
            tracing::debug!("No replies stored for post {}", post_id);
            Ok(ReplyTree::new(post_id, Vec::new())?)
        }
        other => Ok(other?),
    }
}

fn show_thread(fixture: &Path, post: &str, as_json: bool, config: &Config) -> Result<()> {
    use colored::Colorize;

    let tree = load_tree_or_empty(fixture, post, config)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(tree.roots())?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Replies to post {} ({})", tree.post_id(), tree.len())
            .bold()
            .underline()
    );

    if tree.is_empty() {
        println!();
        println!("  Be the first to comment...");
        return Ok(());
    }

    let now = chrono::Utc::now();
    for nested in tree.walk() {
        println!();
        let indent = nested.depth * config.thread.indent_width;
        let votes = VoteController::new(nested.reply.votes).snapshot();
        for line in render::reply_lines(nested.reply, votes, indent, now) {
            println!("{}", line);
        }
    }

    Ok(())
}

fn search_thread(
    fixture: &Path,
    post: &str,
    query: &str,
    as_json: bool,
    config: &Config,
) -> Result<()> {
    use colored::Colorize;

    let tree = load_tree_or_empty(fixture, post, config)?;

    // One-shot: submit and run immediately once the quiet period is over
    let mut search = CommentSearch::new(&config.search);
    search.toggle();
    let typed_at = Instant::now();
    search.set_query(query, typed_at);
    search.tick(typed_at + config.search.debounce_delay(), &tree);

    if as_json {
        println!("{}", serde_json::to_string_pretty(search.results())?);
        return Ok(());
    }

    println!("{}", search.heading().bold().underline());

    if search.results().is_empty() {
        println!();
        println!("  No matching comments");
        return Ok(());
    }

    let now = chrono::Utc::now();
    for reply in search.results() {
        println!();
        let votes = VoteController::new(reply.votes).snapshot();
        for line in render::reply_lines(reply, votes, 0, now) {
            println!("{}", line);
        }
    }

    Ok(())
}

fn thread_stats(fixture: &Path, as_json: bool, config: &Config) -> Result<()> {
    use colored::Colorize;

    let store = open_store(fixture)?;

    let mut rows = Vec::new();
    for post_id in store.post_ids()? {
        let tree = store.load_tree(&post_id, config.thread.max_depth)?;
        rows.push(serde_json::json!({
            "post": post_id,
            "topLevel": tree.roots().len(),
            "replies": tree.len(),
            "depth": tree.depth(),
        }));
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", "Posts:".bold().underline());
    println!();
    for row in &rows {
        println!(
            "  post {} {} top-level, {} replies, {} levels",
            row["post"].as_str().unwrap_or_default().green(),
            row["topLevel"].to_string().cyan(),
            row["replies"].to_string().yellow(),
            row["depth"]
        );
    }

    Ok(())
}
