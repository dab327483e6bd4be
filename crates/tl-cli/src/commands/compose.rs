//! Compose command
//!
//! Run a post through the composer checks and print what would be sent.

use anyhow::Result;
use clap::{Args, ValueEnum};

use tl_core::compose::{ComposeSession, MediaAttachment};
use tl_core::config::Config;
use tl_core::types::PostId;

/// Media kind for attachments given on the command line
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum MediaArg {
    #[default]
    Image,
    Gif,
    Video,
}

/// Arguments for the compose command
#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// Post text
    #[arg(long, short, default_value = "")]
    pub text: String,

    /// Media URIs to attach
    #[arg(long, short)]
    pub media: Vec<String>,

    /// Kind of the attached media
    #[arg(long, value_enum, default_value_t)]
    pub media_kind: MediaArg,

    /// Post being quoted
    #[arg(long)]
    pub quote: Option<String>,

    /// Channel to post in
    #[arg(long)]
    pub channel: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the compose command
pub fn execute(args: ComposeArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let mut session = match args.quote {
        Some(post) => ComposeSession::quoting(&config.compose, PostId::from_string(post)),
        None => ComposeSession::new(&config.compose),
    };
    session.set_text(args.text);
    session.set_channel(args.channel);
    for uri in args.media {
        let item = match args.media_kind {
            MediaArg::Image => MediaAttachment::image(uri),
            MediaArg::Gif => MediaAttachment::gif(uri),
            MediaArg::Video => MediaAttachment::video(uri),
        };
        session.add_media(item)?;
    }

    let over = session.characters_over();
    if !args.json {
        if over > 0 {
            println!("{} {} characters over the limit", "✗".red(), over);
        } else {
            println!("{} {} characters left", "✓".green(), -over);
        }
    }

    let submission = session.finish()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&submission)?);
    } else {
        println!(
            "{} Ready to post ({} media)",
            "✓".green(),
            submission.media.len()
        );
    }

    Ok(())
}
