//! Plain-text rendering of reply threads

use chrono::{DateTime, Utc};
use colored::Colorize;
use tl_core::reply::{count_descendants, Reply};
use tl_core::vote::{VoteSnapshot, VoteStatus};

/// Relative age like "3h ago"
pub fn age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = now.signed_duration_since(timestamp).num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 60 * 24 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (60 * 24))
    }
}

/// Vote count with arrows, the active one highlighted
pub fn vote_badge(snapshot: VoteSnapshot) -> String {
    let count = snapshot.votes.to_string();
    match snapshot.status {
        VoteStatus::Up => format!("{} {} ▽", "▲".green(), count.green()),
        VoteStatus::Down => format!("△ {} {}", count.red(), "▼".red()),
        VoteStatus::None => format!("△ {} ▽", count),
    }
}

/// "n replies" suffix for collapsed threads
pub fn reply_count(n: usize) -> String {
    match n {
        0 => String::new(),
        1 => "1 reply".to_string(),
        n => format!("{} replies", n),
    }
}

/// Header and body lines of one reply, indented by `indent` spaces
pub fn reply_lines(
    reply: &Reply,
    snapshot: VoteSnapshot,
    indent: usize,
    now: DateTime<Utc>,
) -> [String; 2] {
    let pad = " ".repeat(indent);
    let mut header = format!(
        "{}{} {} {}  {}",
        pad,
        reply.author.bold(),
        "·".dimmed(),
        age(reply.timestamp, now).dimmed(),
        vote_badge(snapshot)
    );

    let nested = count_descendants(reply);
    if nested > 0 {
        header.push_str(&format!("  {}", reply_count(nested).cyan()));
    }

    [header, format!("{}  {}", pad, reply.content)]
}
