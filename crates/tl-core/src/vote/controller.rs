//! Vote state machine for a single post or reply

use crate::error::{Result, ThreadlineError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The viewer's vote on an entity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteStatus {
    /// No vote cast
    #[default]
    None,
    /// Upvoted
    Up,
    /// Downvoted
    Down,
}

impl VoteStatus {
    /// Offset applied to the baseline count
    pub fn delta(&self) -> i64 {
        match self {
            VoteStatus::None => 0,
            VoteStatus::Up => 1,
            VoteStatus::Down => -1,
        }
    }

    /// Short string form
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteStatus::None => "none",
            VoteStatus::Up => "up",
            VoteStatus::Down => "down",
        }
    }
}

impl fmt::Display for VoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteStatus {
    type Err = ThreadlineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(VoteStatus::None),
            "up" | "upvote" => Ok(VoteStatus::Up),
            "down" | "downvote" => Ok(VoteStatus::Down),
            other => Err(ThreadlineError::Validation(format!(
                "Unknown vote status '{}', expected none, up or down",
                other
            ))),
        }
    }
}

/// What presentation needs to draw a vote widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteSnapshot {
    /// Count to display
    pub votes: i64,
    /// Viewer's vote direction
    pub status: VoteStatus,
}

/// Tracks one viewer's vote on one entity.
///
/// Pressing the same direction twice cancels the vote. Switching direction
/// moves the displayed count by two in a single step. The displayed count is
/// always derived from the baseline, so it stays within one of it no matter
/// how many presses happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteController {
    baseline_votes: i64,
    status: VoteStatus,
}

impl VoteController {
    /// Seed from an entity's baseline count with no vote cast
    pub fn new(baseline_votes: i64) -> Self {
        Self::with_status(baseline_votes, VoteStatus::None)
    }

    /// Seed with a vote the viewer already cast
    pub fn with_status(baseline_votes: i64, status: VoteStatus) -> Self {
        Self {
            baseline_votes,
            status,
        }
    }

    /// Baseline count the entity was loaded with
    pub fn baseline_votes(&self) -> i64 {
        self.baseline_votes
    }

    /// Current vote direction
    pub fn status(&self) -> VoteStatus {
        self.status
    }

    /// Count to display
    pub fn current_votes(&self) -> i64 {
        self.baseline_votes.saturating_add(self.status.delta())
    }

    /// Press upvote
    pub fn apply_upvote(&mut self) -> VoteSnapshot {
        self.status = match self.status {
            VoteStatus::Up => VoteStatus::None,
            VoteStatus::None | VoteStatus::Down => VoteStatus::Up,
        };
        self.snapshot()
    }

    /// Press downvote
    pub fn apply_downvote(&mut self) -> VoteSnapshot {
        self.status = match self.status {
            VoteStatus::Down => VoteStatus::None,
            VoteStatus::None | VoteStatus::Up => VoteStatus::Down,
        };
        self.snapshot()
    }

    /// Apply a press in the given direction; `None` leaves the state alone
    pub fn apply(&mut self, direction: VoteStatus) -> VoteSnapshot {
        match direction {
            VoteStatus::Up => self.apply_upvote(),
            VoteStatus::Down => self.apply_downvote(),
            VoteStatus::None => self.snapshot(),
        }
    }

    /// Withdraw any vote
    pub fn reset(&mut self) {
        self.status = VoteStatus::None;
    }

    /// Current count and direction
    pub fn snapshot(&self) -> VoteSnapshot {
        VoteSnapshot {
            votes: self.current_votes(),
            status: self.status,
        }
    }
}
