//! Voting module
//!
//! Per-entity vote state and the per-view registry that owns it.

pub mod controller;
pub mod registry;

pub use controller::{VoteController, VoteSnapshot, VoteStatus};
pub use registry::VoteRegistry;
