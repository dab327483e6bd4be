//! tl-core - Core library for threadline
//!
//! This crate provides the logic behind a social feed's reply threads and
//! post composer: the reply forest with search and descendant counts, the
//! per-reply vote state machine, debounced comment search, and the
//! create-post flow with scheduling.

pub mod error;
pub mod types;
pub mod config;
pub mod vote;
pub mod reply;
pub mod search;
pub mod compose;

pub use error::{Result, ThreadlineError};
pub use types::*;
