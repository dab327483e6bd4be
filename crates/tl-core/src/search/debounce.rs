//! Single-timer debounce for typed queries

use std::time::{Duration, Instant};
use tracing::trace;

#[derive(Debug, Clone)]
struct Pending {
    query: String,
    deadline: Instant,
}

/// Coalesces keystrokes so only the last query after a quiet period runs.
///
/// There is at most one pending query. Submitting a new one replaces it and
/// restarts the timer; the replaced query is dropped without ever running.
/// Callers pass the current time in, which keeps the policy deterministic.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<Pending>,
    superseded: u64,
}

impl SearchDebouncer {
    /// Create a debouncer with the given quiet period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            superseded: 0,
        }
    }

    /// Quiet period
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `query`, replacing whatever was pending
    pub fn submit(&mut self, query: impl Into<String>, now: Instant) {
        if let Some(old) = self.pending.take() {
            trace!("Dropping superseded query '{}'", old.query);
            self.superseded += 1;
        }
        self.pending = Some(Pending {
            query: query.into(),
            deadline: now + self.delay,
        });
    }

    /// Take the pending query if its quiet period is over
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.query),
            _ => None,
        }
    }

    /// Drop the pending query, returning it
    pub fn cancel(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.query)
    }

    /// Check if a query is waiting
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending query becomes due
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// How many queries were replaced before they could run
    pub fn superseded(&self) -> u64 {
        self.superseded
    }
}
