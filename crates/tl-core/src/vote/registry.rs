//! Vote controllers for every reply shown in one thread view

use super::controller::{VoteController, VoteSnapshot, VoteStatus};
use crate::error::{Result, ThreadlineError};
use crate::reply::{Reply, ReplyTree};
use crate::types::ReplyId;
use std::collections::HashMap;
use tracing::debug;

/// Owns one VoteController per rendered reply.
///
/// Controllers are created from the reply's baseline the first time it is
/// looked at and thrown away on `release` or `clear`, so a fresh render
/// starts from the loaded counts again.
#[derive(Debug, Clone, Default)]
pub struct VoteRegistry {
    controllers: HashMap<ReplyId, VoteController>,
}

impl VoteRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller for a reply, created on first access
    pub fn controller(&mut self, reply: &Reply) -> &mut VoteController {
        self.controllers
            .entry(reply.id.clone())
            .or_insert_with(|| VoteController::new(reply.votes))
    }

    /// Current snapshot for a reply without creating a controller
    pub fn snapshot(&self, reply: &Reply) -> VoteSnapshot {
        self.controllers
            .get(&reply.id)
            .map(VoteController::snapshot)
            .unwrap_or_else(|| VoteController::new(reply.votes).snapshot())
    }

    /// Press a vote button on a reply of `tree`
    pub fn vote(
        &mut self,
        tree: &ReplyTree,
        id: &ReplyId,
        direction: VoteStatus,
    ) -> Result<VoteSnapshot> {
        let reply = tree
            .find(id)
            .ok_or_else(|| ThreadlineError::ReplyNotFound(id.to_string()))?;
        let snapshot = self.controller(reply).apply(direction);
        debug!(
            "Vote {} on reply {} -> {} ({})",
            direction, id, snapshot.votes, snapshot.status
        );
        Ok(snapshot)
    }

    /// Press upvote on a reply of `tree`
    pub fn upvote(&mut self, tree: &ReplyTree, id: &ReplyId) -> Result<VoteSnapshot> {
        self.vote(tree, id, VoteStatus::Up)
    }

    /// Press downvote on a reply of `tree`
    pub fn downvote(&mut self, tree: &ReplyTree, id: &ReplyId) -> Result<VoteSnapshot> {
        self.vote(tree, id, VoteStatus::Down)
    }

    /// Drop the controller of a reply that left the view
    pub fn release(&mut self, id: &ReplyId) -> bool {
        self.controllers.remove(id).is_some()
    }

    /// Drop every controller
    pub fn clear(&mut self) {
        self.controllers.clear();
    }

    /// Number of live controllers
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Check if no controller is live
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}
