//! Reply source trait and abstractions

use super::model::Reply;
use super::tree::ReplyTree;
use crate::error::Result;
use crate::types::PostId;

/// Something that can hand out the replies of a post
pub trait ReplySource: Send + Sync {
    /// All posts that have a reply list
    fn post_ids(&self) -> Result<Vec<PostId>>;

    /// Top-level replies of a post, children nested inside
    fn load_replies(&self, post_id: &PostId) -> Result<Vec<Reply>>;

    /// Check if the source knows about a post
    fn contains(&self, post_id: &PostId) -> bool {
        self.post_ids()
            .map(|ids| ids.contains(post_id))
            .unwrap_or(false)
    }

    /// Load and validate the reply tree of a post
    fn load_tree(&self, post_id: &PostId, max_depth: usize) -> Result<ReplyTree> {
        let roots = self.load_replies(post_id)?;
        ReplyTree::with_max_depth(post_id.clone(), roots, max_depth)
            .map_err(|e| e.with_context(format!("Failed to load replies for post {}", post_id)))
    }
}

/// In-memory source for testing
#[cfg(test)]
pub mod memory {
    use super::*;
    use crate::error::ThreadlineError;
    use std::collections::BTreeMap;

    /// In-memory reply source for testing
    #[derive(Default)]
    pub struct MemorySource {
        posts: BTreeMap<PostId, Vec<Reply>>,
    }

    impl MemorySource {
        /// Create a new in-memory source
        pub fn new() -> Self {
            Self::default()
        }

        /// Register the replies of a post
        pub fn insert(&mut self, post_id: PostId, replies: Vec<Reply>) {
            self.posts.insert(post_id, replies);
        }
    }

    impl ReplySource for MemorySource {
        fn post_ids(&self) -> Result<Vec<PostId>> {
            Ok(self.posts.keys().cloned().collect())
        }

        fn load_replies(&self, post_id: &PostId) -> Result<Vec<Reply>> {
            self.posts
                .get(post_id)
                .cloned()
                .ok_or_else(|| ThreadlineError::PostNotFound(post_id.to_string()))
        }
    }
}
