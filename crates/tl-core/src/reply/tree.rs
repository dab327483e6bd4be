//! Reply forest for a single post, with traversal and search

use super::model::Reply;
use crate::config::DEFAULT_MAX_DEPTH;
use crate::error::{Result, ThreadlineError};
use crate::types::{PostId, ReplyId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A reply together with its nesting level (0 for top-level)
#[derive(Debug, Clone, Copy)]
pub struct Nested<'a> {
    /// Levels below the post
    pub depth: usize,
    /// The reply itself
    pub reply: &'a Reply,
}

/// Depth-first, parent-before-children walk over a forest.
///
/// Uses an explicit stack so arbitrarily deep input cannot overflow the
/// call stack.
pub struct PreOrder<'a> {
    stack: Vec<Nested<'a>>,
}

impl<'a> PreOrder<'a> {
    /// Walk the given roots and everything under them
    pub fn new(roots: &'a [Reply]) -> Self {
        Self {
            stack: roots
                .iter()
                .rev()
                .map(|reply| Nested { depth: 0, reply })
                .collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = Nested<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        self.stack.extend(item.reply.replies.iter().rev().map(|reply| Nested {
            depth: item.depth + 1,
            reply,
        }));
        Some(item)
    }
}

/// Number of replies nested anywhere under `node`, not counting `node`
pub fn count_descendants(node: &Reply) -> usize {
    PreOrder::new(&node.replies).count()
}

/// All replies whose content or author contains `query`, ignoring case.
///
/// Results come in depth-first order with parents ahead of their children.
/// A blank query yields nothing rather than everything.
pub fn search<'a>(roots: &'a [Reply], query: &str) -> Vec<&'a Reply> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    PreOrder::new(roots)
        .map(|n| n.reply)
        .filter(|reply| reply.matches_lowercase(&query_lower))
        .collect()
}

/// The forest of replies for one post
#[derive(Debug, Clone)]
pub struct ReplyTree {
    post_id: PostId,
    roots: Vec<Reply>,
    len: usize,
    depth: usize,
}

impl ReplyTree {
    /// Build a tree with the default depth cap
    pub fn new(post_id: PostId, roots: Vec<Reply>) -> Result<Self> {
        Self::with_max_depth(post_id, roots, DEFAULT_MAX_DEPTH)
    }

    /// Build a tree, rejecting forests nested deeper than `max_depth` levels
    pub fn with_max_depth(post_id: PostId, roots: Vec<Reply>, max_depth: usize) -> Result<Self> {
        let (len, depth) = validate_forest(&post_id, &roots, max_depth)?;
        debug!(
            "Built reply tree for post {}: {} replies, {} levels",
            post_id, len, depth
        );
        Ok(Self {
            post_id,
            roots,
            len,
            depth,
        })
    }

    /// Build a tree from flat records linked by `parent_id`.
    ///
    /// Siblings keep their relative input order.
    pub fn from_flat(post_id: PostId, records: Vec<Reply>, max_depth: usize) -> Result<Self> {
        let mut known = HashSet::with_capacity(records.len());
        for record in &records {
            if record.has_replies() {
                return Err(ThreadlineError::InvalidTree(format!(
                    "Flat record {} already carries nested replies",
                    record.id
                )));
            }
            if !known.insert(record.id.clone()) {
                return Err(ThreadlineError::InvalidTree(format!(
                    "Duplicate reply id {}",
                    record.id
                )));
            }
        }

        let mut roots = Vec::new();
        let mut children: HashMap<ReplyId, Vec<Reply>> = HashMap::new();
        for record in records {
            match record.parent_id.clone() {
                None => roots.push(record),
                Some(parent) => {
                    if !known.contains(&parent) {
                        return Err(ThreadlineError::InvalidTree(format!(
                            "Reply {} points at unknown parent {}",
                            record.id, parent
                        )));
                    }
                    children.entry(parent).or_default().push(record);
                }
            }
        }

        for root in roots.iter_mut() {
            attach_children(root, &mut children, 1, max_depth)?;
        }

        if let Some(parent) = children.keys().min() {
            return Err(ThreadlineError::InvalidTree(format!(
                "Replies under {} are not reachable from any top-level reply",
                parent
            )));
        }

        Self::with_max_depth(post_id, roots, max_depth)
    }

    /// Post this forest belongs to
    pub fn post_id(&self) -> &PostId {
        &self.post_id
    }

    /// Top-level replies in display order
    pub fn roots(&self) -> &[Reply] {
        &self.roots
    }

    /// Total number of replies at every level
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the post has no replies
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of nesting levels (1 when every reply is top-level)
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Walk every reply depth-first
    pub fn walk(&self) -> PreOrder<'_> {
        PreOrder::new(&self.roots)
    }

    /// Every reply with its depth, in display order
    pub fn flatten(&self) -> Vec<Nested<'_>> {
        self.walk().collect()
    }

    /// Find a reply anywhere in the forest
    pub fn find(&self, id: &ReplyId) -> Option<&Reply> {
        self.walk().map(|n| n.reply).find(|reply| &reply.id == id)
    }

    /// Descendant count of the reply with the given id
    pub fn count_descendants(&self, id: &ReplyId) -> Result<usize> {
        self.find(id)
            .map(count_descendants)
            .ok_or_else(|| ThreadlineError::ReplyNotFound(id.to_string()))
    }

    /// Search the whole forest
    pub fn search(&self, query: &str) -> Vec<&Reply> {
        let results = search(&self.roots, query);
        debug!(
            "Search '{}' on post {} matched {} replies",
            query,
            self.post_id,
            results.len()
        );
        results
    }

    /// Give back the roots
    pub fn into_roots(self) -> Vec<Reply> {
        self.roots
    }
}

fn attach_children(
    node: &mut Reply,
    children: &mut HashMap<ReplyId, Vec<Reply>>,
    depth: usize,
    max_depth: usize,
) -> Result<()> {
    if depth > max_depth {
        return Err(ThreadlineError::DepthExceeded {
            id: node.id.to_string(),
            depth,
            limit: max_depth,
        });
    }

    if let Some(kids) = children.remove(&node.id) {
        node.replies = kids;
        for child in node.replies.iter_mut() {
            attach_children(child, children, depth + 1, max_depth)?;
        }
    }

    Ok(())
}

/// Check the forest invariants, returning (reply count, levels)
fn validate_forest(post_id: &PostId, roots: &[Reply], max_depth: usize) -> Result<(usize, usize)> {
    let mut seen: HashSet<&ReplyId> = HashSet::new();
    let mut levels = 0;
    let mut stack: Vec<(usize, &Reply, Option<&ReplyId>)> =
        roots.iter().rev().map(|r| (1, r, None)).collect();

    while let Some((depth, reply, expected_parent)) = stack.pop() {
        if depth > max_depth {
            return Err(ThreadlineError::DepthExceeded {
                id: reply.id.to_string(),
                depth,
                limit: max_depth,
            });
        }
        if &reply.post_id != post_id {
            return Err(ThreadlineError::InvalidTree(format!(
                "Reply {} belongs to post {}, not {}",
                reply.id, reply.post_id, post_id
            )));
        }
        if reply.parent_id.as_ref() != expected_parent {
            return Err(ThreadlineError::InvalidTree(format!(
                "Reply {} has parent {:?} but is nested under {:?}",
                reply.id,
                reply.parent_id.as_ref().map(|p| p.as_str()),
                expected_parent.map(|p| p.as_str())
            )));
        }
        if !seen.insert(&reply.id) {
            return Err(ThreadlineError::InvalidTree(format!(
                "Duplicate reply id {}",
                reply.id
            )));
        }

        levels = levels.max(depth);
        stack.extend(
            reply
                .replies
                .iter()
                .rev()
                .map(|child| (depth + 1, child, Some(&reply.id))),
        );
    }

    Ok((seen.len(), levels))
}
