//! Reply builder for fluent API

use super::model::Reply;
use crate::error::{Result, ThreadlineError};
use crate::types::{PostId, ReplyId};
use chrono::{DateTime, Utc};

/// Builder for creating replies with fluent API
pub struct ReplyBuilder {
    post_id: PostId,
    id: Option<ReplyId>,
    parent_id: Option<ReplyId>,
    author: Option<String>,
    author_avatar: String,
    content: Option<String>,
    timestamp: Option<DateTime<Utc>>,
    votes: i64,
    replies: Vec<Reply>,
}

impl ReplyBuilder {
    /// Start a top-level reply on a post
    pub fn new(post_id: PostId) -> Self {
        Self {
            post_id,
            id: None,
            parent_id: None,
            author: None,
            author_avatar: String::new(),
            content: None,
            timestamp: None,
            votes: 0,
            replies: Vec::new(),
        }
    }

    /// Start a reply answering `parent`
    pub fn answering(parent: &Reply) -> Self {
        Self::new(parent.post_id.clone()).parent(parent.id.clone())
    }

    /// Use a fixed id instead of a generated one
    pub fn id(mut self, id: impl Into<ReplyId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the parent reply
    pub fn parent(mut self, parent_id: ReplyId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Set the author name
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the author avatar URL
    pub fn avatar(mut self, url: impl Into<String>) -> Self {
        self.author_avatar = url.into();
        self
    }

    /// Set the text body
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the creation time (defaults to now)
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the baseline vote count
    pub fn votes(mut self, votes: i64) -> Self {
        self.votes = votes;
        self
    }

    /// Append a child reply
    pub fn child(mut self, reply: Reply) -> Self {
        self.replies.push(reply);
        self
    }

    /// Build the reply
    pub fn build(self) -> Result<Reply> {
        let content = self.content.ok_or_else(|| {
            ThreadlineError::Validation("Reply content is required".to_string())
        })?;

        if content.trim().is_empty() {
            return Err(ThreadlineError::Validation(
                "Reply content cannot be empty".to_string(),
            ));
        }

        let author = self.author.ok_or_else(|| {
            ThreadlineError::Validation("Reply author is required".to_string())
        })?;

        let id = self.id.unwrap_or_else(ReplyId::generate);

        if let Some(child) = self
            .replies
            .iter()
            .find(|c| c.parent_id.as_ref() != Some(&id))
        {
            return Err(ThreadlineError::InvalidTree(format!(
                "Child {} does not point at parent {}",
                child.id, id
            )));
        }

        Ok(Reply {
            id,
            post_id: self.post_id,
            parent_id: self.parent_id,
            author,
            author_avatar: self.author_avatar,
            content,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            votes: self.votes,
            replies: self.replies,
        })
    }
}
