//! Reply data models

use crate::types::{PostId, ReplyId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on a post, possibly nested under another reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// Unique reply identifier
    pub id: ReplyId,
    /// Post this reply belongs to
    pub post_id: PostId,
    /// Parent reply, absent for top-level replies
    #[serde(default)]
    pub parent_id: Option<ReplyId>,
    /// Display name of the author
    pub author: String,
    /// Avatar URL of the author
    #[serde(default)]
    pub author_avatar: String,
    /// Text body
    pub content: String,
    /// When the reply was written
    pub timestamp: DateTime<Utc>,
    /// Baseline vote count as loaded
    #[serde(default)]
    pub votes: i64,
    /// Child replies in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<Reply>,
}

impl Reply {
    /// Check if this reply sits directly under the post
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if anyone answered this reply
    pub fn has_replies(&self) -> bool {
        !self.replies.is_empty()
    }

    /// Case-insensitive substring match on content or author.
    ///
    /// `query_lower` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, query_lower: &str) -> bool {
        self.content.to_lowercase().contains(query_lower)
            || self.author.to_lowercase().contains(query_lower)
    }

    /// Copy of this reply without its children
    pub fn detached(&self) -> Reply {
        Reply {
            replies: Vec::new(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": "1a",
        "postId": 1,
        "parentId": null,
        "author": "CodingWizard",
        "authorAvatar": "https://example.com/a.png",
        "content": "Learning to code.",
        "timestamp": "2024-05-01T12:00:00Z",
        "votes": 1523,
        "replies": [{
            "id": "1a1",
            "postId": 1,
            "parentId": "1a",
            "author": "TechEnthusiast",
            "authorAvatar": "https://example.com/b.png",
            "content": "What programming language did you start with?",
            "timestamp": "2024-05-02T12:00:00Z",
            "votes": 438
        }]
    }"#;

    #[test]
    fn test_deserialize_app_shape() {
        let reply: Reply = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(reply.id, ReplyId::from("1a"));
        assert_eq!(reply.post_id, PostId::from(1u64));
        assert!(reply.is_top_level());
        assert_eq!(reply.votes, 1523);
        assert_eq!(reply.replies.len(), 1);
        assert_eq!(reply.replies[0].parent_id, Some(ReplyId::from("1a")));
        assert!(!reply.replies[0].has_replies());
    }

    #[test]
    fn test_leaf_serializes_without_replies() {
        let reply: Reply = serde_json::from_str(SAMPLE).unwrap();
        let json = serde_json::to_value(&reply.replies[0]).unwrap();
        assert!(json.get("replies").is_none());
        assert_eq!(json["authorAvatar"], "https://example.com/b.png");
    }

    #[test]
    fn test_matches_lowercase() {
        let reply: Reply = serde_json::from_str(SAMPLE).unwrap();
        assert!(reply.matches_lowercase("coding"));
        assert!(reply.matches_lowercase("learning"));
        assert!(!reply.matches_lowercase("python"));
    }

    #[test]
    fn test_detached() {
        let reply: Reply = serde_json::from_str(SAMPLE).unwrap();
        let detached = reply.detached();
        assert_eq!(detached.id, reply.id);
        assert!(detached.replies.is_empty());
    }
}
