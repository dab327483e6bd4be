//! Core type definitions for threadline

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a reply
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReplyId(pub String);

impl ReplyId {
    /// Generate a fresh random ReplyId
    pub fn generate() -> Self {
        ReplyId(Uuid::new_v4().simple().to_string())
    }

    /// Create a ReplyId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        ReplyId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReplyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ReplyId {
    fn from(s: &str) -> Self {
        ReplyId(s.to_string())
    }
}

/// Identifier of the post a reply thread belongs to
///
/// Feeds hand these out either as numbers or as strings, so both are
/// accepted on input. They are always written back as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PostId(pub String);

impl PostId {
    /// Create a PostId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        PostId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        PostId(s.to_string())
    }
}

impl From<u64> for PostId {
    fn from(n: u64) -> Self {
        PostId(n.to_string())
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => PostId(n.to_string()),
            Raw::Text(s) => PostId(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_id_uniqueness() {
        let id1 = ReplyId::generate();
        let id2 = ReplyId::generate();
        assert_ne!(id1, id2);
        assert_eq!(id1.as_str().len(), 32);
    }

    #[test]
    fn test_post_id_from_number_or_string() {
        let from_number: PostId = serde_json::from_str("7").unwrap();
        let from_text: PostId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "\"7\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(ReplyId::from("1a1").to_string(), "1a1");
        assert_eq!(PostId::from(3u64).to_string(), "3");
    }
}
