//! JSON fixture reply source

use std::collections::BTreeMap;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tl_core::error::{Result, ThreadlineError};
use tl_core::reply::{Reply, ReplySource, ReplyTree};
use tl_core::types::PostId;
use tracing::{debug, warn};

/// Reply source backed by JSON fixtures.
///
/// Two layouts are understood:
/// - a single file holding an object that maps post ids to reply arrays
/// - a directory of `<post id>.json` files, each holding one reply array
///
/// A reply array is either nested (children under `replies`) or flat
/// (every reply at the top level, linked by `parentId`).
#[derive(Debug)]
pub struct FixtureStore {
    /// Where the fixtures were read from
    path: PathBuf,
    /// Replies per post, as loaded
    posts: BTreeMap<PostId, Vec<Reply>>,
}

impl FixtureStore {
    /// Open a fixture file or directory
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            return Err(ThreadlineError::FileNotFound(path));
        }

        let posts = if path.is_dir() {
            Self::read_dir(&path)?
        } else {
            Self::read_file(&path)?
        };

        debug!("Loaded {} posts from {:?}", posts.len(), path);
        Ok(Self { path, posts })
    }

    /// Parse a fixture held in memory
    pub fn from_json_str(content: &str) -> Result<Self> {
        let posts: BTreeMap<PostId, Vec<Reply>> = serde_json::from_str(content)?;
        Ok(Self {
            path: PathBuf::new(),
            posts,
        })
    }

    /// Read a single fixture file mapping post ids to replies
    fn read_file(path: &Path) -> Result<BTreeMap<PostId, Vec<Reply>>> {
        let file = fs::File::open(path)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            ThreadlineError::Serde(e).with_context(format!("Failed to parse {}", path.display()))
        })
    }

    /// Read every `<post id>.json` file in a directory
    fn read_dir(dir: &Path) -> Result<BTreeMap<PostId, Vec<Reply>>> {
        let mut posts = BTreeMap::new();

        let entries = fs::read_dir(dir).map_err(|e| {
            ThreadlineError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read fixture directory: {}", e),
            ))
        })?;

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();

            // Skip non-json files and hidden files
            if !path.extension().map(|e| e == "json").unwrap_or(false) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if stem.starts_with('.') {
                continue;
            }

            let file = match fs::File::open(&path) {
                Ok(f) => f,
                Err(e) => {
                    warn!("Skipping unopenable fixture {:?}: {}", path, e);
                    continue;
                }
            };
            match serde_json::from_reader::<_, Vec<Reply>>(BufReader::new(file)) {
                Ok(replies) => {
                    posts.insert(PostId::from_string(stem), replies);
                }
                Err(e) => {
                    warn!("Skipping unreadable fixture {:?}: {}", path, e);
                }
            }
        }

        Ok(posts)
    }

    /// Where the fixtures came from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of posts with replies
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}

/// True when replies are listed flat and linked by `parentId`
fn is_flat(replies: &[Reply]) -> bool {
    replies.iter().any(|r| r.parent_id.is_some())
}

impl ReplySource for FixtureStore {
    fn post_ids(&self) -> Result<Vec<PostId>> {
        Ok(self.posts.keys().cloned().collect())
    }

    fn load_replies(&self, post_id: &PostId) -> Result<Vec<Reply>> {
        self.posts
            .get(post_id)
            .cloned()
            .ok_or_else(|| ThreadlineError::PostNotFound(post_id.to_string()))
    }

    fn contains(&self, post_id: &PostId) -> bool {
        self.posts.contains_key(post_id)
    }

    fn load_tree(&self, post_id: &PostId, max_depth: usize) -> Result<ReplyTree> {
        let replies = self.load_replies(post_id)?;
        let tree = if is_flat(&replies) {
            debug!("Post {} fixture is flat, linking by parent id", post_id);
            ReplyTree::from_flat(post_id.clone(), replies, max_depth)
        } else {
            ReplyTree::with_max_depth(post_id.clone(), replies, max_depth)
        };
        tree.map_err(|e| e.with_context(format!("Failed to load replies for post {}", post_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use tl_core::reply::count_descendants;
    use tl_core::types::ReplyId;

    const NESTED: &str = r#"{
        "1": [
            {
                "id": "1a", "postId": 1, "parentId": null,
                "author": "CodingWizard", "authorAvatar": "",
                "content": "Learning to code.",
                "timestamp": "2024-05-01T12:00:00Z", "votes": 1523,
                "replies": [
                    {
                        "id": "1a1", "postId": 1, "parentId": "1a",
                        "author": "TechEnthusiast", "authorAvatar": "",
                        "content": "What programming language did you start with?",
                        "timestamp": "2024-05-02T12:00:00Z", "votes": 438,
                        "replies": [
                            {
                                "id": "1a1a", "postId": 1, "parentId": "1a1",
                                "author": "CodingWizard", "authorAvatar": "",
                                "content": "Python! It's really beginner-friendly and versatile.",
                                "timestamp": "2024-05-02T13:00:00Z", "votes": 221
                            }
                        ]
                    }
                ]
            }
        ],
        "2": []
    }"#;

    const FLAT: &str = r#"[
        { "id": "b", "postId": "3", "parentId": "a", "author": "x", "content": "child",
          "timestamp": "2024-05-01T12:00:00Z", "votes": 1 },
        { "id": "a", "postId": "3", "author": "y", "content": "root",
          "timestamp": "2024-05-01T11:00:00Z", "votes": 2 }
    ]"#;

    #[test]
    fn test_open_single_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("replies.json");
        fs::write(&path, NESTED).unwrap();

        let store = FixtureStore::open(&path).unwrap();
        assert_eq!(store.post_count(), 2);
        assert_eq!(
            store.post_ids().unwrap(),
            vec![PostId::from(1u64), PostId::from(2u64)]
        );

        let tree = store.load_tree(&PostId::from(1u64), 64).unwrap();
        assert_eq!(count_descendants(&tree.roots()[0]), 2);
        let hits: Vec<&str> = tree.search("python").iter().map(|r| r.id.as_str()).collect();
        assert_eq!(hits, vec!["1a1a"]);
    }

    #[test]
    fn test_open_directory_with_flat_fixture() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("3.json"), FLAT).unwrap();
        fs::write(temp.path().join(".hidden.json"), "[]").unwrap();
        fs::write(temp.path().join("readme.txt"), "ignore me").unwrap();
        fs::write(temp.path().join("broken.json"), "{not json").unwrap();

        let store = FixtureStore::open(temp.path()).unwrap();
        assert_eq!(store.post_ids().unwrap(), vec![PostId::from(3u64)]);

        let tree = store.load_tree(&PostId::from(3u64), 64).unwrap();
        assert_eq!(tree.roots().len(), 1);
        assert_eq!(tree.count_descendants(&ReplyId::from("a")).unwrap(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_skips_unopenable_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("3.json"), FLAT).unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("4.json")).unwrap();

        let store = FixtureStore::open(temp.path()).unwrap();
        assert_eq!(store.post_ids().unwrap(), vec![PostId::from(3u64)]);
    }

    #[test]
    fn test_missing_path() {
        let temp = TempDir::new().unwrap();
        let result = FixtureStore::open(temp.path().join("nope.json"));
        assert!(matches!(result, Err(ThreadlineError::FileNotFound(_))));
    }

    #[test]
    fn test_missing_post() {
        let store = FixtureStore::from_json_str(NESTED).unwrap();
        assert!(!store.contains(&PostId::from(9u64)));
        let err = store.load_tree(&PostId::from(9u64), 64).unwrap_err();
        assert!(matches!(err, ThreadlineError::PostNotFound(_)));
    }

    #[test]
    fn test_depth_limit_applies() {
        let store = FixtureStore::from_json_str(NESTED).unwrap();
        let err = store.load_tree(&PostId::from(1u64), 2).unwrap_err();
        assert!(err.to_string().contains("limit 2"));
    }

    #[test]
    fn test_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "[1, 2").unwrap();
        let err = FixtureStore::open(&path).err().unwrap();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
