//! Reply thread module
//!
//! Handles the reply forest of a post: model, construction, traversal and search.

pub mod builder;
pub mod model;
pub mod source;
pub mod tree;

pub use builder::ReplyBuilder;
pub use model::Reply;
pub use source::ReplySource;
pub use tree::{count_descendants, search, Nested, PreOrder, ReplyTree};
