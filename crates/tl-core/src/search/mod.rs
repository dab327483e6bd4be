//! Comment search module
//!
//! Search-as-you-type over a reply tree: the debounce timer and the panel state.

pub mod debounce;
pub mod panel;

pub use debounce::SearchDebouncer;
pub use panel::CommentSearch;
