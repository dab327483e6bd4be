//! Post composition module
//!
//! State of the create-post flow: the draft, the session that owns it, and scheduling.

pub mod draft;
pub mod schedule;
pub mod session;

pub use draft::{MediaAttachment, MediaKind, PostDraft, SubCategory};
pub use schedule::{RepeatType, Schedule, ScheduleDraft};
pub use session::{ComposeSession, Submission};
