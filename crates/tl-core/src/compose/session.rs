//! Scoped state of one post-creation flow

use super::draft::MediaAttachment;
use super::schedule::Schedule;
use crate::config::ComposeConfig;
use crate::error::{Result, ThreadlineError};
use crate::types::PostId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything needed to publish, produced when a session finishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub text: String,
    pub media: Vec<MediaAttachment>,
    pub quoted_post: Option<PostId>,
    pub channel: Option<String>,
    pub schedule: Option<Schedule>,
}

/// Editable state shared by the screens of the create-post flow.
///
/// The flow creates one session when it opens and passes it down by
/// reference; `finish` consumes it, so nothing outlives the flow.
#[derive(Debug, Clone)]
pub struct ComposeSession {
    character_limit: usize,
    max_media: usize,
    text: String,
    media: Vec<MediaAttachment>,
    quoted_post: Option<PostId>,
    channel: Option<String>,
    schedule: Option<Schedule>,
    submitting: bool,
}

impl ComposeSession {
    /// Open a session for a new post
    pub fn new(config: &ComposeConfig) -> Self {
        Self {
            character_limit: config.character_limit,
            max_media: config.max_media,
            text: String::new(),
            media: Vec::new(),
            quoted_post: None,
            channel: None,
            schedule: None,
            submitting: false,
        }
    }

    /// Open a session that quotes another post
    pub fn quoting(config: &ComposeConfig, post_id: PostId) -> Self {
        let mut session = Self::new(config);
        session.quoted_post = Some(post_id);
        session
    }

    /// Post text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the post text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Characters past the limit; negative while there is room left
    pub fn characters_over(&self) -> i64 {
        self.text.chars().count() as i64 - self.character_limit as i64
    }

    /// Check if the text is too long to post
    pub fn is_over_limit(&self) -> bool {
        self.characters_over() > 0
    }

    /// Media slots available; quoting a post uses one
    pub fn allowed_media(&self) -> usize {
        if self.quoted_post.is_some() {
            self.max_media.min(1)
        } else {
            self.max_media
        }
    }

    /// Attached media in order
    pub fn media(&self) -> &[MediaAttachment] {
        &self.media
    }

    /// Attach a media item
    pub fn add_media(&mut self, item: MediaAttachment) -> Result<()> {
        if self.media.len() >= self.allowed_media() {
            return Err(ThreadlineError::Validation(format!(
                "At most {} media attachments allowed",
                self.allowed_media()
            )));
        }
        self.media.push(item);
        Ok(())
    }

    /// Detach the media item at `index`
    pub fn remove_media(&mut self, index: usize) -> Result<MediaAttachment> {
        if index >= self.media.len() {
            return Err(ThreadlineError::Validation(format!(
                "No media attachment at position {}",
                index
            )));
        }
        Ok(self.media.remove(index))
    }

    /// Quoted post, if any
    pub fn quoted_post(&self) -> Option<&PostId> {
        self.quoted_post.as_ref()
    }

    /// Pick the channel to post in
    pub fn set_channel(&mut self, channel: Option<String>) {
        self.channel = channel;
    }

    /// Selected channel
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    /// Attach or remove a schedule
    pub fn set_schedule(&mut self, schedule: Option<Schedule>) {
        self.schedule = schedule;
    }

    /// Attached schedule
    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// Check if there is neither text nor media
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.media.is_empty()
    }

    /// Mark a send as in flight, or done
    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    /// Check if a send is in flight
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Check if the post could be sent as is
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.is_empty() && !self.is_over_limit()
    }

    /// Close the flow and hand back what to publish
    pub fn finish(self) -> Result<Submission> {
        if self.is_empty() {
            return Err(ThreadlineError::Validation(
                "Post needs text or media".to_string(),
            ));
        }
        if self.is_over_limit() {
            return Err(ThreadlineError::Validation(format!(
                "Post is {} characters over the limit of {}",
                self.characters_over(),
                self.character_limit
            )));
        }

        debug!(
            "Compose session finished: {} chars, {} media, scheduled: {}",
            self.text.chars().count(),
            self.media.len(),
            self.schedule.is_some()
        );

        Ok(Submission {
            text: self.text,
            media: self.media,
            quoted_post: self.quoted_post,
            channel: self.channel,
            schedule: self.schedule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::schedule::ScheduleDraft;
    use chrono::DateTime;

    fn config(limit: usize) -> ComposeConfig {
        ComposeConfig {
            character_limit: limit,
            max_media: 2,
        }
    }

    #[test]
    fn test_character_limit() {
        let mut session = ComposeSession::new(&config(5));
        session.set_text("héllo");
        assert_eq!(session.characters_over(), 0);
        assert!(!session.is_over_limit());

        session.set_text("héllo!!");
        assert_eq!(session.characters_over(), 2);
        assert!(session.is_over_limit());
        assert!(!session.can_submit());
    }

    #[test]
    fn test_media_cap() {
        let mut session = ComposeSession::new(&config(320));
        session.add_media(MediaAttachment::image("a")).unwrap();
        session.add_media(MediaAttachment::gif("b")).unwrap();
        assert!(session.add_media(MediaAttachment::image("c")).is_err());

        let removed = session.remove_media(0).unwrap();
        assert_eq!(removed.uri, "a");
        assert!(session.remove_media(5).is_err());
        assert_eq!(session.media().len(), 1);
    }

    #[test]
    fn test_quoting_uses_a_slot() {
        let mut session = ComposeSession::quoting(&config(320), PostId::from(7u64));
        assert_eq!(session.allowed_media(), 1);
        session.add_media(MediaAttachment::image("a")).unwrap();
        assert!(session.add_media(MediaAttachment::image("b")).is_err());
    }

    #[test]
    fn test_finish() {
        let mut session = ComposeSession::new(&config(320));
        assert!(session.clone().finish().is_err());

        session.set_text("gm");
        session.set_channel(Some("rust".to_string()));
        let now = DateTime::parse_from_rfc3339("2024-06-10T09:00:00Z").unwrap();
        session.set_schedule(Some(ScheduleDraft::new(now).confirm()));

        let submission = session.finish().unwrap();
        assert_eq!(submission.text, "gm");
        assert_eq!(submission.channel.as_deref(), Some("rust"));
        assert_eq!(submission.schedule.unwrap().at, now);
    }

    #[test]
    fn test_media_only_post_is_allowed() {
        let mut session = ComposeSession::new(&config(320));
        session.add_media(MediaAttachment::video("v")).unwrap();
        assert!(session.can_submit());
    }

    #[test]
    fn test_no_submit_while_in_flight() {
        let mut session = ComposeSession::new(&config(320));
        session.set_text("gm");
        assert!(session.can_submit());

        session.set_submitting(true);
        assert!(session.is_submitting());
        assert!(!session.can_submit());

        session.set_submitting(false);
        assert!(session.can_submit());
    }
}
