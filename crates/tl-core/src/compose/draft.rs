//! Post draft models

use serde::{Deserialize, Serialize};

/// Community a post is filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
}

/// Kind of attached media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Gif,
    Video,
}

/// A picked media item, referenced by URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAttachment {
    pub kind: MediaKind,
    pub uri: String,
}

impl MediaAttachment {
    /// Image attachment
    pub fn image(uri: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            uri: uri.into(),
        }
    }

    /// Animated GIF attachment
    pub fn gif(uri: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Gif,
            uri: uri.into(),
        }
    }

    /// Video attachment
    pub fn video(uri: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            uri: uri.into(),
        }
    }
}

/// Titled post being written for a community
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub sub_category: Option<SubCategory>,
    pub url_preview_image: String,
    pub images: Vec<MediaAttachment>,
    pub videos: Vec<MediaAttachment>,
    pub tags: Vec<String>,
}

impl PostDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the body text
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Pick or unpick the community
    pub fn set_sub_category(&mut self, sub_category: Option<SubCategory>) {
        self.sub_category = sub_category;
    }

    /// Set the link preview image
    pub fn set_url_preview_image(&mut self, url: impl Into<String>) {
        self.url_preview_image = url.into();
    }

    /// Replace the selected images
    pub fn set_images(&mut self, images: Vec<MediaAttachment>) {
        self.images = images;
    }

    /// Replace the selected videos
    pub fn set_videos(&mut self, videos: Vec<MediaAttachment>) {
        self.videos = videos;
    }

    /// Add a tag, ignoring duplicates
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Check if nothing has been entered yet
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
            && self.body.trim().is_empty()
            && self.images.is_empty()
            && self.videos.is_empty()
    }

    /// Clear everything
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
