//! Media descriptors and the per-run media map
//!
//! The timeline response lists attached media once, in `includes.media`.
//! Posts refer to them by `media_key`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Media type as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Photo,
    Video,
    AnimatedGif,
    #[serde(other)]
    Unknown,
}

/// One attached photo, video or gif
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub media_key: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Direct image URL (photos only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Still frame for videos and gifs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl Media {
    /// Image to show inline. Videos and gifs only ever show their preview frame.
    pub fn image_src(&self) -> Option<&str> {
        match self.kind {
            MediaKind::Photo => self.url.as_deref(),
            MediaKind::Video | MediaKind::AnimatedGif => self.preview_image_url.as_deref(),
            MediaKind::Unknown => None,
        }
    }
}

/// Lookup from media key to descriptor, built once per feed generation
#[derive(Debug, Clone, Default)]
pub struct MediaMap {
    by_key: HashMap<String, Media>,
}

impl MediaMap {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Later entries win when a key repeats
    pub fn from_media<I>(media: I) -> Self
    where
        I: IntoIterator<Item = Media>,
    {
        Self {
            by_key: media
                .into_iter()
                .map(|m| (m.media_key.clone(), m))
                .collect(),
        }
    }

    pub fn get(&self, media_key: &str) -> Option<&Media> {
        self.by_key.get(media_key)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
