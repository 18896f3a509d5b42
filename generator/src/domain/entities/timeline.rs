//! Timeline page returned by the post source

use serde::Deserialize;

use super::{Media, MediaMap, Post};

/// One page of the user timeline, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TimelinePage {
    /// Absent when the account has no matching posts
    #[serde(default)]
    pub data: Vec<Post>,
    #[serde(default)]
    pub includes: Includes,
    #[serde(default)]
    pub meta: Option<TimelineMeta>,
}

impl TimelinePage {
    pub fn media_map(&self) -> MediaMap {
        MediaMap::from_media(self.includes.media.iter().cloned())
    }
}

/// Side-channel expansions for the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Includes {
    #[serde(default)]
    pub media: Vec<Media>,
}

/// Paging metadata. Logged only; the cursor is never followed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TimelineMeta {
    #[serde(default)]
    pub result_count: u32,
    #[serde(default)]
    pub newest_id: Option<String>,
    #[serde(default)]
    pub oldest_id: Option<String>,
    #[serde(default)]
    pub next_token: Option<String>,
}
