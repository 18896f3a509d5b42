//! Post domain entity
//!
//! Posts come from the X API v2 timeline endpoint. The serde shape matches
//! the API payload so a saved response can be read back unchanged.

use serde::{Deserialize, Serialize};

/// One post from the timeline. Read-only once decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub text: String,
    /// ISO-8601 creation time, e.g. `2025-02-19T13:23:32.000Z`
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Entities>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Attachments>,
}

impl Post {
    /// Media keys from the attachment list, in post order
    pub fn media_keys(&self) -> &[String] {
        self.attachments
            .as_ref()
            .map(|a| a.media_keys.as_slice())
            .unwrap_or(&[])
    }

    /// Raw text with media placeholder short links removed
    pub fn plain_text(&self) -> String {
        let mut text = self.text.clone();
        if let Some(entities) = &self.entities {
            for url in entities.urls.iter().filter(|u| u.is_media()) {
                if !url.url.is_empty() {
                    text = text.replace(&url.url, "");
                }
            }
        }
        text.trim().to_string()
    }
}

/// Structured annotations on a post's text.
///
/// Spans (`start`/`end`) are carried for completeness; substitution works on
/// literal text, not offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub urls: Vec<UrlEntity>,
    #[serde(default)]
    pub mentions: Vec<MentionEntity>,
    #[serde(default)]
    pub hashtags: Vec<HashtagEntity>,
}

/// A short link in the text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntity {
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
    /// Short-link token as it appears in the text (`https://t.co/...`)
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_url: Option<String>,
    /// Set when the link is a placeholder for an attached photo/video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_key: Option<String>,
}

impl UrlEntity {
    pub fn is_media(&self) -> bool {
        self.media_key.is_some()
    }

    /// Link target: expanded URL, falling back to the short link
    pub fn href(&self) -> &str {
        self.expanded_url.as_deref().unwrap_or(&self.url)
    }

    /// Visible text: display URL, then expanded URL, then the short link
    pub fn label(&self) -> &str {
        self.display_url.as_deref().unwrap_or_else(|| self.href())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionEntity {
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagEntity {
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
    /// Tag without the leading `#`
    pub tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachments {
    #[serde(default)]
    pub media_keys: Vec<String>,
}
