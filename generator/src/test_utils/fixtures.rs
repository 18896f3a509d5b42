//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{
    Attachments, HashtagEntity, Media, MediaKind, MentionEntity, Post, UrlEntity,
};

/// Create a post with no entities or attachments
pub fn test_post(id: &str, text: &str) -> Post {
    Post {
        id: id.to_string(),
        text: text.to_string(),
        created_at: "2025-02-19T13:23:32.000Z".to_string(),
        author_id: Some("132922064".to_string()),
        entities: None,
        attachments: None,
    }
}

/// Create a post with the given attachment media keys
pub fn test_post_with_attachments(id: &str, text: &str, media_keys: &[&str]) -> Post {
    Post {
        attachments: Some(Attachments {
            media_keys: media_keys.iter().map(|k| k.to_string()).collect(),
        }),
        ..test_post(id, text)
    }
}

pub fn test_url(url: &str, expanded: Option<&str>, display: Option<&str>) -> UrlEntity {
    UrlEntity {
        start: 0,
        end: url.len(),
        url: url.to_string(),
        expanded_url: expanded.map(|s| s.to_string()),
        display_url: display.map(|s| s.to_string()),
        media_key: None,
    }
}

pub fn test_mention(username: &str) -> MentionEntity {
    MentionEntity {
        start: 0,
        end: username.len() + 1,
        username: username.to_string(),
    }
}

pub fn test_hashtag(tag: &str) -> HashtagEntity {
    HashtagEntity {
        start: 0,
        end: tag.len() + 1,
        tag: tag.to_string(),
    }
}

/// Create a media descriptor with both a direct and a preview URL
pub fn test_media(key: &str, kind: MediaKind) -> Media {
    Media {
        media_key: key.to_string(),
        kind,
        url: Some(format!("https://pbs.twimg.com/media/{}.jpg", key)),
        preview_image_url: Some(format!("https://pbs.twimg.com/preview/{}.jpg", key)),
        alt_text: None,
    }
}
