//! Feed renderer
//!
//! Turns a post into the HTML shown in feed readers: short links become
//! anchors, mentions and hashtags link back to X, attachments are appended
//! as inline images.

use crate::domain::entities::{
    format_rss_date, hashtag_url, parse_created_at, profile_url, Account, FeedItem, MediaMap,
    Post, TitleMode,
};
use crate::error::FeedError;

const MEDIA_CONTAINER_OPEN: &str = "<div style=\"display:flex; flex-wrap:wrap; border-radius:16px; overflow: hidden; width: fit-content;\">";
const MEDIA_CONTAINER_CLOSE: &str = "</div>";

/// Render a post's text and attachments to HTML.
///
/// Substitution is literal and global: every occurrence of a token is
/// replaced, in the order urls, mentions, hashtags. Later passes see the
/// output of earlier ones.
pub fn render_post(post: &Post, media: &MediaMap) -> String {
    let mut text = post.text.clone();

    if let Some(entities) = &post.entities {
        for url in &entities.urls {
            if url.url.is_empty() {
                continue;
            }
            if url.is_media() {
                // Re-rendered as an inline image below
                text = text.replace(&url.url, "");
            } else {
                text = text.replace(&url.url, &anchor(url.href(), url.label()));
            }
        }

        for mention in &entities.mentions {
            if mention.username.is_empty() {
                continue;
            }
            let token = format!("@{}", mention.username);
            text = text.replace(&token, &anchor(&profile_url(&mention.username), &token));
        }

        for hashtag in &entities.hashtags {
            if hashtag.tag.is_empty() {
                continue;
            }
            let token = format!("#{}", hashtag.tag);
            text = text.replace(&token, &anchor(&hashtag_url(&hashtag.tag), &token));
        }
    }

    // An attachment list always gets its container, even when empty
    if post.attachments.is_some() {
        text.push_str(&render_media(post.media_keys(), media));
    }

    text
}

/// Build the feed item for a post
pub fn render_item(
    post: &Post,
    media: &MediaMap,
    account: &Account,
    title_mode: TitleMode,
) -> Result<FeedItem, FeedError> {
    let created_at =
        parse_created_at(&post.created_at).ok_or_else(|| FeedError::InvalidTimestamp {
            post_id: post.id.clone(),
            value: post.created_at.clone(),
        })?;

    let description = render_post(post, media);
    let title = match title_mode {
        TitleMode::Text => post.plain_text(),
        TitleMode::Html => description.clone(),
    };
    let link = account.permalink(&post.id);

    Ok(FeedItem {
        title,
        description,
        pub_date: format_rss_date(&created_at),
        guid: link.clone(),
        link,
    })
}

fn anchor(href: &str, text: &str) -> String {
    format!("<a href=\"{}\" target=\"_blank\">{}</a>", href, text)
}

/// Inline images for the attachment list.
///
/// A single image spans the full width at its natural ratio; two or more
/// share rows at half width, cropped to 4:3.
fn render_media(keys: &[String], media: &MediaMap) -> String {
    let (width, aspect_ratio) = if keys.len() > 1 {
        (50, "4/3")
    } else {
        (100, "auto")
    };

    let mut buf = String::from(MEDIA_CONTAINER_OPEN);
    for key in keys {
        let Some(item) = media.get(key) else {
            tracing::debug!(media_key = %key, "Attachment missing from includes, skipping");
            continue;
        };
        let Some(src) = item.image_src() else {
            tracing::debug!(media_key = %key, kind = ?item.kind, "No image for attachment, skipping");
            continue;
        };
        buf.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" style=\"max-width:{}%; max-height: 300px; height:auto; aspect-ratio:{}; object-fit: cover;\" />",
            src,
            html_escape::encode_double_quoted_attribute(item.alt_text.as_deref().unwrap_or("")),
            width,
            aspect_ratio
        ));
    }
    buf.push_str(MEDIA_CONTAINER_CLOSE);
    buf
}
