//! Feed item entity
//!
//! One `<item>` of the output document. Built from a post and never mutated.

use chrono::{DateTime, FixedOffset, Utc};

/// RFC-822 style date as written to `pubDate` and `lastBuildDate`
pub const RSS_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// What goes into an item's `<title>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleMode {
    /// Plain post text
    #[default]
    Text,
    /// Same rendered HTML as the description (legacy feeds)
    Html,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    /// Rendered HTML, written as CDATA
    pub description: String,
    pub pub_date: String,
    pub link: String,
    /// Same value as `link`
    pub guid: String,
}

pub fn format_rss_date<Tz: chrono::TimeZone>(at: &DateTime<Tz>) -> String {
    at.with_timezone(&Utc).format(RSS_DATE_FORMAT).to_string()
}

/// Parse an API timestamp (`2025-02-19T13:23:32.000Z`)
pub fn parse_created_at(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.trim()).ok()
}
