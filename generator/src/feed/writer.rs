//! RSS 2.0 output
//!
//! Assembles the `<channel>` and writes the document to disk.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};

use crate::domain::entities::{format_rss_date, Account, FeedItem};
use crate::error::FeedError;

/// Build the channel for an account. Items keep the order given.
pub fn build_channel(account: &Account, items: &[FeedItem], built_at: DateTime<Utc>) -> Channel {
    ChannelBuilder::default()
        .title(format!("Tweets by @{}", account.username))
        .link(account.profile_url())
        .description(format!("Recent tweets posted by @{}", account.username))
        .last_build_date(Some(format_rss_date(&built_at)))
        .items(items.iter().map(to_rss_item).collect::<Vec<Item>>())
        .build()
}

fn to_rss_item(item: &FeedItem) -> Item {
    ItemBuilder::default()
        .title(Some(item.title.clone()))
        .link(Some(item.link.clone()))
        .description(Some(item.description.clone()))
        .pub_date(Some(item.pub_date.clone()))
        .guid(Some(
            GuidBuilder::default()
                .value(item.guid.clone())
                .permalink(true)
                .build(),
        ))
        .build()
}

/// Serialize with an XML declaration, two-space indented
pub fn render_document(channel: &Channel) -> Result<Vec<u8>, FeedError> {
    let buf = channel.pretty_write_to(Vec::new(), b' ', 2)?;
    Ok(buf)
}

/// Write the document, creating parent directories as needed
pub fn write_channel(channel: &Channel, path: &Path) -> Result<(), FeedError> {
    let document = render_document(channel)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, document)?;

    tracing::debug!(path = %path.display(), items = channel.items().len(), "Feed written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_item(id: &str, description: &str) -> FeedItem {
        let link = format!("https://x.com/CUSocialMedia/status/{}", id);
        FeedItem {
            title: "Plain title".to_string(),
            description: description.to_string(),
            pub_date: "Wed, 19 Feb 2025 13:23:32 GMT".to_string(),
            guid: link.clone(),
            link,
        }
    }

    fn built_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 22, 8, 0, 0).unwrap()
    }

    #[test]
    fn channel_metadata_from_account() {
        let account = Account::new("CUSocialMedia");

        let channel = build_channel(&account, &[], built_at());

        assert_eq!(channel.title(), "Tweets by @CUSocialMedia");
        assert_eq!(channel.link(), "https://x.com/CUSocialMedia");
        assert_eq!(channel.description(), "Recent tweets posted by @CUSocialMedia");
        assert_eq!(
            channel.last_build_date(),
            Some("Thu, 22 May 2025 08:00:00 GMT")
        );
        assert!(channel.items().is_empty());
    }

    #[test]
    fn items_keep_order_and_fields() {
        let account = Account::new("CUSocialMedia");
        let items = vec![sample_item("2", "newer"), sample_item("1", "older")];

        let channel = build_channel(&account, &items, built_at());

        assert_eq!(channel.items().len(), 2);
        let first = &channel.items()[0];
        assert_eq!(first.description(), Some("newer"));
        assert_eq!(first.title(), Some("Plain title"));
        assert_eq!(first.link(), Some("https://x.com/CUSocialMedia/status/2"));
        assert_eq!(first.pub_date(), Some("Wed, 19 Feb 2025 13:23:32 GMT"));
        let guid = first.guid().unwrap();
        assert_eq!(guid.value(), "https://x.com/CUSocialMedia/status/2");
        assert!(guid.is_permalink());
        assert_eq!(channel.items()[1].description(), Some("older"));
    }

    #[test]
    fn description_is_written_as_cdata() {
        let html = "Hi <a href=\"https://x.com/a\" target=\"_blank\">@a</a>";
        let channel = build_channel(
            &Account::new("acct"),
            &[sample_item("1", html)],
            built_at(),
        );

        let xml = String::from_utf8(render_document(&channel).unwrap()).unwrap();

        assert!(xml.contains("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains("<rss version=\"2.0\""));
        assert!(xml.contains(&format!("<![CDATA[{}]]>", html)));
        assert!(xml.contains("<title>Tweets by @acct</title>"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feeds").join("nested").join("out.xml");
        let channel = build_channel(
            &Account::new("CUSocialMedia"),
            &[sample_item("1", "hello")],
            built_at(),
        );

        write_channel(&channel, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("<item>"));
        assert!(written.contains("https://x.com/CUSocialMedia/status/1"));
    }

    #[test]
    fn write_overwrites_existing_feed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xml");
        fs::write(&path, "stale").unwrap();
        let channel = build_channel(&Account::new("acct"), &[], built_at());

        write_channel(&channel, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        assert!(written.contains("<channel>"));
    }
}
