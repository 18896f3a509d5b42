//! Feed service
//!
//! Fetches one timeline page and turns it into an RSS channel.
//! The whole document is built in memory; nothing is written if any post fails.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rss::Channel;

use crate::domain::entities::{Account, FeedItem, TitleMode};
use crate::domain::ports::PostSource;
use crate::error::AppError;
use crate::feed::{build_channel, render_item};

/// Service for generating an account's feed
pub struct FeedService<S>
where
    S: PostSource,
{
    source: Arc<S>,
    account: Account,
    title_mode: TitleMode,
}

impl<S> FeedService<S>
where
    S: PostSource,
{
    pub fn new(source: Arc<S>, account: Account, title_mode: TitleMode) -> Self {
        Self {
            source,
            account,
            title_mode,
        }
    }

    /// Fetch posts and render them into feed items, upstream order kept
    pub async fn generate_items(&self) -> Result<Vec<FeedItem>, AppError> {
        tracing::info!(source = %self.source.describe(), "Fetching posts");
        let page = self.source.fetch_timeline().await?;

        if let Some(meta) = &page.meta {
            tracing::debug!(
                result_count = meta.result_count,
                newest_id = ?meta.newest_id,
                oldest_id = ?meta.oldest_id,
                more_available = meta.next_token.is_some(),
                "Timeline page received"
            );
        }

        let media = page.media_map();
        tracing::info!(posts = page.data.len(), media = media.len(), "Rendering posts");

        let items = page
            .data
            .iter()
            .map(|post| render_item(post, &media, &self.account, self.title_mode))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(items)
    }

    /// Build the full channel, stamped with `built_at`
    pub async fn generate_channel(&self, built_at: DateTime<Utc>) -> Result<Channel, AppError> {
        let items = self.generate_items().await?;
        Ok(build_channel(&self.account, &items, built_at))
    }
}
