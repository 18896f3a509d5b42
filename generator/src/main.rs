//! Post feed generator
//!
//! Fetches the most recent posts of an X account and publishes them as a
//! static RSS 2.0 document. Uses hexagonal (ports & adapters) layout:
//! the timeline comes from a `PostSource`, either the live API or a saved
//! response on disk.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rss::Channel;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;

#[cfg(test)]
mod test_utils;

use adapters::{TimelineFile, XApiClient};
use app::FeedService;
use config::Config;
use domain::entities::Account;
use domain::ports::PostSource;
use error::AppError;
use feed::write_channel;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,postfeed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Invalid configuration")?;

    let items = run(&config, Utc::now()).await?;

    tracing::info!(
        path = %config.output_path.display(),
        items,
        "RSS feed saved"
    );

    Ok(())
}

/// Generate and write the feed. Returns the number of items written.
async fn run(config: &Config, built_at: DateTime<Utc>) -> Result<usize> {
    let account = Account::new(config.username.as_str());

    let channel = match &config.timeline_file {
        Some(path) => generate(TimelineFile::new(path), account, config, built_at).await,
        None => {
            let token = config.require_bearer_token().map_err(AppError::from)?;
            let client =
                XApiClient::new(&config.api_url, token, &config.user_id, config.max_posts)
                    .map_err(AppError::from)?;
            generate(client, account, config, built_at).await
        }
    }
    .context("Failed to generate feed")?;

    write_channel(&channel, &config.output_path)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    Ok(channel.items().len())
}

async fn generate<S: PostSource>(
    source: S,
    account: Account,
    config: &Config,
    built_at: DateTime<Utc>,
) -> Result<Channel, AppError> {
    let service = FeedService::new(Arc::new(source), account, config.title_mode);
    service.generate_channel(built_at).await
}
