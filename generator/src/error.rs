//! Unified error types for the feed generator
//!
//! This module defines error types for each layer:
//! - `ConfigError`: Missing or malformed environment settings
//! - `SourceError`: Post source errors (X API or saved timeline file)
//! - `FeedError`: Feed item construction and RSS output errors
//! - `AppError`: Application layer errors (wraps the above)

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Post source errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid bearer token")]
    Unauthorized,

    #[error("Bearer token is not a valid header value")]
    InvalidToken,

    #[error("Rate limited")]
    RateLimited,

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Failed to read timeline file: {0}")]
    Io(#[from] std::io::Error),
}

/// Feed construction and output errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Post {post_id} has an invalid created_at timestamp: {value}")]
    InvalidTimestamp { post_id: String, value: String },

    #[error("Failed to write feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize feed: {0}")]
    Xml(#[from] rss::Error),
}

/// Application layer errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),
}
