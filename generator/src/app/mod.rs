//! Application layer
//!
//! Orchestrates the post source and the feed renderer.

pub mod feed_service;

pub use feed_service::FeedService;
