//! Post source port trait
//!
//! Defines where timeline pages come from: the live API or a saved response.

use async_trait::async_trait;

use crate::domain::entities::TimelinePage;
use crate::error::SourceError;

#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the most recent page of posts, newest first
    async fn fetch_timeline(&self) -> Result<TimelinePage, SourceError>;

    /// Short description for logs
    fn describe(&self) -> String;
}
