//! Timeline read from a saved API response
//!
//! Lets a feed be regenerated offline from a response body captured earlier.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::entities::TimelinePage;
use crate::domain::ports::PostSource;
use crate::error::SourceError;

pub struct TimelineFile {
    path: PathBuf,
}

impl TimelineFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl PostSource for TimelineFile {
    async fn fetch_timeline(&self) -> Result<TimelinePage, SourceError> {
        let raw = tokio::fs::read(&self.path).await?;
        serde_json::from_slice(&raw).map_err(|e| {
            SourceError::Deserialization(format!("{}: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        format!("timeline file {}", self.path.display())
    }
}
