//! Mock implementations of port traits
//!
//! In-memory post sources that return canned pages or errors.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::entities::TimelinePage;
use crate::domain::ports::PostSource;
use crate::error::SourceError;

/// Returns the same page on every call and counts calls
#[derive(Default)]
pub struct StaticPostSource {
    page: TimelinePage,
    calls: AtomicUsize,
}

impl StaticPostSource {
    pub fn new(page: TimelinePage) -> Self {
        Self {
            page,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostSource for StaticPostSource {
    async fn fetch_timeline(&self) -> Result<TimelinePage, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.page.clone())
    }

    fn describe(&self) -> String {
        "static test source".to_string()
    }
}

/// Always fails with the configured error
pub struct FailingPostSource {
    make_error: fn() -> SourceError,
}

impl FailingPostSource {
    pub fn rate_limited() -> Self {
        Self {
            make_error: || SourceError::RateLimited,
        }
    }

    pub fn unauthorized() -> Self {
        Self {
            make_error: || SourceError::Unauthorized,
        }
    }
}

#[async_trait]
impl PostSource for FailingPostSource {
    async fn fetch_timeline(&self) -> Result<TimelinePage, SourceError> {
        Err((self.make_error)())
    }

    fn describe(&self) -> String {
        "failing test source".to_string()
    }
}
