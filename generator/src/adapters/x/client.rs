//! X API v2 client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::entities::TimelinePage;
use crate::domain::ports::PostSource;
use crate::error::SourceError;

const TWEET_FIELDS: &str = "id,text,author_id,created_at,attachments,entities";
const EXPANSIONS: &str = "attachments.media_keys";
const MEDIA_FIELDS: &str = "url,type,alt_text,preview_image_url";
const EXCLUDE: &str = "replies,retweets";

/// Reads a user's timeline from the X API. One request per run, no paging.
pub struct XApiClient {
    http: Client,
    base_url: String,
    user_id: String,
    max_results: u8,
}

impl XApiClient {
    pub fn new(
        base_url: &str,
        bearer_token: &str,
        user_id: &str,
        max_results: u8,
    ) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", bearer_token))
            .map_err(|_| SourceError::InvalidToken)?;
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.to_string(),
            max_results,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/2{}", self.base_url, path)
    }

    fn timeline_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("max_results", self.max_results.to_string()),
            ("exclude", EXCLUDE.to_string()),
            ("tweet.fields", TWEET_FIELDS.to_string()),
            ("expansions", EXPANSIONS.to_string()),
            ("media.fields", MEDIA_FIELDS.to_string()),
        ]
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, SourceError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| SourceError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(SourceError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(SourceError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(SourceError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PostSource for XApiClient {
    async fn fetch_timeline(&self) -> Result<TimelinePage, SourceError> {
        let url = self.api_url(&format!("/users/{}/tweets", self.user_id));
        tracing::debug!(%url, max_results = self.max_results, "Fetching timeline");

        let response = self
            .http
            .get(&url)
            .query(&self.timeline_query())
            .send()
            .await?;

        self.handle_response(response).await
    }

    fn describe(&self) -> String {
        format!("X API user {}", self.user_id)
    }
}
