use std::env;
use std::path::PathBuf;

use crate::domain::entities::TitleMode;
use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.twitter.com";
pub const DEFAULT_USERNAME: &str = "CUSocialMedia";
/// Numeric id of the default account (from /2/users/by/username/CUSocialMedia)
pub const DEFAULT_USER_ID: &str = "132922064";
pub const DEFAULT_MAX_POSTS: u8 = 10;
pub const DEFAULT_OUTPUT_PATH: &str = "feeds/cusocialmedia_rss.xml";

#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the X API. Only required when fetching live.
    pub bearer_token: Option<String>,
    pub api_url: String,
    /// Account name used for permalinks and channel metadata
    pub username: String,
    pub user_id: String,
    /// `max_results` for the timeline request (API accepts 5..=100)
    pub max_posts: u8,
    pub output_path: PathBuf,
    /// Saved timeline response to render instead of calling the API
    pub timeline_file: Option<PathBuf>,
    pub title_mode: TitleMode,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let max_posts = match var("FEED_MAX_POSTS") {
            Some(raw) => parse_max_posts(&raw)?,
            None => DEFAULT_MAX_POSTS,
        };

        let title_mode = match var("FEED_HTML_TITLES") {
            Some(raw) => {
                if parse_bool("FEED_HTML_TITLES", &raw)? {
                    TitleMode::Html
                } else {
                    TitleMode::Text
                }
            }
            None => TitleMode::Text,
        };

        Ok(Self {
            bearer_token: var("X_BEARER_TOKEN").or_else(|| var("BEARER_TOKEN")),
            api_url: var("X_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            username: var("FEED_USERNAME").unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            user_id: var("FEED_USER_ID").unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
            max_posts,
            output_path: var("FEED_OUTPUT_PATH")
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string())
                .into(),
            timeline_file: var("FEED_TIMELINE_FILE").map(PathBuf::from),
            title_mode,
        })
    }

    /// Bearer token, required when no timeline file is configured
    pub fn require_bearer_token(&self) -> Result<&str, ConfigError> {
        self.bearer_token
            .as_deref()
            .ok_or(ConfigError::Missing("X_BEARER_TOKEN"))
    }
}

fn parse_max_posts(raw: &str) -> Result<u8, ConfigError> {
    match raw.trim().parse::<u8>() {
        Ok(n) if (5..=100).contains(&n) => Ok(n),
        _ => Err(ConfigError::Invalid {
            var: "FEED_MAX_POSTS",
            value: raw.to_string(),
        }),
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: raw.to_string(),
        }),
    }
}
