//! The account whose timeline is published

/// Public web base for profiles, statuses and hashtag search
pub const X_WEB_URL: &str = "https://x.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
}

impl Account {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn profile_url(&self) -> String {
        profile_url(&self.username)
    }

    pub fn permalink(&self, post_id: &str) -> String {
        format!("{}/{}/status/{}", X_WEB_URL, self.username, post_id)
    }
}

pub fn profile_url(username: &str) -> String {
    format!("{}/{}", X_WEB_URL, username)
}

pub fn hashtag_url(tag: &str) -> String {
    format!("{}/hashtag/{}?src=hashtag_click", X_WEB_URL, tag)
}
