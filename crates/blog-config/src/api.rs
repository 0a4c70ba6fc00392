//! Blog API location: base URL and per-resource paths.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_users_path() -> String {
    "/users".to_string()
}

fn default_posts_path() -> String {
    "/posts".to_string()
}

fn default_comments_path() -> String {
    "/comments".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Scheme and host of the API (e.g., `https://jsonplaceholder.typicode.com`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the users collection, relative to `base_url`.
    #[serde(default = "default_users_path")]
    pub users_path: String,

    /// Path of the posts collection; also the target of post creation.
    #[serde(default = "default_posts_path")]
    pub posts_path: String,

    /// Path of the comments collection; also the target of comment creation.
    #[serde(default = "default_comments_path")]
    pub comments_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            users_path: default_users_path(),
            posts_path: default_posts_path(),
            comments_path: default_comments_path(),
        }
    }
}

impl ApiConfig {
    /// Join `path` onto the base URL with exactly one `/` between them.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    #[must_use]
    pub fn users_url(&self) -> String {
        self.url_for(&self.users_path)
    }

    #[must_use]
    pub fn posts_url(&self) -> String {
        self.url_for(&self.posts_path)
    }

    #[must_use]
    pub fn comments_url(&self) -> String {
        self.url_for(&self.comments_path)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a base URL without an
    /// `http(s)://` scheme and host, or an empty resource path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let host = self
            .base_url
            .strip_prefix("https://")
            .or_else(|| self.base_url.strip_prefix("http://"));
        match host {
            None => {
                return Err(ConfigError::invalid(
                    "api.base_url",
                    format!("'{}' must start with http:// or https://", self.base_url),
                ));
            }
            Some(host) if host.trim_matches('/').is_empty() => {
                return Err(ConfigError::invalid("api.base_url", "missing host"));
            }
            Some(_) => {}
        }

        for (field, path) in [
            ("api.users_path", &self.users_path),
            ("api.posts_path", &self.posts_path),
            ("api.comments_path", &self.comments_path),
        ] {
            if path.trim_matches('/').trim().is_empty() {
                return Err(ConfigError::invalid(field, "path must not be empty"));
            }
        }
        Ok(())
    }
}
