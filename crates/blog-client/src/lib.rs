//! # blog-client
//!
//! HTTP client for the blog API (users, posts, comments).
//!
//! [`BlogClient`] is the production fetch gateway: it performs the HTTP
//! calls and decodes JSON arrays into `blog-core` entities. Read-only callers
//! should depend on the [`BlogGateway`] trait instead, so they can run
//! against in-memory collections.
//!
//! Failure mapping:
//! - non-success status → [`ClientError::Remote`]
//! - payload shape mismatch → [`ClientError::Decode`] (unknown fields are
//!   ignored, not errors)
//! - connect/timeout/body read → [`ClientError::Transport`]
//!
//! The client never retries.

mod error;
mod fetch;
mod http;
mod write;

pub use error::ClientError;

use std::future::Future;
use std::time::Instant;

use blog_config::{ApiConfig, BlogConfig, HttpConfig};
use blog_core::entities::{Comment, Post, User};

// ── Types ──────────────────────────────────────────────────────────

/// Status and body of a response whose status is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Source of the three entity collections.
///
/// Each call returns the complete collection; there is no paging and no
/// partial result.
pub trait BlogGateway {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<User>, ClientError>> + Send;

    fn fetch_posts(&self) -> impl Future<Output = Result<Vec<Post>, ClientError>> + Send;

    fn fetch_comments(&self) -> impl Future<Output = Result<Vec<Comment>, ClientError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// `reqwest`-backed client for the blog API.
#[derive(Debug, Clone)]
pub struct BlogClient {
    http: reqwest::Client,
    api: ApiConfig,
}

impl BlogClient {
    /// Build a client for `api` with the timeout and user agent from `http`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if either section is invalid, and
    /// [`ClientError::Transport`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(api: &ApiConfig, http: &HttpConfig) -> Result<Self, ClientError> {
        api.validate()?;
        http.validate()?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .user_agent(http.user_agent.as_str())
            .timeout(http.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http: client,
            api: api.clone(),
        })
    }

    /// Build a client from a fully loaded [`BlogConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &BlogConfig) -> Result<Self, ClientError> {
        Self::new(&config.api, &config.http)
    }

    #[must_use]
    pub const fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// GET `path` (relative to the base URL) without interpreting the status.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the request or body read fails.
    pub async fn get_raw(&self, path: &str) -> Result<RawResponse, ClientError> {
        let url = self.api.url_for(path);
        let resp = send(self.http.get(&url), "GET", &url).await?;
        into_raw(resp).await
    }
}

/// Send a request, logging method, URL, status, and latency.
async fn send(
    request: reqwest::RequestBuilder,
    method: &str,
    url: &str,
) -> Result<reqwest::Response, ClientError> {
    tracing::debug!(method, url, "sending request");
    let started = Instant::now();
    let resp = request.send().await.inspect_err(|e| {
        tracing::debug!(method, url, %e, "request failed");
    })?;
    let elapsed = started.elapsed().as_millis();
    let elapsed_ms = u64::try_from(elapsed).unwrap_or(u64::MAX);
    tracing::debug!(
        method,
        url,
        status = resp.status().as_u16(),
        elapsed_ms,
        "response received"
    );
    Ok(resp)
}

async fn into_raw(resp: reqwest::Response) -> Result<RawResponse, ClientError> {
    let status = resp.status().as_u16();
    let body = resp.text().await?;
    Ok(RawResponse { status, body })
}
