//! Collection endpoints: `GET users`, `GET posts`, `GET comments`.

use blog_core::entities::{Comment, Post, User};
use serde::de::DeserializeOwned;

use crate::http::{check_response, decode_json};
use crate::{BlogClient, BlogGateway, ClientError, send};

impl BlogClient {
    /// GET `url` and decode the JSON body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let resp = send(self.http.get(url), "GET", url).await?;
        let resp = check_response(url, resp).await?;
        decode_json(url, resp).await
    }

    async fn get_collection<T: DeserializeOwned>(
        &self,
        url: &str,
        kind: &'static str,
    ) -> Result<Vec<T>, ClientError> {
        let items: Vec<T> = self.get_json(url).await?;
        tracing::debug!(kind, count = items.len(), "fetched collection");
        Ok(items)
    }
}

impl BlogGateway for BlogClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the payload is not a user array.
    async fn fetch_users(&self) -> Result<Vec<User>, ClientError> {
        self.get_collection(&self.api.users_url(), "users").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the payload is not a post array.
    async fn fetch_posts(&self) -> Result<Vec<Post>, ClientError> {
        self.get_collection(&self.api.posts_url(), "posts").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the payload is not a comment array.
    async fn fetch_comments(&self) -> Result<Vec<Comment>, ClientError> {
        self.get_collection(&self.api.comments_url(), "comments")
            .await
    }
}
