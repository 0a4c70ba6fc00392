//! Creation endpoints: `POST posts`, `POST comments`.
//!
//! `create_*` treat a non-success status as an error and decode the echoed
//! entity. `submit_*` hand back status and body untouched, for checks that
//! expect the API to reject the payload.

use blog_core::entities::{Comment, NewComment, NewPost, Post};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::{check_response, decode_json};
use crate::{BlogClient, ClientError, RawResponse, into_raw, send};

impl BlogClient {
    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<(String, reqwest::Response), ClientError> {
        let url = self.api.url_for(path);
        let request = self.http.post(&url).json(payload);
        let resp = send(request, "POST", &url).await?;
        Ok((url, resp))
    }

    async fn create<B, T>(&self, path: &str, payload: &B) -> Result<T, ClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let (url, resp) = self.post_json(path, payload).await?;
        let resp = check_response(&url, resp).await?;
        decode_json(&url, resp).await
    }

    /// Create a post and return the entity the API echoes back.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API rejects the
    /// post, or the echoed body is not a post.
    pub async fn create_post(&self, post: &NewPost) -> Result<Post, ClientError> {
        self.create(&self.api.posts_path, post).await
    }

    /// Create a comment and return the entity the API echoes back.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API rejects the
    /// comment, or the echoed body is not a comment.
    pub async fn create_comment(&self, comment: &NewComment) -> Result<Comment, ClientError> {
        self.create(&self.api.comments_path, comment).await
    }

    /// Submit a post without interpreting the response status.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the request or body read fails.
    pub async fn submit_post(&self, post: &NewPost) -> Result<RawResponse, ClientError> {
        let (_, resp) = self.post_json(&self.api.posts_path, post).await?;
        into_raw(resp).await
    }

    /// Submit a comment without interpreting the response status.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the request or body read fails.
    pub async fn submit_comment(&self, comment: &NewComment) -> Result<RawResponse, ClientError> {
        let (_, resp) = self.post_json(&self.api.comments_path, comment).await?;
        into_raw(resp).await
    }
}
