//! Shared HTTP response helpers.
//!
//! Centralizes the status check (non-success → [`ClientError::Remote`]) and
//! tolerant JSON decoding (shape mismatch → [`ClientError::Decode`]) so the
//! resource methods stay focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Check an HTTP response for a success status.
///
/// Returns the response unchanged on success; otherwise
/// [`ClientError::Remote`] with the status code and response body.
pub async fn check_response(
    endpoint: &str,
    resp: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ClientError::Remote {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the whole body and decode it as JSON. Unknown fields are ignored.
pub async fn decode_json<T: DeserializeOwned>(
    endpoint: &str,
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::entities::Post;

    const ENDPOINT: &str = "http://blog.test/posts";

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response(ENDPOINT, resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_created_is_success() {
        let resp = mock_response(201, "{}");
        assert!(check_response(ENDPOINT, resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_remote_error_keeps_body() {
        let resp = mock_response(503, "maintenance");
        let err = check_response(ENDPOINT, resp).await.unwrap_err();
        match err {
            ClientError::Remote {
                endpoint,
                status,
                body,
            } => {
                assert_eq!(endpoint, ENDPOINT);
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_not_found() {
        let resp = mock_response(404, "{}");
        let err = check_response(ENDPOINT, resp).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn decode_tolerates_unknown_fields() {
        let resp = mock_response(
            200,
            r#"[{"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit", "extra": true}]"#,
        );
        let posts: Vec<Post> = decode_json(ENDPOINT, resp).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "sunt aut facere");
    }

    #[tokio::test]
    async fn decode_shape_mismatch() {
        let resp = mock_response(200, r#"{"posts": []}"#);
        let err = decode_json::<Vec<Post>>(ENDPOINT, resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode { ref endpoint, .. } if endpoint == ENDPOINT));
    }

    #[tokio::test]
    async fn decode_malformed_json() {
        let resp = mock_response(200, "<html>oops</html>");
        let err = decode_json::<Vec<Post>>(ENDPOINT, resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
        let message = err.to_string();
        let expected = format!("cannot decode response from {ENDPOINT}");
        assert!(message.starts_with(&expected));
    }
}
