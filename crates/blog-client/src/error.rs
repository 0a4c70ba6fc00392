//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the blog API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("{endpoint} returned {status}: {body}")]
    Remote {
        /// URL of the failed request.
        endpoint: String,
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The payload did not match the expected shape.
    #[error("cannot decode response from {endpoint}: {source}")]
    Decode {
        /// URL of the request whose body failed to decode.
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API configuration handed to the client is unusable.
    #[error(transparent)]
    Config(#[from] blog_config::ConfigError),
}

impl ClientError {
    /// HTTP status of a [`ClientError::Remote`] error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
