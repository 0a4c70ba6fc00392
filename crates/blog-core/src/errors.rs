//! Cross-cutting error types for blogcheck.
//!
//! Transport and decoding failures live in `blog-client` (`ClientError`);
//! configuration failures in `blog-config`. The binary converges them with
//! `anyhow` at the edge.

use thiserror::Error;

use crate::entities::UserId;

/// Errors raised by the pure correlation, lookup, and validation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Entity lookup returned no result. `key` is the searched value.
    #[error("Entity not found: {entity_type} '{key}'")]
    NotFound { entity_type: String, key: String },

    /// The user exists but owns no posts in the fetched collection.
    #[error("No posts found for user {user_id}")]
    NoPostsForUser { user_id: UserId },

    /// The user's posts have no comments in the fetched collection.
    #[error("No comments found on posts of user {user_id}")]
    NoCommentsForUser { user_id: UserId },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub(crate) fn not_found(entity_type: &str, key: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            key: key.to_string(),
        }
    }
}
