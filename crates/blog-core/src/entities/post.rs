use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{PostId, UserId};

/// A blog post, owned by a user through `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

/// Payload for `POST /posts`.
///
/// Every field is optional and absent fields serialize as `null`, so a
/// deliberately malformed post can be submitted to check server-side
/// rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: Option<UserId>,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl NewPost {
    #[must_use]
    pub fn new(user_id: UserId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            title: Some(title.into()),
            body: Some(body.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_new_post_serializes_explicit_nulls() {
        let json = serde_json::to_value(NewPost::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "userId": null, "title": null, "body": null })
        );
    }

    #[test]
    fn post_ignores_unknown_fields() {
        let post: Post = serde_json::from_str(
            r#"{"userId": 1, "id": 7, "title": "qui est esse", "body": "est rerum", "tags": ["x"]}"#,
        )
        .unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.user_id, 1);
    }

    #[test]
    fn post_without_user_id_fails_to_decode() {
        let result: Result<Post, _> =
            serde_json::from_str(r#"{"id": 7, "title": "qui est esse", "body": "est rerum"}"#);
        assert!(result.is_err());
    }
}
