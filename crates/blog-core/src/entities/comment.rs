use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{CommentId, PostId};

/// A comment left on a post, linked through `post_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: PostId,
    pub id: CommentId,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Payload for `POST /comments`. Absent fields serialize as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: Option<PostId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub body: Option<String>,
}

impl NewComment {
    #[must_use]
    pub fn new(
        post_id: PostId,
        name: impl Into<String>,
        email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            post_id: Some(post_id),
            name: Some(name.into()),
            email: Some(email.into()),
            body: Some(body.into()),
        }
    }

    /// Whether `comment` carries exactly this payload, ignoring the
    /// server-assigned id.
    #[must_use]
    pub fn matches(&self, comment: &Comment) -> bool {
        self.post_id == Some(comment.post_id)
            && self.name.as_deref() == Some(comment.name.as_str())
            && self.email.as_deref() == Some(comment.email.as_str())
            && self.body.as_deref() == Some(comment.body.as_str())
    }
}
