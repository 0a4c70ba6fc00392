//! Entity structs for the blog API.
//!
//! Field names serialize as camelCase to match the wire format (`userId`,
//! `postId`, `catchPhrase`). Decoding is tolerant: unknown fields are ignored,
//! so none of these types use `deny_unknown_fields`.

mod comment;
mod post;
mod user;

pub use comment::{Comment, NewComment};
pub use post::{NewPost, Post};
pub use user::{Address, Company, Geo, User};

/// Identifier of a [`User`].
pub type UserId = i64;

/// Identifier of a [`Post`].
pub type PostId = i64;

/// Identifier of a [`Comment`].
pub type CommentId = i64;
