//! Entity lookup helpers.

use crate::entities::{Comment, User};
use crate::errors::CoreError;

/// Find a user by username, ignoring case. The first match wins.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] carrying `username` when no user matches.
pub fn find_user_by_username<'a>(users: &'a [User], username: &str) -> Result<&'a User, CoreError> {
    let wanted = username.to_lowercase();
    users
        .iter()
        .find(|user| user.username.to_lowercase() == wanted)
        .ok_or_else(|| CoreError::not_found("user", username))
}

/// Find a comment by its exact name. The first match wins.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] carrying `name` when no comment matches.
pub fn find_comment_by_name<'a>(
    comments: &'a [Comment],
    name: &str,
) -> Result<&'a Comment, CoreError> {
    comments
        .iter()
        .find(|comment| comment.name == name)
        .ok_or_else(|| CoreError::not_found("comment", name))
}
