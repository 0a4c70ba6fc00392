//! Validation predicates applied to fetched entities.
//!
//! Everything here is pure and total: predicates return `bool` for any input,
//! including empty strings.

mod content;
mod email;

pub use content::{
    ContentViolation, MIN_BODY_CHARS, MIN_TITLE_CHARS, ensure_post_content,
    post_content_violations,
};
pub use email::is_valid_email;

use crate::entities::Comment;

/// Whether every comment carries a valid email. Vacuously true when empty.
pub fn all_valid<'a, I>(comments: I) -> bool
where
    I: IntoIterator<Item = &'a Comment>,
{
    comments
        .into_iter()
        .all(|comment| is_valid_email(&comment.email))
}

/// The comments whose email fails [`is_valid_email`], in input order.
pub fn invalid_emails<'a, I>(comments: I) -> Vec<&'a Comment>
where
    I: IntoIterator<Item = &'a Comment>,
{
    comments
        .into_iter()
        .filter(|comment| !is_valid_email(&comment.email))
        .collect()
}
