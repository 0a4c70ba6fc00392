//! Minimum-content rule for posts: a non-blank title of at least
//! [`MIN_TITLE_CHARS`] characters and a non-blank body of at least
//! [`MIN_BODY_CHARS`] characters. Lengths count `char`s after trimming.

use std::fmt;

use crate::entities::{Post, PostId};
use crate::errors::CoreError;

pub const MIN_TITLE_CHARS: usize = 3;
pub const MIN_BODY_CHARS: usize = 5;

/// One way a post breaks the content rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentViolation {
    BlankTitle,
    ShortTitle { chars: usize },
    BlankBody,
    ShortBody { chars: usize },
}

impl fmt::Display for ContentViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankTitle => f.write_str("title is blank"),
            Self::ShortTitle { chars } => write!(
                f,
                "title has {chars} chars, expected at least {MIN_TITLE_CHARS}"
            ),
            Self::BlankBody => f.write_str("body is blank"),
            Self::ShortBody { chars } => write!(
                f,
                "body has {chars} chars, expected at least {MIN_BODY_CHARS}"
            ),
        }
    }
}

/// Every content violation of `post`; empty when the post is fine.
#[must_use]
pub fn post_content_violations(post: &Post) -> Vec<ContentViolation> {
    let mut violations = Vec::new();
    if let Some(violation) = check_text(&post.title, MIN_TITLE_CHARS, true) {
        violations.push(violation);
    }
    if let Some(violation) = check_text(&post.body, MIN_BODY_CHARS, false) {
        violations.push(violation);
    }
    violations
}

/// Check `post` against the content rule.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming the post and every violation.
pub fn ensure_post_content(post: &Post) -> Result<(), CoreError> {
    let violations = post_content_violations(post);
    if violations.is_empty() {
        return Ok(());
    }
    Err(CoreError::Validation(describe(post.id, &violations)))
}

fn check_text(text: &str, min_chars: usize, is_title: bool) -> Option<ContentViolation> {
    let chars = text.trim().chars().count();
    match (chars, is_title) {
        (0, true) => Some(ContentViolation::BlankTitle),
        (0, false) => Some(ContentViolation::BlankBody),
        (n, true) if n < min_chars => Some(ContentViolation::ShortTitle { chars: n }),
        (n, false) if n < min_chars => Some(ContentViolation::ShortBody { chars: n }),
        _ => None,
    }
}

fn describe(post_id: PostId, violations: &[ContentViolation]) -> String {
    let reasons = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!("post {post_id}: {reasons}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post(title: &str, body: &str) -> Post {
        Post {
            id: 4,
            user_id: 1,
            title: title.into(),
            body: body.into(),
        }
    }

    #[test]
    fn valid_post_has_no_violations() {
        assert!(post_content_violations(&post("eum", "ullam")).is_empty());
        let long = post("eum et est occaecati", "ullam et saepe");
        assert!(ensure_post_content(&long).is_ok());
    }

    #[test]
    fn body_is_checked_independently_of_title() {
        assert_eq!(
            post_content_violations(&post("a long enough title", "abcd")),
            vec![ContentViolation::ShortBody { chars: 4 }]
        );
    }

    #[test]
    fn blank_fields_are_reported_as_blank() {
        assert_eq!(
            post_content_violations(&post("   ", "\n\t")),
            vec![ContentViolation::BlankTitle, ContentViolation::BlankBody]
        );
    }

    #[test]
    fn lengths_count_chars_after_trimming() {
        assert_eq!(
            post_content_violations(&post("  ab  ", "éèêëē")),
            vec![ContentViolation::ShortTitle { chars: 2 }]
        );
    }

    #[test]
    fn ensure_lists_every_violation() {
        let err = ensure_post_content(&post("ab", "")).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(
                "post 4: title has 2 chars, expected at least 3; body is blank".into()
            )
        );
    }
}
