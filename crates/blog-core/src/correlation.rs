//! Joins users → posts → comments by foreign key.
//!
//! Both primitive steps are pure and total: an unknown user id yields an
//! empty id set, and an empty id set yields no comments. [`comments_for_user`]
//! composes them and reports those empty results as errors, since a user the
//! caller believes exists but owns nothing usually means broken data or a
//! broken join.

use std::collections::BTreeSet;

use crate::entities::{Comment, Post, PostId, UserId};
use crate::errors::CoreError;

/// Distinct ids of the posts written by `user_id`.
#[must_use]
pub fn post_ids_for_user(posts: &[Post], user_id: UserId) -> BTreeSet<PostId> {
    posts
        .iter()
        .filter(|post| post.user_id == user_id)
        .map(|post| post.id)
        .collect()
}

/// Comments whose `post_id` is in `post_ids`, in their original order.
#[must_use]
pub fn comments_for_post_ids<'a>(
    comments: &'a [Comment],
    post_ids: &BTreeSet<PostId>,
) -> Vec<&'a Comment> {
    if post_ids.is_empty() {
        return Vec::new();
    }
    comments
        .iter()
        .filter(|comment| post_ids.contains(&comment.post_id))
        .collect()
}

/// The comments left on one user's posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserComments<'a> {
    pub user_id: UserId,
    pub post_ids: BTreeSet<PostId>,
    pub comments: Vec<&'a Comment>,
}

/// Correlate `user_id` with the comments on their posts.
///
/// # Errors
///
/// Returns [`CoreError::NoPostsForUser`] when the user owns no post, and
/// [`CoreError::NoCommentsForUser`] when none of their posts has a comment.
pub fn comments_for_user<'a>(
    posts: &[Post],
    comments: &'a [Comment],
    user_id: UserId,
) -> Result<UserComments<'a>, CoreError> {
    let post_ids = post_ids_for_user(posts, user_id);
    if post_ids.is_empty() {
        return Err(CoreError::NoPostsForUser { user_id });
    }

    let comments = comments_for_post_ids(comments, &post_ids);
    if comments.is_empty() {
        return Err(CoreError::NoCommentsForUser { user_id });
    }

    Ok(UserComments {
        user_id,
        post_ids,
        comments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post(id: PostId, user_id: UserId) -> Post {
        Post {
            id,
            user_id,
            title: format!("title {id}"),
            body: format!("body of post {id}"),
        }
    }

    fn comment(id: i64, post_id: PostId, email: &str) -> Comment {
        Comment {
            post_id,
            id,
            name: format!("comment {id}"),
            email: email.to_string(),
            body: "comment body".to_string(),
        }
    }

    fn posts() -> Vec<Post> {
        vec![post(1, 1), post(2, 1), post(3, 2), post(4, 3), post(5, 2), post(6, 1)]
    }

    #[test]
    fn post_ids_are_sound_and_complete() {
        let posts = posts();
        for user_id in [1, 2, 3, 4] {
            let ids = post_ids_for_user(&posts, user_id);
            let expected: BTreeSet<PostId> = posts
                .iter()
                .filter(|p| p.user_id == user_id)
                .map(|p| p.id)
                .collect();
            assert_eq!(ids, expected, "user {user_id}");
            for id in &ids {
                assert!(posts.iter().any(|p| p.id == *id && p.user_id == user_id));
            }
        }
    }

    #[test]
    fn post_ids_collapse_duplicates() {
        let posts = vec![post(10, 2), post(10, 2), post(11, 2)];
        assert_eq!(post_ids_for_user(&posts, 2), BTreeSet::from([10, 11]));
    }

    #[test]
    fn unknown_user_has_no_post_ids() {
        assert!(post_ids_for_user(&posts(), 999).is_empty());
    }

    #[test]
    fn comments_keep_source_order() {
        let comments = vec![
            comment(100, 3, "a@x.com"),
            comment(101, 1, "b@x.com"),
            comment(102, 5, "c@x.com"),
            comment(103, 4, "d@x.com"),
            comment(104, 3, "e@x.com"),
        ];
        let ids: Vec<i64> = comments_for_post_ids(&comments, &BTreeSet::from([5, 3]))
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![100, 102, 104]);
    }

    #[test]
    fn comments_filter_is_idempotent() {
        let comments = vec![
            comment(100, 3, "a@x.com"),
            comment(101, 1, "b@x.com"),
            comment(102, 5, "c@x.com"),
        ];
        let post_ids = BTreeSet::from([1, 5]);
        let once: Vec<Comment> = comments_for_post_ids(&comments, &post_ids)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Comment> = comments_for_post_ids(&once, &post_ids)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_post_ids_select_nothing() {
        let comments = vec![comment(100, 3, "a@x.com")];
        let selected = comments_for_post_ids(&comments, &BTreeSet::new());
        assert!(selected.is_empty());
    }

    #[test]
    fn comments_for_user_collects_join() {
        let posts = posts();
        let comments = vec![comment(100, 3, "a@x.com"), comment(101, 4, "b@x.com")];
        let joined = comments_for_user(&posts, &comments, 2).unwrap();
        assert_eq!(joined.user_id, 2);
        assert_eq!(joined.post_ids, BTreeSet::from([3, 5]));
        assert_eq!(joined.comments, vec![&comments[0]]);
    }

    #[test]
    fn comments_for_user_without_posts_is_an_error() {
        let err = comments_for_user(&posts(), &[], 999).unwrap_err();
        assert_eq!(err, CoreError::NoPostsForUser { user_id: 999 });
    }

    #[test]
    fn comments_for_user_without_comments_is_an_error() {
        let comments = vec![comment(100, 4, "a@x.com")];
        let err = comments_for_user(&posts(), &comments, 1).unwrap_err();
        assert_eq!(err, CoreError::NoCommentsForUser { user_id: 1 });
    }
}
