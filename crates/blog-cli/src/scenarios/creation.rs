//! Checks that `POST` to the API. Each run uses a fresh comment name so
//! repeated runs never match an earlier run's comment.

use anyhow::{Context, bail};
use blog_client::{BlogClient, BlogGateway};
use blog_core::entities::{NewComment, NewPost, PostId};
use blog_core::lookup::find_comment_by_name;

use super::unique_suffix;

const TEST_EMAIL: &str = "valid_test_email@restmail.net";

fn comment_name() -> anyhow::Result<String> {
    Ok(format!("valid name {}", unique_suffix()?))
}

/// A post whose every field is null must be rejected with 400.
pub async fn reject_null_post(client: &BlogClient) -> anyhow::Result<String> {
    let response = client
        .submit_post(&NewPost::default())
        .await
        .context("submitting null post")?;

    if response.status != 400 {
        bail!(
            "post with all fields null answered {}, expected 400",
            response.status
        );
    }
    Ok("post with all fields null rejected with 400".to_string())
}

/// A comment with an empty body must be rejected with 400.
pub async fn reject_empty_comment(
    client: &BlogClient,
    post_id: PostId,
) -> anyhow::Result<String> {
    let payload = NewComment::new(post_id, comment_name()?, TEST_EMAIL, "");
    let response = client
        .submit_comment(&payload)
        .await
        .context("submitting comment with empty body")?;

    if response.status != 400 {
        bail!(
            "comment with empty body on post {post_id} answered {}, expected 400",
            response.status
        );
    }
    Ok(format!("comment with empty body on post {post_id} rejected with 400"))
}

/// A created comment must be echoed back and then show up in the listing.
pub async fn created_comment_listed(
    client: &BlogClient,
    post_id: PostId,
) -> anyhow::Result<String> {
    let name = comment_name()?;
    let payload = NewComment::new(post_id, name.as_str(), TEST_EMAIL, "valid body");

    let created = client
        .create_comment(&payload)
        .await
        .context("creating comment")?;
    if !payload.matches(&created) {
        bail!(
            "created comment {} does not echo the payload: {created:?}",
            created.id
        );
    }

    let comments = client.fetch_comments().await.context("fetching comments")?;
    let listed = find_comment_by_name(&comments, &name)
        .with_context(|| format!("comment {} was created but is not listed", created.id))?;
    if !payload.matches(listed) {
        bail!(
            "listed comment '{name}' (id {}) differs from the created payload: {listed:?}",
            listed.id
        );
    }

    Ok(format!(
        "comment {} '{name}' created on post {post_id} and listed",
        created.id
    ))
}
