use anyhow::{Context, bail};
use blog_client::BlogGateway;
use blog_core::correlation::comments_for_user;
use blog_core::lookup::find_user_by_username;
use blog_core::validation::invalid_emails;

/// Comments on `username`'s posts must exist and all carry valid emails.
pub async fn check<G: BlogGateway + Sync>(gateway: &G, username: &str) -> anyhow::Result<String> {
    let users = gateway.fetch_users().await.context("fetching users")?;
    let user = find_user_by_username(&users, username)?;

    let posts = gateway.fetch_posts().await.context("fetching posts")?;
    let comments = gateway.fetch_comments().await.context("fetching comments")?;

    let joined = comments_for_user(&posts, &comments, user.id)
        .with_context(|| format!("user '{username}' (id {})", user.id))?;

    let invalid = invalid_emails(joined.comments.iter().copied());
    if !invalid.is_empty() {
        let offenders = invalid
            .iter()
            .map(|comment| format!("comment {} <{}>", comment.id, comment.email))
            .collect::<Vec<_>>()
            .join(", ");
        bail!(
            "{} of {} comments on posts of user '{username}' (id {}) have invalid emails: {offenders}",
            invalid.len(),
            joined.comments.len(),
            user.id,
        );
    }

    Ok(format!(
        "{} comments on {} posts of user '{username}' (id {}) have valid emails",
        joined.comments.len(),
        joined.post_ids.len(),
        user.id,
    ))
}
