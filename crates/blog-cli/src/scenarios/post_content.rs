use anyhow::{Context, bail};
use blog_client::BlogGateway;
use blog_core::validation::{MIN_BODY_CHARS, MIN_TITLE_CHARS, ensure_post_content};

/// Every post must carry a usable title and body.
pub async fn check<G: BlogGateway + Sync>(gateway: &G) -> anyhow::Result<String> {
    let posts = gateway.fetch_posts().await.context("fetching posts")?;
    if posts.is_empty() {
        bail!("the API returned no posts");
    }

    let failures: Vec<String> = posts
        .iter()
        .filter_map(|post| ensure_post_content(post).err())
        .map(|err| err.to_string())
        .collect();

    if !failures.is_empty() {
        bail!(
            "{} of {} posts fail the content rule: {}",
            failures.len(),
            posts.len(),
            failures.join(" | ")
        );
    }

    Ok(format!(
        "{} posts have a title of {MIN_TITLE_CHARS}+ and a body of {MIN_BODY_CHARS}+ characters",
        posts.len()
    ))
}
