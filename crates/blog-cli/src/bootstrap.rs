use anyhow::Context;
use blog_config::BlogConfig;

use crate::cli::GlobalFlags;

/// Load the layered configuration (`.env`, TOML files, `BLOGCHECK_*` env)
/// and apply command-line overrides on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<BlogConfig> {
    let mut config = BlogConfig::load_with_dotenv()
        .context("failed to load blogcheck configuration")?;

    if let Some(base_url) = &flags.base_url {
        config.api.base_url.clone_from(base_url);
        config.validate().context("invalid --base-url override")?;
    }

    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");
    Ok(config)
}
