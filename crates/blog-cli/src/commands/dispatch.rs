use blog_client::BlogClient;
use blog_config::BlogConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    client: &BlogClient,
    config: &BlogConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => commands::run::handle(&args, client, config, flags).await,
        Commands::List => unreachable!("list is pre-dispatched in main"),
    }
}
