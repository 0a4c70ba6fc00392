use clap::{Args, Subcommand};

use crate::scenarios::ScenarioName;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the available scenarios.
    List,
    /// Run scenarios against the configured API.
    Run(RunArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    /// Scenarios to run (all when omitted).
    #[arg(value_enum)]
    pub scenarios: Vec<ScenarioName>,

    /// User whose post comments are checked (overrides `scenario.username`).
    #[arg(long)]
    pub username: Option<String>,
}
