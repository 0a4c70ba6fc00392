//! Inputs for the check scenarios.

use serde::{Deserialize, Serialize};

fn default_username() -> String {
    "Delphine".to_string()
}

const fn default_existing_post_id() -> i64 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScenarioConfig {
    /// User whose post comments get their emails checked.
    #[serde(default = "default_username")]
    pub username: String,

    /// Post that new comments are attached to.
    #[serde(default = "default_existing_post_id")]
    pub existing_post_id: i64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            existing_post_id: default_existing_post_id(),
        }
    }
}
