use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::{Tabular, output};
use crate::scenarios::ScenarioName;

#[derive(Debug, Serialize)]
struct ScenarioInfo {
    name: ScenarioName,
    writes: bool,
    description: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct Catalog(Vec<ScenarioInfo>);

impl Catalog {
    fn all() -> Self {
        Self(
            ScenarioName::ALL
                .into_iter()
                .map(|name| ScenarioInfo {
                    name,
                    writes: name.writes(),
                    description: name.description(),
                })
                .collect(),
        )
    }
}

impl Tabular for Catalog {
    fn headers(&self) -> Vec<&'static str> {
        vec!["name", "writes", "description"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .iter()
            .map(|info| {
                vec![
                    info.name.to_string(),
                    if info.writes { "yes" } else { "no" }.to_string(),
                    info.description.to_string(),
                ]
            })
            .collect()
    }
}

/// Handle `blogcheck list`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&Catalog::all(), flags.format)
}
