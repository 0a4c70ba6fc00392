use anyhow::bail;
use blog_client::BlogClient;
use blog_config::{BlogConfig, ScenarioConfig};
use chrono::Utc;

use crate::cli::{GlobalFlags, OutputFormat, RunArgs};
use crate::output::{Tabular, output, to_ndjson};
use crate::scenarios::{self, RunReport, ScenarioName};

impl Tabular for RunReport {
    fn headers(&self) -> Vec<&'static str> {
        vec!["scenario", "passed", "ms", "detail"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.scenarios
            .iter()
            .map(|report| {
                vec![
                    report.name.to_string(),
                    report.passed.to_string(),
                    report.duration_ms.to_string(),
                    report.detail.clone(),
                ]
            })
            .collect()
    }

    fn footer(&self) -> Option<String> {
        Some(format!(
            "\n{}/{} passed against {}",
            self.passed, self.total, self.base_url
        ))
    }
}

/// Handle `blogcheck run`.
pub async fn handle(
    args: &RunArgs,
    client: &BlogClient,
    config: &BlogConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut settings = config.scenario.clone();
    if let Some(username) = &args.username {
        settings.username.clone_from(username);
    }

    let report = execute(&selected(&args.scenarios), client, &settings).await;

    match flags.format {
        OutputFormat::Raw => print!("{}", to_ndjson(&report.scenarios)?),
        OutputFormat::Json | OutputFormat::Table => output(&report, flags.format)?,
    }

    if !report.all_passed() {
        bail!("{} of {} scenarios failed", report.failed, report.total);
    }
    Ok(())
}

/// Run `names` one after another and collect their reports.
async fn execute(
    names: &[ScenarioName],
    client: &BlogClient,
    settings: &ScenarioConfig,
) -> RunReport {
    let started_at = Utc::now();
    let mut reports = Vec::with_capacity(names.len());

    for &name in names {
        tracing::info!(scenario = %name, "running scenario");
        let report = scenarios::run_scenario(name, client, settings).await;
        if report.passed {
            tracing::info!(scenario = %name, duration_ms = report.duration_ms, "scenario passed");
        } else {
            tracing::warn!(scenario = %name, detail = %report.detail, "scenario failed");
        }
        reports.push(report);
    }

    RunReport::new(started_at, client.api().base_url.clone(), reports)
}

/// Requested scenarios without repeats, or every scenario when none is named.
fn selected(requested: &[ScenarioName]) -> Vec<ScenarioName> {
    if requested.is_empty() {
        return ScenarioName::ALL.to_vec();
    }
    let mut out: Vec<ScenarioName> = Vec::with_capacity(requested.len());
    for name in requested {
        if !out.contains(name) {
            out.push(*name);
        }
    }
    out
}
