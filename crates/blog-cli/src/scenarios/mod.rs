//! End-to-end checks against the blog API.
//!
//! Every check returns `Ok(detail)` when it passes and an error naming the
//! identifiers involved when it fails. [`run_scenario`] times the check and
//! folds either outcome into a [`ScenarioReport`]; a failing check never
//! aborts the rest of the run.

use std::future::Future;
use std::time::Instant;

use blog_client::BlogClient;
use blog_config::ScenarioConfig;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

mod comment_emails;
mod creation;
mod endpoints;
mod known_user;
mod post_content;

#[cfg(test)]
pub mod testing;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioName {
    CommentEmails,
    KnownUser,
    PostContent,
    RejectNullPost,
    RejectEmptyComment,
    CreatedCommentListed,
    UnknownEndpoint,
}

impl ScenarioName {
    /// Run order when no scenario is named.
    pub const ALL: [Self; 7] = [
        Self::CommentEmails,
        Self::KnownUser,
        Self::PostContent,
        Self::RejectNullPost,
        Self::RejectEmptyComment,
        Self::CreatedCommentListed,
        Self::UnknownEndpoint,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CommentEmails => "comment-emails",
            Self::KnownUser => "known-user",
            Self::PostContent => "post-content",
            Self::RejectNullPost => "reject-null-post",
            Self::RejectEmptyComment => "reject-empty-comment",
            Self::CreatedCommentListed => "created-comment-listed",
            Self::UnknownEndpoint => "unknown-endpoint",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CommentEmails => "comments on the configured user's posts carry valid emails",
            Self::KnownUser => "a known user matches its reference record field by field",
            Self::PostContent => "every post has a title of 3+ and a body of 5+ characters",
            Self::RejectNullPost => "creating a post with all fields null is rejected with 400",
            Self::RejectEmptyComment => "creating a comment with an empty body answers 400",
            Self::CreatedCommentListed => "a created comment is echoed back and then listed",
            Self::UnknownEndpoint => "an unknown endpoint answers 404",
        }
    }

    /// Whether the scenario sends `POST` requests.
    #[must_use]
    pub const fn writes(self) -> bool {
        matches!(
            self,
            Self::RejectNullPost | Self::RejectEmptyComment | Self::CreatedCommentListed
        )
    }
}

impl std::fmt::Display for ScenarioName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one scenario.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub name: ScenarioName,
    pub passed: bool,
    pub detail: String,
    pub duration_ms: u64,
}

/// Outcome of a `run` invocation.
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub base_url: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub scenarios: Vec<ScenarioReport>,
}

impl RunReport {
    #[must_use]
    pub fn new(
        started_at: DateTime<Utc>,
        base_url: String,
        scenarios: Vec<ScenarioReport>,
    ) -> Self {
        let passed = scenarios.iter().filter(|report| report.passed).count();
        Self {
            started_at,
            base_url,
            total: scenarios.len(),
            passed,
            failed: scenarios.len() - passed,
            scenarios,
        }
    }

    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Run `name` against `client` and report the outcome.
pub async fn run_scenario(
    name: ScenarioName,
    client: &BlogClient,
    settings: &ScenarioConfig,
) -> ScenarioReport {
    match name {
        ScenarioName::CommentEmails => {
            let check = comment_emails::check(client, &settings.username);
            run_one(name, check).await
        }
        ScenarioName::KnownUser => run_one(name, known_user::check(client)).await,
        ScenarioName::PostContent => run_one(name, post_content::check(client)).await,
        ScenarioName::RejectNullPost => run_one(name, creation::reject_null_post(client)).await,
        ScenarioName::RejectEmptyComment => {
            let check = creation::reject_empty_comment(client, settings.existing_post_id);
            run_one(name, check).await
        }
        ScenarioName::CreatedCommentListed => {
            let check = creation::created_comment_listed(client, settings.existing_post_id);
            run_one(name, check).await
        }
        ScenarioName::UnknownEndpoint => run_one(name, endpoints::unknown_endpoint(client)).await,
    }
}

async fn run_one<F>(name: ScenarioName, check: F) -> ScenarioReport
where
    F: Future<Output = anyhow::Result<String>>,
{
    let started = Instant::now();
    let outcome = check.await;
    let elapsed = started.elapsed().as_millis();
    let duration_ms = u64::try_from(elapsed).unwrap_or(u64::MAX);

    match outcome {
        Ok(detail) => ScenarioReport {
            name,
            passed: true,
            detail,
            duration_ms,
        },
        Err(error) => ScenarioReport {
            name,
            passed: false,
            detail: format!("{error:#}"),
            duration_ms,
        },
    }
}

/// Random 16-character hex suffix for names that must not collide across runs.
pub fn unique_suffix() -> anyhow::Result<String> {
    let mut bytes = [0_u8; 8];
    getrandom::fill(&mut bytes)
        .map_err(|e| anyhow::anyhow!("failed to generate random suffix: {e}"))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_serialize_like_the_cli_spells_them() {
        for name in ScenarioName::ALL {
            let json = serde_json::to_value(name).unwrap();
            assert_eq!(json, serde_json::Value::String(name.as_str().to_string()));
            let parsed = ScenarioName::from_str(name.as_str(), false).unwrap();
            assert_eq!(parsed, name);
        }
    }

    #[test]
    fn all_lists_every_variant_once() {
        let variants = ScenarioName::value_variants();
        assert_eq!(ScenarioName::ALL.len(), variants.len());
        let writers: Vec<_> = ScenarioName::ALL
            .into_iter()
            .filter(|name| name.writes())
            .collect();
        assert_eq!(
            writers,
            vec![
                ScenarioName::RejectNullPost,
                ScenarioName::RejectEmptyComment,
                ScenarioName::CreatedCommentListed,
            ]
        );
    }

    #[tokio::test]
    async fn run_one_folds_errors_into_a_failed_report() {
        let failing = async { Err(anyhow::anyhow!("inner").context("outer")) };
        let report = run_one(ScenarioName::KnownUser, failing).await;
        assert!(!report.passed);
        assert_eq!(report.detail, "outer: inner");

        let passing = async { Ok("fine".to_string()) };
        let report = run_one(ScenarioName::KnownUser, passing).await;
        assert!(report.passed);
        assert_eq!(report.detail, "fine");
    }

    #[test]
    fn run_report_counts_outcomes() {
        let report = RunReport::new(
            Utc::now(),
            "http://localhost".into(),
            vec![
                ScenarioReport {
                    name: ScenarioName::KnownUser,
                    passed: true,
                    detail: String::new(),
                    duration_ms: 1,
                },
                ScenarioReport {
                    name: ScenarioName::PostContent,
                    passed: false,
                    detail: "post 3: body is blank".into(),
                    duration_ms: 2,
                },
            ],
        );
        assert_eq!((report.total, report.passed, report.failed), (2, 1, 1));
        assert!(!report.all_passed());
    }

    #[test]
    fn unique_suffix_is_hex_and_varies() {
        let a = unique_suffix().unwrap();
        let b = unique_suffix().unwrap();
        assert_eq!(a.len(), 16);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
