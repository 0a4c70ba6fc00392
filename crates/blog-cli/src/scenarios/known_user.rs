use anyhow::{Context, bail};
use blog_client::BlogGateway;
use blog_core::entities::User;
use blog_core::lookup::find_user_by_username;
use serde_json::Value;

/// Reference copy of a user the API is known to serve.
const REFERENCE_USER: &str = include_str!("fixtures/known_user.json");

/// The reference user must be served exactly as recorded.
pub async fn check<G: BlogGateway + Sync>(gateway: &G) -> anyhow::Result<String> {
    let expected: User = serde_json::from_str(REFERENCE_USER)
        .context("bundled reference user is malformed")?;

    let users = gateway.fetch_users().await.context("fetching users")?;
    let actual = find_user_by_username(&users, &expected.username)?;

    let differing = differing_fields(&expected, actual)?;
    if !differing.is_empty() {
        bail!(
            "user '{}' (id {}) differs from the reference record in: {}",
            expected.username,
            actual.id,
            differing.join(", ")
        );
    }

    Ok(format!(
        "user '{}' (id {}) matches the reference record",
        expected.username, actual.id
    ))
}

/// Dotted paths (`address.geo.lat`) of the fields whose values differ.
fn differing_fields(expected: &User, actual: &User) -> anyhow::Result<Vec<String>> {
    let expected = serde_json::to_value(expected)?;
    let actual = serde_json::to_value(actual)?;
    let mut out = Vec::new();
    collect_differences("", &expected, &actual, &mut out);
    out.sort();
    Ok(out)
}

fn collect_differences(path: &str, expected: &Value, actual: &Value, out: &mut Vec<String>) {
    match (expected, actual) {
        (Value::Object(expected), Value::Object(actual)) => {
            for (key, expected_value) in expected {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                match actual.get(key) {
                    Some(actual_value) => {
                        collect_differences(&child, expected_value, actual_value, out);
                    }
                    None => out.push(child),
                }
            }
        }
        _ if expected != actual => out.push(path.to_string()),
        _ => {}
    }
}
