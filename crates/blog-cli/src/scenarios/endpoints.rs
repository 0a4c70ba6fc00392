use anyhow::{Context, bail};
use blog_client::BlogClient;

const MISSING_ENDPOINT: &str = "there_is_no_such_endpoint";

/// An endpoint the API does not serve must answer 404.
pub async fn unknown_endpoint(client: &BlogClient) -> anyhow::Result<String> {
    let url = client.api().url_for(MISSING_ENDPOINT);
    let response = client
        .get_raw(MISSING_ENDPOINT)
        .await
        .with_context(|| format!("GET {url}"))?;

    if response.status != 404 {
        bail!("GET {url} answered {}, expected 404", response.status);
    }
    Ok(format!("GET {url} answered 404"))
}

#[cfg(test)]
mod tests {
    use super::unknown_endpoint;
    use crate::scenarios::testing::{client, serve, unreachable_base_url};

    #[tokio::test]
    async fn not_found_passes() {
        let base = serve(|_, _, _| (404, "{}".into()));
        let detail = unknown_endpoint(&client(&base)).await.unwrap();
        assert_eq!(
            detail,
            format!("GET {base}/there_is_no_such_endpoint answered 404")
        );
    }

    #[tokio::test]
    async fn any_other_status_fails() {
        let base = serve(|_, _, _| (200, "[]".into()));
        let err = unknown_endpoint(&client(&base)).await.unwrap_err();
        assert!(err.to_string().ends_with("answered 200, expected 404"));
    }

    #[tokio::test]
    async fn transport_failure_names_the_url() {
        let base = unreachable_base_url();
        let err = unknown_endpoint(&client(&base)).await.unwrap_err();
        let expected = format!("GET {base}/there_is_no_such_endpoint: ");
        let message = format!("{err:#}");
        assert!(message.starts_with(&expected), "{message}");
    }
}
