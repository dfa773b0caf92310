//! Token-station snapshot fetch.
//!
//! # Responsibilities
//! - One best-effort GET of the snapshot endpoint
//! - Decode the body as a JSON array of objects
//!
//! No retries, no auth, no pagination. The endpoint is an opaque external
//! collaborator; anything other than a 2xx array-of-objects body is an error.

use std::time::Duration;

use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

/// Default snapshot endpoint.
pub const DEFAULT_SNAPSHOT_URL: &str = "https://tokenstation.app/api/snapshots/last";

/// Default request timeout in seconds.
pub const DEFAULT_SNAPSHOT_TIMEOUT_SECS: u64 = 10;

/// Errors from the snapshot fetch.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Endpoint URL did not parse.
    #[error("invalid snapshot url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request failed, timed out, or returned a non-success status.
    #[error("snapshot request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Body was valid JSON but not an array of objects.
    #[error("snapshot response was not a JSON array of objects")]
    UnexpectedShape,
}

/// Client for the snapshot endpoint.
#[derive(Debug, Clone)]
pub struct SnapshotClient {
    http: reqwest::Client,
    url: Url,
}

impl SnapshotClient {
    /// Create a client for `url` with a per-request timeout.
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self, SnapshotError> {
        let url = Url::parse(url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { http, url })
    }

    /// Fetch the latest snapshot as a list of JSON objects.
    pub async fn latest(&self) -> Result<Vec<Map<String, Value>>, SnapshotError> {
        tracing::debug!(url = %self.url, "fetching snapshot");
        let body: Value = self
            .http
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let items = match body {
            Value::Array(items) => items,
            _ => return Err(SnapshotError::UnexpectedShape),
        };

        let snapshots = items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Ok(map),
                _ => Err(SnapshotError::UnexpectedShape),
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = snapshots.len(), "snapshot fetched");
        Ok(snapshots)
    }
}

impl Default for SnapshotClient {
    fn default() -> Self {
        // The default URL is a valid literal; only a broken TLS backend
        // could make this fail.
        Self::new(DEFAULT_SNAPSHOT_URL, DEFAULT_SNAPSHOT_TIMEOUT_SECS)
            .expect("default snapshot client: url is valid, http client failed to build")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn latest_decodes_array_of_objects() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/snapshots/last");
                then.status(200).json_body(json!([
                    {"denom": "inj", "amount": "1000"},
                    {"denom": "peggy0xdead", "amount": "5"}
                ]));
            })
            .await;

        let client = SnapshotClient::new(&server.url("/api/snapshots/last"), 5).unwrap();
        let snapshots = client.latest().await.unwrap();

        mock.assert_async().await;
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0]["denom"], "inj");
    }

    #[tokio::test]
    async fn latest_rejects_non_array_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/snapshots/last");
                then.status(200).json_body(json!({"not": "a list"}));
            })
            .await;

        let client = SnapshotClient::new(&server.url("/api/snapshots/last"), 5).unwrap();
        let err = client.latest().await.unwrap_err();
        assert!(matches!(err, SnapshotError::UnexpectedShape));
    }

    #[tokio::test]
    async fn latest_surfaces_http_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/snapshots/last");
                then.status(503);
            })
            .await;

        let client = SnapshotClient::new(&server.url("/api/snapshots/last"), 5).unwrap();
        let err = client.latest().await.unwrap_err();
        assert!(matches!(err, SnapshotError::Http(_)));
    }

    #[test]
    fn default_client_constructs() {
        let client = SnapshotClient::default();
        assert_eq!(client.url.as_str(), DEFAULT_SNAPSHOT_URL);
    }

    #[test]
    fn rejects_malformed_url() {
        let result = SnapshotClient::new("not a url", 5);
        assert!(matches!(result, Err(SnapshotError::InvalidUrl(_))));
    }
}
