//! HTTP client for the remote score store.
//!
//! The store exposes the whole dataset as a single JSON document behind an
//! unauthenticated GET. One request per load; timeouts are the only
//! transport-level policy, there is no retry or pagination.

use crate::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{FetchErrorKind, Result, ScoresError};
use crate::model::Dataset;
use std::time::Duration;

/// Configuration for the remote store client.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Full endpoint URL serving the dataset JSON.
    pub endpoint: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: format!("{DEFAULT_BASE_URL}/users.json"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Derive the endpoint for a repository-scoped score path.
///
/// The store forbids `/` in keys, so the uploader writes `owner/name` as
/// `owner--name` under `repositories/`.
#[must_use]
pub fn endpoint_for_repo(base_url: &str, repo: &str) -> String {
    let safe_repo = repo.replace('/', "--");
    let base = base_url.trim_end_matches('/');
    format!("{base}/repositories/{safe_repo}/users.json")
}

/// Fetch the entire dataset from the store.
#[cfg(feature = "remote")]
pub fn fetch(config: &RemoteConfig) -> Result<Dataset> {
    let client = reqwest::blocking::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| fetch_err(config, FetchErrorKind::Transport(e.to_string())))?;

    tracing::info!(endpoint = %config.endpoint, "fetching score dataset");
    let response = client
        .get(&config.endpoint)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| fetch_err(config, FetchErrorKind::Transport(e.to_string())))?;

    let status = response.status();
    if !status.is_success() {
        return Err(fetch_err(
            config,
            FetchErrorKind::HttpStatus {
                status: status.as_u16(),
            },
        ));
    }

    let payload = response
        .text()
        .map_err(|e| fetch_err(config, FetchErrorKind::Transport(e.to_string())))?;

    crate::model::parse_dataset(&payload)
        .map_err(|e| fetch_err(config, FetchErrorKind::InvalidJson(e.to_string())))
}

#[cfg(not(feature = "remote"))]
pub fn fetch(config: &RemoteConfig) -> Result<Dataset> {
    Err(fetch_err(config, FetchErrorKind::RemoteDisabled))
}

fn fetch_err(config: &RemoteConfig, kind: FetchErrorKind) -> ScoresError {
    ScoresError::fetch(format!("GET {}", config.endpoint), kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_for_repo_mangles_slashes() {
        assert_eq!(
            endpoint_for_repo("https://store.example", "octo/widgets"),
            "https://store.example/repositories/octo--widgets/users.json"
        );
    }

    #[test]
    fn endpoint_for_repo_trims_trailing_slash() {
        assert_eq!(
            endpoint_for_repo("https://store.example/", "octo/widgets"),
            "https://store.example/repositories/octo--widgets/users.json"
        );
    }

    #[test]
    fn default_config_points_at_users_root() {
        let config = RemoteConfig::default();
        assert!(config.endpoint.ends_with("/users.json"));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
