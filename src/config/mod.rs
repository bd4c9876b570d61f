//! Configuration types for pr-scores commands.
//!
//! One config struct per subcommand, assembled from CLI arguments in
//! `main.rs` and validated before the handler runs. There is no config file
//! and no persisted state; the only tunables are where the dataset comes
//! from and how the result is rendered.

use crate::engine::SortKey;
use crate::error::{Result, ScoresError};
use crate::reports::ReportFormat;
use crate::source::{endpoint_for_repo, DatasetSource, RemoteConfig};
use std::path::PathBuf;
use std::time::Duration;

/// Base URL of the hosted score store.
pub const DEFAULT_BASE_URL: &str = "https://prism-7d7a9-default-rtdb.firebaseio.com";

/// HTTP timeout applied to the single dataset read.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where to read the dataset from.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL of the score store.
    pub base_url: String,
    /// Optional `owner/name` repository scoping the store path.
    pub repo: Option<String>,
    /// Local JSON file overriding the remote store entirely.
    pub input: Option<PathBuf>,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            repo: None,
            input: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SourceConfig {
    /// Validate the configuration before any network or file IO.
    pub fn validate(&self) -> Result<()> {
        if self.input.is_none()
            && !self.base_url.starts_with("https://")
            && !self.base_url.starts_with("http://")
        {
            return Err(ScoresError::Config(format!(
                "base URL must be http(s), got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ScoresError::Config(
                "timeout must be at least 1 second".to_string(),
            ));
        }
        if let Some(repo) = &self.repo {
            if repo.is_empty() || !repo.contains('/') {
                return Err(ScoresError::Config(format!(
                    "repository must be 'owner/name', got '{repo}'"
                )));
            }
        }
        Ok(())
    }

    /// Resolve into a concrete dataset source. A local input file wins over
    /// the remote store.
    #[must_use]
    pub fn to_source(&self) -> DatasetSource {
        if let Some(path) = &self.input {
            return DatasetSource::File(path.clone());
        }
        let endpoint = match &self.repo {
            Some(repo) => endpoint_for_repo(&self.base_url, repo),
            None => format!("{}/users.json", self.base_url.trim_end_matches('/')),
        };
        DatasetSource::Remote(RemoteConfig {
            endpoint,
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}

/// Output configuration shared by the non-interactive renderers.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Output format (auto resolves by TTY detection).
    pub format: ReportFormat,
    /// Output file path; stdout when unset.
    pub file: Option<PathBuf>,
    /// Disable colored terminal output.
    pub no_color: bool,
}

/// Configuration for the `view` command.
#[derive(Debug, Clone, Default)]
pub struct ViewConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
    /// Initial search term.
    pub search: String,
    /// Initial sort key.
    pub sort: SortKey,
}

/// Configuration for the `query` command.
#[derive(Debug, Clone, Default)]
pub struct QueryConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
    /// Free-text search term; empty matches every submission.
    pub search: String,
    pub sort: SortKey,
}

/// Configuration for the `fetch` command.
#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    pub source: SourceConfig,
    /// Output file path; stdout when unset.
    pub file: Option<PathBuf>,
}
