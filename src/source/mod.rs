//! Dataset sources: the remote score store and local score files.
//!
//! Both paths funnel through the same JSON parse, so a malformed local file
//! and a malformed store payload fail identically.

mod remote;

pub use remote::{endpoint_for_repo, RemoteConfig};

use crate::error::{FetchErrorKind, Result, ScoresError};
use crate::model::{parse_dataset, Dataset};
use std::fs;
use std::path::PathBuf;

/// Where the dataset comes from.
///
/// Cloneable and `Send` so the dashboard can hand a copy to its fetch worker
/// thread.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// A local JSON file (e.g. the uploader's `*_scores.json` output).
    File(PathBuf),
    /// The remote key-value store.
    Remote(RemoteConfig),
}

impl DatasetSource {
    /// Load the entire dataset. Exactly one read; no retry.
    pub fn load(&self) -> Result<Dataset> {
        match self {
            Self::File(path) => {
                tracing::debug!(path = %path.display(), "loading dataset from file");
                let payload =
                    fs::read_to_string(path).map_err(|e| ScoresError::io(path.clone(), e))?;
                parse_dataset(&payload).map_err(|e| {
                    ScoresError::fetch(
                        format!("parsing {}", path.display()),
                        FetchErrorKind::InvalidJson(e.to_string()),
                    )
                })
            }
            Self::Remote(config) => remote::fetch(config),
        }
    }

    /// Human-readable description for headers and log lines.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Remote(config) => config.endpoint.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn loads_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"alice": {{"pr1": {{"readability_score": 4, "model": "gpt"}}}}}}"#
        )
        .unwrap();

        let source = DatasetSource::File(file.path().to_path_buf());
        let dataset = source.load().unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset["alice"].submission_count(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = DatasetSource::File(PathBuf::from("/nonexistent/scores.json"));
        let err = source.load().unwrap_err();
        assert!(matches!(err, ScoresError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_a_fetch_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let source = DatasetSource::File(file.path().to_path_buf());
        let err = source.load().unwrap_err();
        assert!(matches!(
            err,
            ScoresError::Fetch {
                source: FetchErrorKind::InvalidJson(_),
                ..
            }
        ));
    }
}
