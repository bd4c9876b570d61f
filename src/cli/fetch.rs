//! `fetch` command: dump the raw dataset as JSON.

use super::{exit_codes, write_output};
use crate::config::FetchConfig;
use crate::error::{Result, ScoresError};

/// Run the `fetch` command. Loads the dataset and writes it back out as
/// pretty-printed JSON, reserved summary keys already stripped.
pub fn run_fetch(config: &FetchConfig) -> Result<i32> {
    config.source.validate()?;

    let source = config.source.to_source();
    tracing::info!(source = %source.describe(), "fetching dataset");
    let dataset = source.load()?;

    let mut payload = serde_json::to_string_pretty(&dataset)
        .map_err(|e| ScoresError::Report(format!("serializing dataset: {e}")))?;
    payload.push('\n');
    write_output(&payload, config.file.as_deref())?;

    Ok(exit_codes::SUCCESS)
}
