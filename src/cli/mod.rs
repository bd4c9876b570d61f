//! Command handlers for the pr-scores CLI.
//!
//! Each subcommand gets a validated config struct and returns an exit code.
//! Errors are reported by `main.rs`; the handlers only decide what to run
//! and where the output goes.

mod fetch;
mod query;
mod view;

pub use fetch::run_fetch;
pub use query::run_query;
pub use view::run_view;

use crate::error::{Result, ScoresError};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Exit codes.
pub mod exit_codes {
    /// Command completed and produced output.
    pub const SUCCESS: i32 = 0;
    /// Query matched nothing.
    pub const NO_MATCHES: i32 = 1;
    /// Command failed.
    pub const ERROR: i32 = 3;
}

/// Write rendered output to a file or stdout.
fn write_output(content: &str, file: Option<&Path>) -> Result<()> {
    match file {
        Some(path) => {
            fs::write(path, content).map_err(|e| ScoresError::io(path.to_path_buf(), e))?;
            tracing::info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .map_err(|e| ScoresError::Report(format!("writing to stdout: {e}")))?;
        }
    }
    Ok(())
}
