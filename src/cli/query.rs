//! `query` command: non-interactive search over the score store.

use super::{exit_codes, write_output};
use crate::config::QueryConfig;
use crate::engine::build_view;
use crate::error::Result;
use crate::reports::{self, ReportFormat};

/// Run the `query` command.
///
/// Unlike `view` this never opens the dashboard: `auto` means table. The
/// exit code distinguishes an empty result from success, so scripts can
/// check for matches without parsing output.
pub fn run_query(config: &QueryConfig) -> Result<i32> {
    config.source.validate()?;

    let dataset = config.source.to_source().load()?;
    let views = build_view(&dataset, &config.search, config.sort);

    let format = match config.output.format {
        ReportFormat::Auto | ReportFormat::Tui => ReportFormat::Table,
        other => other,
    };
    let use_color = reports::should_use_color(config.output.no_color);
    let rendered = reports::render(&views, format, use_color)?;
    write_output(&rendered, config.output.file.as_deref())?;

    if views.is_empty() {
        tracing::info!(search = %config.search, "no submissions matched");
        return Ok(exit_codes::NO_MATCHES);
    }
    Ok(exit_codes::SUCCESS)
}
