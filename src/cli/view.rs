//! `view` command: render the score dashboard.

use super::{exit_codes, write_output};
use crate::config::ViewConfig;
use crate::engine::build_view;
use crate::error::{Result, ScoresError};
use crate::reports::{self, ReportFormat};
use crate::tui::{run_dashboard, DashboardApp};

/// Run the `view` command. Resolves `auto` by TTY detection, then either
/// enters the interactive dashboard or renders once to the chosen format.
pub fn run_view(config: &ViewConfig) -> Result<i32> {
    config.source.validate()?;
    let source = config.source.to_source();

    let format = reports::auto_detect_format(config.output.format);

    if format == ReportFormat::Tui {
        let mut app = DashboardApp::new(source, config.search.clone(), config.sort);
        run_dashboard(&mut app)
            .map_err(|e| ScoresError::Report(format!("terminal error: {e}")))?;
        return Ok(exit_codes::SUCCESS);
    }

    let dataset = source.load()?;
    tracing::debug!(contributors = dataset.len(), "dataset loaded");

    let views = build_view(&dataset, &config.search, config.sort);
    let use_color = reports::should_use_color(config.output.no_color);
    let rendered = reports::render(&views, format, use_color)?;
    write_output(&rendered, config.output.file.as_deref())?;

    Ok(exit_codes::SUCCESS)
}
