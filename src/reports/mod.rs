//! Non-interactive renderers for contributor views.
//!
//! Three output formats besides the TUI:
//! - Table: aligned, optionally colored terminal output
//! - JSON: structured data for programmatic integration
//! - Summary: compact shell-friendly counts and means

mod json;
mod summary;
mod table;

pub use json::render_json;
pub use summary::render_summary;
pub use table::render_table;

use crate::engine::ContributorView;
use crate::error::{Result, ScoresError};
use clap::ValueEnum;
use std::io::IsTerminal;

/// Output format for the `view` and `query` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Auto-detect: TUI if TTY, table otherwise
    #[default]
    Auto,
    /// Interactive TUI dashboard
    Tui,
    /// Aligned table for terminal output
    Table,
    /// Structured JSON output
    Json,
    /// Brief summary output
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Tui => write!(f, "tui"),
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Resolve `Auto` by TTY detection: interactive terminals get the TUI,
/// pipes and files get the table.
#[must_use]
pub fn auto_detect_format(format: ReportFormat) -> ReportFormat {
    match format {
        ReportFormat::Auto => {
            if std::io::stdout().is_terminal() {
                ReportFormat::Tui
            } else {
                ReportFormat::Table
            }
        }
        other => other,
    }
}

/// Whether colored output should be used, honoring `--no-color` and the
/// `NO_COLOR` convention.
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Render views in a non-interactive format.
pub fn render(views: &[ContributorView], format: ReportFormat, use_color: bool) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(views, use_color)),
        ReportFormat::Json => render_json(views),
        ReportFormat::Summary => Ok(render_summary(views, use_color)),
        ReportFormat::Auto | ReportFormat::Tui => Err(ScoresError::Report(format!(
            "'{format}' is not a renderable format"
        ))),
    }
}

/// Apply ANSI color formatting if colored output is enabled.
pub(crate) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "blue" => format!("\x1b[34m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_formats_pass_through_auto_detect() {
        assert_eq!(auto_detect_format(ReportFormat::Json), ReportFormat::Json);
        assert_eq!(auto_detect_format(ReportFormat::Table), ReportFormat::Table);
    }

    #[test]
    fn tui_is_not_renderable_as_text() {
        assert!(render(&[], ReportFormat::Tui, false).is_err());
    }
}
