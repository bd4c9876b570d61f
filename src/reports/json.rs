//! JSON report generator.

use crate::engine::ContributorView;
use crate::error::{Result, ScoresError};

/// Render views as pretty-printed JSON.
///
/// Aggregates serialize as their display strings (`"3.00"` / `"N/A"`),
/// matching what the hosted dashboard showed.
pub fn render_json(views: &[ContributorView]) -> Result<String> {
    serde_json::to_string_pretty(views).map_err(|e| ScoresError::Report(e.to_string()))
}
