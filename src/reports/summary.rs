//! Summary report generator for shell output.

use super::ansi_color;
use crate::engine::ContributorView;

/// Render a compact summary: counts plus one aggregate line per contributor.
#[must_use]
pub fn render_summary(views: &[ContributorView], colored: bool) -> String {
    let color = |text: &str, c: &str| ansi_color(text, c, colored);

    let mut lines = Vec::new();
    lines.push(color("Pull Request Scores", "bold"));
    lines.push(color(&"─".repeat(40), "dim"));

    let submission_total: usize = views.iter().map(ContributorView::submission_count).sum();
    lines.push(format!(
        "{}  {} contributors, {} submissions",
        color("Matched:", "cyan"),
        views.len(),
        submission_total
    ));
    lines.push(String::new());

    for view in views {
        let agg = &view.aggregate;
        lines.push(format!(
            "  {:<20} R {}  Ro {}  E {}  S {}  ({} submissions)",
            view.contributor,
            agg.readability,
            agg.robustness,
            agg.efficiency,
            agg.security,
            view.submission_count()
        ));
    }

    if views.is_empty() {
        lines.push("  no matches".to_string());
    }

    lines.push(String::new());
    lines.join("\n")
}
