//! Aligned table report generator for terminal output.

use super::ansi_color;
use crate::engine::ContributorView;

/// Render views as a grouped, aligned table.
///
/// One block per contributor: a header line with the aggregate means,
/// then one row per submission.
#[must_use]
pub fn render_table(views: &[ContributorView], colored: bool) -> String {
    let color = |text: &str, c: &str| ansi_color(text, c, colored);

    if views.is_empty() {
        return "No scores found matching your search.\n".to_string();
    }

    let id_width = views
        .iter()
        .flat_map(|v| v.submissions.iter())
        .map(|s| s.id.len())
        .max()
        .unwrap_or(0)
        .max(2);
    let title_width = views
        .iter()
        .flat_map(|v| v.submissions.iter())
        .map(|s| s.title.len())
        .max()
        .unwrap_or(0)
        .max(5);

    let mut lines = Vec::new();
    for view in views {
        let agg = &view.aggregate;
        lines.push(format!(
            "{} {}",
            color("Contributor:", "bold"),
            color(&view.contributor, "cyan")
        ));
        lines.push(format!(
            "  {} {}  {} {}  {} {}  {} {}",
            color("Readability:", "blue"),
            agg.readability,
            color("Robustness:", "yellow"),
            agg.robustness,
            color("Efficiency:", "green"),
            agg.efficiency,
            color("Security:", "red"),
            agg.security
        ));
        for sub in &view.submissions {
            let metrics = &sub.metrics;
            lines.push(format!(
                "  {:<id_width$}  {:<title_width$}  {}  {}",
                sub.id,
                sub.title,
                metrics,
                color(metrics.model_key(), "dim"),
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{build_view, SortKey};
    use crate::model::parse_dataset;

    #[test]
    fn table_groups_by_contributor() {
        let dataset = parse_dataset(
            r#"{
                "alice": {"pr1": {"readability_score": 4, "model": "gpt"}},
                "bob": {"pr2": {"readability_score": 2, "model": "claude"}}
            }"#,
        )
        .unwrap();
        let views = build_view(&dataset, "", SortKey::Contributor);
        let table = render_table(&views, false);

        assert!(table.contains("Contributor: alice"));
        assert!(table.contains("Contributor: bob"));
        assert!(table.contains("Update pr1.py"));
        assert!(table.contains("gpt"));
        // alice's aggregate: single submission, missing fields average to 0
        assert!(table.contains("Readability: 4.00"));
        assert!(table.contains("Security: 0.00"));
    }

    #[test]
    fn empty_views_render_the_no_matches_state() {
        let table = render_table(&[], false);
        assert!(table.contains("No scores found"));
    }

    #[test]
    fn no_ansi_codes_without_color() {
        let dataset = parse_dataset(r#"{"alice": {"pr1": {}}}"#).unwrap();
        let views = build_view(&dataset, "", SortKey::Contributor);
        let table = render_table(&views, false);
        assert!(!table.contains('\x1b'));
    }
}
