//! End-to-end tests over the bundled fixture dataset: load from disk, run
//! the filter/sort engine, and render each output format.

use pr_scores::engine::{build_view, SortKey};
use pr_scores::reports::{render_json, render_summary, render_table};
use pr_scores::source::DatasetSource;
use pr_scores::Dataset;
use std::path::PathBuf;

fn fixture_dataset() -> Dataset {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/scores.json");
    DatasetSource::File(path).load().expect("fixture loads")
}

#[test]
fn fixture_parses_and_strips_reserved_keys() {
    let dataset = fixture_dataset();
    assert_eq!(dataset.len(), 4);
    // Both the object-shaped and the string-shaped summary entries are gone
    assert_eq!(dataset["wchen-dev"].submission_count(), 2);
    assert_eq!(dataset["jpatel"].submission_count(), 2);
    assert_eq!(dataset["empty-user"].submission_count(), 0);
}

#[test]
fn cumulative_averages_over_the_fixture() {
    let dataset = fixture_dataset();
    let views = build_view(&dataset, "", SortKey::Contributor);

    let wchen = views.iter().find(|v| v.contributor == "wchen-dev").unwrap();
    assert_eq!(wchen.aggregate.readability.to_string(), "4.00");
    assert_eq!(wchen.aggregate.robustness.to_string(), "3.50");
    // pr102 uses the legacy performance_score field name
    assert_eq!(wchen.aggregate.efficiency.to_string(), "3.00");
    assert_eq!(wchen.aggregate.security.to_string(), "4.00");

    // Sparse records: absent metrics count as zero, the divisor does not shrink
    let jpatel = views.iter().find(|v| v.contributor == "jpatel").unwrap();
    assert_eq!(jpatel.aggregate.readability.to_string(), "1.00");
    assert_eq!(jpatel.aggregate.robustness.to_string(), "2.00");
    assert_eq!(jpatel.aggregate.efficiency.to_string(), "0.00");
    assert_eq!(jpatel.aggregate.security.to_string(), "0.50");
}

#[test]
fn contributor_without_submissions_is_dropped_from_the_view() {
    let views = build_view(&fixture_dataset(), "", SortKey::Contributor);
    assert!(views.iter().all(|v| v.contributor != "empty-user"));
    let names: Vec<_> = views.iter().map(|v| v.contributor.as_str()).collect();
    assert_eq!(names, vec!["amartinez", "jpatel", "wchen-dev"]);
}

#[test]
fn search_by_stored_title_narrows_but_keeps_full_aggregate() {
    let dataset = fixture_dataset();
    let views = build_view(&dataset, "retry logic", SortKey::Contributor);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].contributor, "wchen-dev");
    assert_eq!(views[0].submissions.len(), 1);
    assert_eq!(views[0].submissions[0].id, "pr101");
    // Aggregate still reflects both submissions
    assert_eq!(views[0].aggregate.readability.to_string(), "4.00");
}

#[test]
fn search_by_synthesized_title_finds_title_less_submissions() {
    let views = build_view(&fixture_dataset(), "update pr102.py", SortKey::Contributor);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].submissions[0].id, "pr102");
    assert_eq!(views[0].submissions[0].title, "Update pr102.py");
}

#[test]
fn model_sort_orders_submissions_within_each_contributor() {
    let views = build_view(&fixture_dataset(), "", SortKey::Model);
    let jpatel = views.iter().find(|v| v.contributor == "jpatel").unwrap();
    let models: Vec<_> = jpatel
        .submissions
        .iter()
        .map(|s| s.metrics.model_key())
        .collect();
    assert_eq!(models, vec!["claude-3-5-sonnet", "gpt-4o-mini"]);
}

#[test]
fn table_output_renders_every_matched_contributor() {
    let views = build_view(&fixture_dataset(), "", SortKey::Contributor);
    let table = render_table(&views, false);
    assert!(table.contains("wchen-dev"));
    assert!(table.contains("Add retry logic to the upload client"));
    assert!(table.contains("Update pr102.py"));
    assert!(!table.contains("empty-user"));
    assert!(!table.contains("cumulative_score"));
}

#[test]
fn table_output_reports_no_matches() {
    let views = build_view(&fixture_dataset(), "zzz-nothing", SortKey::Contributor);
    let table = render_table(&views, false);
    assert_eq!(table, "No scores found matching your search.\n");
}

#[test]
fn json_output_is_structured_and_formatted() {
    let views = build_view(&fixture_dataset(), "pr201", SortKey::Contributor);
    let json = render_json(&views).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["contributor"], "amartinez");
    assert_eq!(parsed[0]["aggregate"]["security"], "5.00");
    assert_eq!(parsed[0]["submissions"][0]["id"], "pr201");
}

#[test]
fn summary_output_counts_matches() {
    let views = build_view(&fixture_dataset(), "", SortKey::Contributor);
    let summary = render_summary(&views, false);
    assert!(summary.contains("3 contributors, 5 submissions"));
}
