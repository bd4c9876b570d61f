//! Filter/sort engine producing display-ready contributor views.
//!
//! Given the full dataset, a free-text search term, and a sort key, builds
//! an ordered sequence of contributor views: contributor ordering, per
//! contributor a filtered and ordered submission list, and the aggregate
//! computed over the contributor's *full* record — the summary statistics
//! are deliberately decoupled from whatever subset the search currently
//! shows.
//!
//! The whole pipeline is a pure function of its inputs. All sorts go through
//! `slice::sort_by`, which is stable, so equal keys keep their source order
//! and repeated invocations with identical inputs yield identical output.

use crate::aggregate::{aggregate, AggregateResult};
use crate::model::{synthesized_title, ContributorId, Dataset, MetricsRecord, SubmissionId};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// What the view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Contributors ascending by id; submissions in source order.
    #[default]
    Contributor,
    /// Contributors in source order; submissions ascending by model name.
    Model,
}

impl SortKey {
    /// The other key, for the dashboard's toggle control.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Contributor => Self::Model,
            Self::Model => Self::Contributor,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Contributor => "contributor",
            Self::Model => "model",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One submission ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionRow {
    pub id: SubmissionId,
    /// Stored PR title, or the synthesized `Update {id}.py` fallback.
    pub title: String,
    pub metrics: MetricsRecord,
}

/// One contributor ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributorView {
    pub contributor: ContributorId,
    /// Always computed from the full record, never the filtered subset.
    pub aggregate: AggregateResult,
    pub submissions: Vec<SubmissionRow>,
}

impl ContributorView {
    #[must_use]
    pub fn submission_count(&self) -> usize {
        self.submissions.len()
    }
}

/// Build the ordered, filtered view of the dataset.
///
/// Contributors whose submission list is empty after filtering are dropped
/// entirely; an empty result is the designed no-matches state, not an error.
#[must_use]
pub fn build_view(dataset: &Dataset, search_term: &str, sort_key: SortKey) -> Vec<ContributorView> {
    let term = search_term.to_lowercase();

    let mut contributors: Vec<_> = dataset.iter().collect();
    if sort_key == SortKey::Contributor {
        contributors.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    let mut views = Vec::new();
    for (contributor, record) in contributors {
        let mut submissions: Vec<SubmissionRow> = record
            .entries()
            .filter(|(id, metrics)| matches_search(id, metrics, &term))
            .map(|(id, metrics)| SubmissionRow {
                id: id.clone(),
                title: metrics.display_title(id),
                metrics: metrics.clone(),
            })
            .collect();

        if sort_key == SortKey::Model {
            submissions.sort_by(|a, b| a.metrics.model_key().cmp(b.metrics.model_key()));
        }

        if submissions.is_empty() {
            continue;
        }

        views.push(ContributorView {
            contributor: contributor.clone(),
            aggregate: aggregate(record),
            submissions,
        });
    }

    views
}

/// Case-insensitive submission match: id substring, synthesized title
/// substring, or stored title substring. The empty term matches everything.
fn matches_search(id: &str, metrics: &MetricsRecord, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return true;
    }
    if id.to_lowercase().contains(term_lower) {
        return true;
    }
    if synthesized_title(id).to_lowercase().contains(term_lower) {
        return true;
    }
    metrics
        .pr_title
        .as_ref()
        .is_some_and(|title| title.to_lowercase().contains(term_lower))
}
