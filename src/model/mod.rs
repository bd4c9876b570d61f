//! Data model for the pull request score store.
//!
//! The remote store is a nested key-value mapping: contributor id →
//! submission id → metrics record. Some contributor records additionally
//! carry a reserved `"cumulative_score"` entry holding legacy precomputed
//! data of arbitrary shape; it is never read and must never be counted as a
//! submission.
//!
//! All maps are [`IndexMap`]s: the store's source order is part of the
//! display contract (unsorted views preserve it, and sorts are stable
//! against it), so plain hash maps are not an option here.

use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The reserved per-contributor summary key.
///
/// Excluded from aggregation and filtering wherever submission entries are
/// iterated.
pub const RESERVED_SUMMARY_KEY: &str = "cumulative_score";

/// Identity under which submissions are grouped.
pub type ContributorId = String;

/// Identifier of an individually scored unit of work.
pub type SubmissionId = String;

/// The full dataset as served by the store: contributor id → record.
pub type Dataset = IndexMap<ContributorId, ContributorRecord>;

/// Quality scores attached to a single submission.
///
/// All fields are optional; a missing score contributes `0` to aggregation
/// but is displayed as absent. Scores are not validated or clamped — a
/// negative value propagates through the mean unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readability_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robustness_score: Option<f64>,

    /// Older store payloads call this `performance_score`.
    #[serde(
        default,
        alias = "performance_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub efficiency_score: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_score: Option<f64>,

    /// Name of the scoring model/source (e.g. "gpt", "claude").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Pull request title as stored by the uploader, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pr_title: Option<String>,
}

impl MetricsRecord {
    /// Tolerant conversion from an arbitrary JSON value.
    ///
    /// Each field is extracted independently; wrong-typed or missing fields
    /// become `None` instead of failing the whole record. Non-object values
    /// yield an empty record.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let num = |name: &str| value.get(name).and_then(Value::as_f64);
        let text = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_owned);
        Self {
            readability_score: num("readability_score"),
            robustness_score: num("robustness_score"),
            efficiency_score: num("efficiency_score").or_else(|| num("performance_score")),
            security_score: num("security_score"),
            model: text("model"),
            pr_title: text("pr_title"),
        }
    }

    /// Display title: the stored PR title when present, otherwise the
    /// synthesized one.
    #[must_use]
    pub fn display_title(&self, id: &str) -> String {
        self.pr_title
            .clone()
            .unwrap_or_else(|| synthesized_title(id))
    }

    /// The model name with a missing value normalized to the empty string,
    /// as used for ordering.
    #[must_use]
    pub fn model_key(&self) -> &str {
        self.model.as_deref().unwrap_or("")
    }
}

/// Synthesized display title for a submission, matching what the store's
/// original dashboard rendered for title-less entries.
#[must_use]
pub fn synthesized_title(id: &str) -> String {
    format!("Update {id}.py")
}

/// One contributor's submissions, keyed by submission id in source order.
///
/// The reserved summary entry is stripped at deserialization time, so the
/// map holds only real submissions. Consumers that build records by hand may
/// still insert the reserved key; the aggregator and engine skip it
/// defensively either way.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContributorRecord {
    pub submissions: IndexMap<SubmissionId, MetricsRecord>,
}

impl ContributorRecord {
    /// Iterate real (non-reserved) submissions in source order.
    pub fn entries(&self) -> impl Iterator<Item = (&SubmissionId, &MetricsRecord)> {
        self.submissions
            .iter()
            .filter(|(id, _)| id.as_str() != RESERVED_SUMMARY_KEY)
    }

    /// Number of real submissions. This is the aggregation divisor.
    #[must_use]
    pub fn submission_count(&self) -> usize {
        self.entries().count()
    }
}

impl<'de> Deserialize<'de> for ContributorRecord {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: IndexMap<String, Value> = IndexMap::deserialize(deserializer)?;
        let mut submissions = IndexMap::with_capacity(raw.len());
        for (id, value) in raw {
            if id == RESERVED_SUMMARY_KEY {
                continue;
            }
            submissions.insert(id, MetricsRecord::from_value(&value));
        }
        Ok(Self { submissions })
    }
}

impl fmt::Display for MetricsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let score = |v: Option<f64>| match v {
            Some(v) => format!("{v}"),
            None => "-".to_string(),
        };
        write!(
            f,
            "R:{} Ro:{} E:{} S:{}",
            score(self.readability_score),
            score(self.robustness_score),
            score(self.efficiency_score),
            score(self.security_score)
        )
    }
}

/// Parse a dataset from its JSON wire form.
///
/// The store serves `null` for an empty path; that parses as an empty
/// dataset rather than an error.
pub fn parse_dataset(payload: &str) -> std::result::Result<Dataset, serde_json::Error> {
    let value: Option<Dataset> = serde_json::from_str(payload)?;
    Ok(value.unwrap_or_default())
}
