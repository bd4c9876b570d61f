//! Per-contributor score aggregation.
//!
//! Computes the arithmetic mean of each metric across a contributor's
//! submissions. Missing metric fields count as zero, the reserved summary
//! key is never counted, and the divisor is always the number of real
//! submissions — not the number of submissions that happen to carry a given
//! field. Contributors with no submissions aggregate to `N/A` on every
//! metric.

use crate::model::ContributorRecord;
use serde::{Serialize, Serializer};
use std::fmt;

/// The mean of one metric, or unavailable when there was nothing to average.
///
/// Renders as a 2-fraction-digit decimal (`"3.00"`) or the `"N/A"` sentinel,
/// which is also its JSON form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricAverage(pub Option<f64>);

impl MetricAverage {
    /// Sentinel shown when a contributor has zero qualifying submissions.
    pub const UNAVAILABLE: &'static str = "N/A";

    #[must_use]
    pub const fn is_available(self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Display for MetricAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(mean) => write!(f, "{mean:.2}"),
            None => f.write_str(Self::UNAVAILABLE),
        }
    }
}

impl Serialize for MetricAverage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Per-metric means for one contributor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AggregateResult {
    pub readability: MetricAverage,
    pub robustness: MetricAverage,
    pub efficiency: MetricAverage,
    pub security: MetricAverage,
}

impl AggregateResult {
    /// True when the contributor had no qualifying submissions.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        !self.readability.is_available()
    }
}

/// Aggregate a contributor's full record into per-metric means.
///
/// Pure and deterministic; unaffected by any search filter the caller may be
/// applying to the visible submission list.
#[must_use]
pub fn aggregate(record: &ContributorRecord) -> AggregateResult {
    let mut readability = 0.0;
    let mut robustness = 0.0;
    let mut efficiency = 0.0;
    let mut security = 0.0;
    let mut count = 0usize;

    for (_, metrics) in record.entries() {
        readability += metrics.readability_score.unwrap_or(0.0);
        robustness += metrics.robustness_score.unwrap_or(0.0);
        efficiency += metrics.efficiency_score.unwrap_or(0.0);
        security += metrics.security_score.unwrap_or(0.0);
        count += 1;
    }

    if count == 0 {
        return AggregateResult::default();
    }

    let divisor = count as f64;
    AggregateResult {
        readability: MetricAverage(Some(readability / divisor)),
        robustness: MetricAverage(Some(robustness / divisor)),
        efficiency: MetricAverage(Some(efficiency / divisor)),
        security: MetricAverage(Some(security / divisor)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MetricsRecord, RESERVED_SUMMARY_KEY};

    fn record(entries: &[(&str, MetricsRecord)]) -> ContributorRecord {
        let mut rec = ContributorRecord::default();
        for (id, metrics) in entries {
            rec.submissions.insert((*id).to_string(), metrics.clone());
        }
        rec
    }

    fn metrics(r: f64, ro: f64, e: f64, s: f64) -> MetricsRecord {
        MetricsRecord {
            readability_score: Some(r),
            robustness_score: Some(ro),
            efficiency_score: Some(e),
            security_score: Some(s),
            ..MetricsRecord::default()
        }
    }

    #[test]
    fn empty_record_is_all_unavailable() {
        let result = aggregate(&ContributorRecord::default());
        assert!(result.is_unavailable());
        assert_eq!(result.readability.to_string(), "N/A");
        assert_eq!(result.security.to_string(), "N/A");
    }

    #[test]
    fn means_over_two_submissions() {
        let rec = record(&[
            ("pr1", metrics(4.0, 5.0, 3.0, 2.0)),
            ("pr2", metrics(2.0, 1.0, 1.0, 0.0)),
        ]);
        let result = aggregate(&rec);
        assert_eq!(result.readability.to_string(), "3.00");
        assert_eq!(result.robustness.to_string(), "3.00");
        assert_eq!(result.efficiency.to_string(), "2.00");
        assert_eq!(result.security.to_string(), "1.00");
    }

    #[test]
    fn missing_fields_count_as_zero_but_divisor_counts_the_submission() {
        let rec = record(&[
            ("pr1", metrics(4.0, 4.0, 4.0, 4.0)),
            ("pr2", MetricsRecord::default()),
        ]);
        let result = aggregate(&rec);
        assert_eq!(result.readability.to_string(), "2.00");
    }

    #[test]
    fn reserved_key_is_never_counted() {
        let mut rec = record(&[("pr1", metrics(3.0, 3.0, 3.0, 3.0))]);
        rec.submissions.insert(
            RESERVED_SUMMARY_KEY.to_string(),
            metrics(100.0, 100.0, 100.0, 100.0),
        );
        let result = aggregate(&rec);
        assert_eq!(result.readability.to_string(), "3.00");
    }

    #[test]
    fn negative_scores_pass_through() {
        let rec = record(&[("pr1", metrics(-2.0, 1.0, 0.0, 0.0))]);
        let result = aggregate(&rec);
        assert_eq!(result.readability.to_string(), "-2.00");
    }

    #[test]
    fn serializes_as_formatted_strings() {
        let rec = record(&[("pr1", metrics(4.0, 5.0, 3.0, 2.0))]);
        let json = serde_json::to_value(aggregate(&rec)).unwrap();
        assert_eq!(json["readability"], "4.00");
        assert_eq!(json["robustness"], "5.00");

        let empty = serde_json::to_value(aggregate(&ContributorRecord::default())).unwrap();
        assert_eq!(empty["efficiency"], "N/A");
    }
}
