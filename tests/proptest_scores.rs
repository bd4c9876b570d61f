//! Property-based tests for aggregation and the filter/sort engine.
//!
//! Ensures the pipeline handles arbitrary datasets without panicking and
//! that key invariants hold across random inputs.

use proptest::prelude::*;
use pr_scores::aggregate::aggregate;
use pr_scores::engine::{build_view, SortKey};
use pr_scores::model::{ContributorRecord, Dataset, MetricsRecord};

fn record_with(scores: Vec<(String, Option<f64>)>) -> ContributorRecord {
    let mut record = ContributorRecord::default();
    for (id, score) in scores {
        record.submissions.insert(
            id,
            MetricsRecord {
                readability_score: score,
                ..MetricsRecord::default()
            },
        );
    }
    record
}

proptest! {
    #[test]
    fn uniform_scores_average_to_themselves(
        quarters in -400i32..400,
        n in 1usize..20,
    ) {
        // Quarter steps are exactly representable, keeping the sum exact
        let v = f64::from(quarters) / 4.0;
        let scores = (0..n).map(|i| (format!("pr{i}"), Some(v))).collect();
        let result = aggregate(&record_with(scores));
        prop_assert_eq!(result.readability.to_string(), format!("{v:.2}"));
    }

    #[test]
    fn missing_scores_shrink_the_mean_not_the_divisor(
        quarters in 0i32..400,
        present in 1usize..10,
        absent in 1usize..10,
    ) {
        let v = f64::from(quarters) / 4.0;
        let mut scores: Vec<_> = (0..present).map(|i| (format!("p{i}"), Some(v))).collect();
        scores.extend((0..absent).map(|i| (format!("a{i}"), None)));
        let result = aggregate(&record_with(scores));

        let expected = v * present as f64 / (present + absent) as f64;
        prop_assert_eq!(result.readability.to_string(), format!("{expected:.2}"));
    }

    #[test]
    fn engine_never_panics_on_arbitrary_input(
        dataset in proptest::collection::vec(
            ("[a-z]{1,8}", proptest::collection::vec("[a-z0-9]{1,8}", 0..5)),
            0..8,
        ),
        search in "\\PC{0,20}",
        sort_model in any::<bool>(),
    ) {
        let mut data = Dataset::new();
        for (contributor, ids) in dataset {
            let record = record_with(ids.into_iter().map(|id| (id, Some(1.0))).collect());
            data.insert(contributor, record);
        }
        let sort_key = if sort_model { SortKey::Model } else { SortKey::Contributor };
        let views = build_view(&data, &search, sort_key);

        // Every surviving contributor has at least one visible submission
        prop_assert!(views.iter().all(|v| !v.submissions.is_empty()));
    }

    #[test]
    fn view_is_deterministic(
        ids in proptest::collection::vec("[a-z0-9]{1,6}", 1..10),
        search in "[a-z0-9]{0,3}",
    ) {
        let mut data = Dataset::new();
        data.insert(
            "carol".to_string(),
            record_with(ids.into_iter().map(|id| (id, Some(2.0))).collect()),
        );
        let first = build_view(&data, &search, SortKey::Model);
        let second = build_view(&data, &search, SortKey::Model);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn contributor_sort_is_ascending(
        names in proptest::collection::hash_set("[a-z]{1,8}", 1..10),
    ) {
        let mut data = Dataset::new();
        for name in names {
            data.insert(name, record_with(vec![("pr1".to_string(), Some(1.0))]));
        }
        let views = build_view(&data, "", SortKey::Contributor);
        let ordered: Vec<_> = views.iter().map(|v| v.contributor.as_str()).collect();
        let mut sorted = ordered.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ordered, sorted);
    }

    #[test]
    fn search_results_are_a_subset_of_the_unfiltered_view(
        ids in proptest::collection::vec("[a-z0-9]{1,6}", 1..10),
        search in "[a-z0-9]{1,4}",
    ) {
        let mut data = Dataset::new();
        data.insert(
            "dave".to_string(),
            record_with(ids.into_iter().map(|id| (id, Some(3.0))).collect()),
        );
        let all = build_view(&data, "", SortKey::Contributor);
        let filtered = build_view(&data, &search, SortKey::Contributor);

        let all_ids: Vec<_> = all
            .iter()
            .flat_map(|v| v.submissions.iter().map(|s| s.id.clone()))
            .collect();
        for view in &filtered {
            for sub in &view.submissions {
                prop_assert!(all_ids.contains(&sub.id));
            }
        }
    }
}
