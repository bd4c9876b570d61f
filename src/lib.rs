//! **pr-scores: browse AI code review scores for pull request submissions.**
//!
//! `pr-scores` reads a hosted key-value store of per-submission review
//! metrics (readability, robustness, efficiency, security), computes each
//! contributor's cumulative averages, and presents the result as an
//! interactive terminal dashboard or as table, JSON, or summary output.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The dataset shape. A [`Dataset`] maps contributor ids to
//!   their submissions, each a [`MetricsRecord`] of optional metric values.
//!   Parsing is tolerant: unknown fields are dropped and the reserved
//!   `cumulative_score` summary key is stripped so it never counts as a
//!   submission.
//! - **[`aggregate`]**: Per-contributor cumulative averages. Missing metric
//!   values count as zero but the submission still counts in the divisor;
//!   a contributor with no submissions gets `N/A` for every metric.
//! - **[`engine`]**: The filter/sort pass producing [`ContributorView`]s.
//!   Searching narrows the submission list without touching the aggregates,
//!   which always cover the full record.
//! - **[`source`]**: Dataset loading from the remote store or a local file.
//! - **[`reports`]**: Non-interactive renderers (table, JSON, summary).
//! - **[`tui`]**: The interactive dashboard.
//!
//! ## Getting Started
//!
//! ```no_run
//! use pr_scores::engine::{build_view, SortKey};
//! use pr_scores::source::DatasetSource;
//! use std::path::PathBuf;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = DatasetSource::File(PathBuf::from("scores.json"));
//!     let dataset = source.load()?;
//!     for view in build_view(&dataset, "", SortKey::Contributor) {
//!         println!("{}: readability {}", view.contributor, view.aggregate.readability);
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize↔f64/u16 casts in layout math and averaging are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    // App state legitimately uses several bool toggle flags
    clippy::struct_excessive_bools
)]

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod reports;
pub mod source;
pub mod tui;

pub use aggregate::{aggregate, AggregateResult, MetricAverage};
pub use config::{FetchConfig, OutputConfig, QueryConfig, SourceConfig, ViewConfig};
pub use engine::{build_view, ContributorView, SortKey, SubmissionRow};
pub use error::{FetchErrorKind, Result, ScoresError};
pub use model::{parse_dataset, ContributorRecord, Dataset, MetricsRecord};
pub use reports::ReportFormat;
pub use source::{DatasetSource, RemoteConfig};
pub use tui::{run_dashboard, DashboardApp};
