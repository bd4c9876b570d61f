//! `DashboardApp` - state for the interactive score dashboard.
//!
//! Owns the last completed fetch, the current search term and sort key, and
//! the flattened row list the renderer draws. Every search or sort change
//! re-runs the filter/sort engine synchronously against the cached dataset;
//! rows are never rebuilt from an in-progress fetch.

use crate::aggregate::AggregateResult;
use crate::engine::{build_view, ContributorView, SortKey};
use crate::model::{Dataset, MetricsRecord};
use crate::source::DatasetSource;

/// What the content area should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoadState {
    /// First fetch still in flight.
    Loading,
    /// First fetch failed; no data to fall back to.
    Failed(String),
    /// At least one fetch has completed.
    Ready,
}

/// One line of the flattened dashboard list.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DisplayRow {
    Contributor {
        name: String,
        aggregate: AggregateResult,
        submission_count: usize,
    },
    Submission {
        id: String,
        title: String,
        metrics: MetricsRecord,
    },
}

/// Main application state for the dashboard.
pub struct DashboardApp {
    /// Where refreshes are fetched from.
    pub(crate) source: DatasetSource,

    /// Last *completed* fetch. Written only by the fetch-completion arm of
    /// the event loop.
    pub(crate) dataset: Option<Dataset>,

    /// Error from the most recent failed fetch.
    pub(crate) load_error: Option<String>,

    /// A fetch worker is running; refresh requests are ignored meanwhile.
    pub(crate) fetch_in_flight: bool,

    /// Current search term.
    pub(crate) search_query: String,

    /// Search input mode is active.
    pub(crate) search_active: bool,

    /// Current sort key.
    pub(crate) sort_key: SortKey,

    /// Flattened engine output for rendering.
    pub(crate) rows: Vec<DisplayRow>,

    /// Contributors matched by the current view.
    pub(crate) matched_contributors: usize,

    /// Submissions matched by the current view.
    pub(crate) matched_submissions: usize,

    /// Selected row index.
    pub(crate) selected: usize,

    /// Show help overlay.
    pub(crate) show_help: bool,

    /// Temporary status message.
    pub(crate) status_message: Option<String>,

    /// A refresh was requested by the user; consumed by the event loop.
    pub(crate) refresh_requested: bool,

    /// Should quit.
    pub(crate) should_quit: bool,

    /// Animation tick counter.
    pub(crate) tick: u64,
}

const PAGE_SIZE: usize = 10;

impl DashboardApp {
    /// Create a dashboard for the given source with initial controls.
    #[must_use]
    pub fn new(source: DatasetSource, search: String, sort_key: SortKey) -> Self {
        Self {
            source,
            dataset: None,
            load_error: None,
            fetch_in_flight: false,
            search_query: search,
            search_active: false,
            sort_key,
            rows: Vec::new(),
            matched_contributors: 0,
            matched_submissions: 0,
            selected: 0,
            show_help: false,
            status_message: None,
            refresh_requested: false,
            should_quit: false,
            tick: 0,
        }
    }

    pub(crate) fn load_state(&self) -> LoadState {
        if self.dataset.is_some() {
            return LoadState::Ready;
        }
        match &self.load_error {
            Some(message) => LoadState::Failed(message.clone()),
            None => LoadState::Loading,
        }
    }

    /// Record that a fetch worker was started.
    pub(crate) fn on_fetch_started(&mut self) {
        self.fetch_in_flight = true;
    }

    /// Handle a completed fetch. The only writer of `dataset`.
    pub(crate) fn on_fetched(&mut self, result: Result<Dataset, String>) {
        self.fetch_in_flight = false;
        match result {
            Ok(dataset) => {
                self.load_error = None;
                self.dataset = Some(dataset);
                self.rebuild_rows();
                self.set_status_message(format!(
                    "Loaded {} contributors",
                    self.dataset.as_ref().map_or(0, Dataset::len)
                ));
            }
            Err(message) => {
                // Keep showing the previous dataset, if any
                if self.dataset.is_none() {
                    self.load_error = Some(message);
                } else {
                    self.set_status_message(format!("Refresh failed: {message}"));
                }
            }
        }
    }

    /// Re-run the engine against the cached dataset and reflatten.
    pub(crate) fn rebuild_rows(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        let views = build_view(dataset, &self.search_query, self.sort_key);
        self.matched_contributors = views.len();
        self.matched_submissions = views.iter().map(ContributorView::submission_count).sum();
        self.rows = flatten_views(views);
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }

    /// Request a refresh; ignored while a fetch is already in flight.
    pub(crate) fn request_refresh(&mut self) {
        if self.fetch_in_flight {
            self.set_status_message("Refresh already in progress");
        } else {
            self.refresh_requested = true;
        }
    }

    /// Consume a pending refresh request.
    pub(crate) fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    // ------------------------------------------------------------------
    // Controls
    // ------------------------------------------------------------------

    pub(crate) fn toggle_sort(&mut self) {
        self.sort_key = self.sort_key.toggled();
        self.rebuild_rows();
    }

    pub(crate) fn start_search(&mut self) {
        self.search_active = true;
    }

    pub(crate) fn stop_search(&mut self) {
        self.search_active = false;
    }

    pub(crate) fn clear_search(&mut self) {
        self.search_active = false;
        if !self.search_query.is_empty() {
            self.search_query.clear();
            self.rebuild_rows();
        }
    }

    pub(crate) fn search_push_char(&mut self, c: char) {
        self.search_query.push(c);
        self.rebuild_rows();
    }

    pub(crate) fn search_pop_char(&mut self) {
        self.search_query.pop();
        self.rebuild_rows();
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub(crate) fn select_next(&mut self) {
        if !self.rows.is_empty() && self.selected < self.rows.len() - 1 {
            self.selected += 1;
        }
    }

    pub(crate) fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub(crate) fn page_down(&mut self) {
        for _ in 0..PAGE_SIZE {
            self.select_next();
        }
    }

    pub(crate) fn page_up(&mut self) {
        for _ in 0..PAGE_SIZE {
            self.select_prev();
        }
    }

    pub(crate) fn go_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn go_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    // ------------------------------------------------------------------
    // Overlays / status
    // ------------------------------------------------------------------

    pub(crate) fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub(crate) fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub(crate) fn clear_status_message(&mut self) {
        self.status_message = None;
    }
}

/// Flatten contributor views into a single selectable row list.
fn flatten_views(views: Vec<ContributorView>) -> Vec<DisplayRow> {
    let mut rows = Vec::new();
    for view in views {
        rows.push(DisplayRow::Contributor {
            name: view.contributor,
            aggregate: view.aggregate,
            submission_count: view.submissions.len(),
        });
        for sub in view.submissions {
            rows.push(DisplayRow::Submission {
                id: sub.id,
                title: sub.title,
                metrics: sub.metrics,
            });
        }
    }
    rows
}
