//! Interactive terminal dashboard for browsing pull request scores.
//!
//! The dashboard shows every contributor with their cumulative averages and
//! the submissions underneath, filtered and sorted live as the user types.
//! Fetches run on worker threads and land in the event loop as messages, so
//! the UI never blocks on the network.

mod app;
mod events;
mod theme;
mod ui;

pub use app::DashboardApp;
pub use ui::run_dashboard;
