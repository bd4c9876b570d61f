//! Event handling for the dashboard.
//!
//! Terminal input runs on one worker thread; each fetch runs on its own
//! short-lived worker. Both deliver into the same channel, so the event loop
//! stays single-threaded and the fetch-completion arm is the only writer of
//! the cached dataset.

use super::app::DashboardApp;
use crate::model::Dataset;
use crate::source::DatasetSource;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal and worker events.
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// A fetch worker finished.
    Fetched(Result<Box<Dataset>, String>),
}

/// Event handler fanning all event sources into one channel.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    tx: mpsc::Sender<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(100);

        let event_tx = tx.clone();
        thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if event_tx.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => {
                            if event_tx.send(Event::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                } else if event_tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, tx }
    }
}

impl EventHandler {
    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }

    /// Start a fetch worker for the given source. Its result arrives as
    /// [`Event::Fetched`].
    pub fn spawn_fetch(&self, source: DatasetSource) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = source
                .load()
                .map(Box::new)
                .map_err(|e| e.to_string());
            // Receiver gone means the dashboard already quit
            let _ = tx.send(Event::Fetched(result));
        });
    }
}

/// Handle key events for the dashboard.
pub fn handle_key_event(app: &mut DashboardApp, key: KeyEvent) {
    app.clear_status_message();

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Search input mode captures everything printable
    if app.search_active {
        match key.code {
            KeyCode::Esc => app.clear_search(),
            KeyCode::Enter => app.stop_search(),
            KeyCode::Backspace => app.search_pop_char(),
            KeyCode::Char(c) => app.search_push_char(c),
            _ => {}
        }
        return;
    }

    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => app.toggle_help(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('s') => app.toggle_sort(),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Home | KeyCode::Char('g') => app.go_first(),
        KeyCode::End | KeyCode::Char('G') => app.go_last(),
        _ => {}
    }
}
