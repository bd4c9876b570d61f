//! UI rendering for the dashboard.

use super::app::{DashboardApp, DisplayRow, LoadState};
use super::events::{handle_key_event, Event, EventHandler};
use super::theme::colors;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use std::io::{self, stdout};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Run the dashboard TUI until the user quits.
pub fn run_dashboard(app: &mut DashboardApp) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::default();

    // Initial activation triggers the one dataset read
    events.spawn_fetch(app.source.clone());
    app.on_fetch_started();

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Fetched(result) => app.on_fetched(result.map(|boxed| *boxed)),
            Event::Resize(_, _) => {}
            Event::Tick => {
                app.tick += 1;
            }
        }

        if app.take_refresh_request() {
            events.spawn_fetch(app.source.clone());
            app.on_fetch_started();
        }

        if app.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Main render function.
fn render(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Controls
            Constraint::Min(5),    // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_controls(frame, chunks[1], app);
    render_content(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let c = colors();
    let mut spans = vec![
        Span::styled(
            " Pull Request Scores ",
            Style::default().fg(c.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.source.describe(), Style::default().fg(c.text_muted)),
    ];
    if app.fetch_in_flight {
        let spinner = SPINNER[(app.tick as usize) % SPINNER.len()];
        spans.push(Span::styled(
            format!("  {spinner} fetching"),
            Style::default().fg(c.warning),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let c = colors();
    let search_style = if app.search_active {
        Style::default().fg(c.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.text)
    };
    let cursor = if app.search_active { "█" } else { "" };
    let line = Line::from(vec![
        Span::styled(" Search: ", Style::default().fg(c.text_muted)),
        Span::styled(format!("{}{cursor}", app.search_query), search_style),
        Span::styled("   Sort: ", Style::default().fg(c.text_muted)),
        Span::styled(
            app.sort_key.label(),
            Style::default().fg(c.primary).add_modifier(Modifier::BOLD),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_content(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let c = colors();
    match app.load_state() {
        LoadState::Loading => {
            let msg = Paragraph::new("Loading scores...")
                .style(Style::default().fg(c.text_muted))
                .alignment(Alignment::Center);
            frame.render_widget(msg, area);
        }
        LoadState::Failed(message) => {
            let msg = Paragraph::new(format!("Error loading scores: {message}"))
                .style(Style::default().fg(c.error))
                .alignment(Alignment::Center)
                .wrap(ratatui::widgets::Wrap { trim: true });
            frame.render_widget(msg, area);
        }
        LoadState::Ready => {
            if app.rows.is_empty() {
                let msg = Paragraph::new("No scores found matching your search.")
                    .style(Style::default().fg(c.text_muted))
                    .alignment(Alignment::Center);
                frame.render_widget(msg, area);
                return;
            }
            render_score_list(frame, area, app);
        }
    }
}

fn render_score_list(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let c = colors();
    let items: Vec<ListItem> = app.rows.iter().map(|row| list_item(row)).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(c.border)),
        )
        .highlight_style(Style::default().bg(c.selection));

    let mut state = ListState::default();
    state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn list_item(row: &DisplayRow) -> ListItem<'_> {
    let c = colors();
    match row {
        DisplayRow::Contributor {
            name,
            aggregate,
            submission_count,
        } => ListItem::new(Line::from(vec![
            Span::styled(
                format!("{name} "),
                Style::default().fg(c.primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({submission_count}) "),
                Style::default().fg(c.text_muted),
            ),
            Span::styled(
                format!("Readability {} ", aggregate.readability),
                Style::default().fg(c.readability),
            ),
            Span::styled(
                format!("Robustness {} ", aggregate.robustness),
                Style::default().fg(c.robustness),
            ),
            Span::styled(
                format!("Efficiency {} ", aggregate.efficiency),
                Style::default().fg(c.efficiency),
            ),
            Span::styled(
                format!("Security {}", aggregate.security),
                Style::default().fg(c.security),
            ),
        ])),
        DisplayRow::Submission { id, title, metrics } => ListItem::new(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{id:<10} "), Style::default().fg(c.text)),
            Span::styled(format!("{title} "), Style::default().fg(c.accent)),
            Span::styled(format!("{metrics} "), Style::default().fg(c.text_muted)),
            Span::styled(
                metrics.model_key().to_string(),
                Style::default().fg(c.text_muted).add_modifier(Modifier::ITALIC),
            ),
        ])),
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let c = colors();
    let text = match &app.status_message {
        Some(msg) => msg.clone(),
        None => format!(
            " {} contributors, {} submissions",
            app.matched_contributors, app.matched_submissions
        ),
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(c.text_muted)),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let c = colors();
    let hints = if app.search_active {
        " type to search | Enter done | Esc clear"
    } else {
        " / search | s sort | r refresh | ?/help | q quit"
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(c.text_muted)),
        area,
    );
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let c = colors();
    let popup = centered_rect(50, 14, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled(
            "Keys",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw("  /        search submissions by id or title"),
        Line::raw("  s        toggle sort (contributor / model)"),
        Line::raw("  r        refresh from the score store"),
        Line::raw("  j/k ↓/↑  move selection"),
        Line::raw("  PgUp/Dn  move a page"),
        Line::raw("  g/G      first / last"),
        Line::raw("  q        quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "Aggregates always cover a contributor's full record,",
            Style::default().fg(c.text_muted),
        )),
        Line::from(Span::styled(
            "even when the search hides some submissions.",
            Style::default().fg(c.text_muted),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.primary));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Center a fixed-size rect within `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
