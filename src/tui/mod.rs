// TUI module - Terminal User Interface
//
// Manages the terminal with ratatui: initialization and cleanup, the event
// loop (keyboard input, redraw ticks, fetch outcomes), and key dispatch.

pub mod app;
pub mod components;
pub mod ui;

use crate::events::{FetchOutcome, FetchRequest};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, View};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done. Blocks until the user quits.
pub async fn run_tui(
    request_tx: mpsc::Sender<FetchRequest>,
    mut outcome_rx: mpsc::Receiver<FetchOutcome>,
    log_buffer: LogBuffer,
    demo_mode: bool,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(request_tx, log_buffer, demo_mode);

    // Initial load before the first frame
    app.issue_fetch();

    let result = run_event_loop(&mut terminal, &mut app, &mut outcome_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! waits on three things at once: keyboard/mouse input, a
/// periodic redraw tick, and fetch outcomes from the worker.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    outcome_rx: &mut mpsc::Receiver<FetchOutcome>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick so the uptime and loading indicator stay fresh
            _ = tick_interval.tick() => {}

            // Fetch outcomes
            Some(outcome) = outcome_rx.recv() => {
                app.apply_outcome(outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: search field captures input when active, then global
/// keys, then view navigation.
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: the search field absorbs everything while active
    if app.search_active {
        handle_search_input(app, key_event.code);
        return;
    }

    // Layer 2: global keys
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.next_view();
            return;
        }
        KeyCode::Char('?') => {
            app.view = View::Help;
            return;
        }
        KeyCode::Char('/') => {
            app.view = View::Spells;
            app.search_active = true;
            return;
        }
        KeyCode::Char('r') => {
            // Manual refresh with the current filter (the pull-to-refresh
            // of the terminal world)
            app.issue_fetch();
            return;
        }
        _ => {}
    }

    // Layer 3: view-specific navigation
    if app.view == View::Spells {
        match key_event.code {
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
            KeyCode::Char('g') | KeyCode::Home => app.select_first(),
            KeyCode::Char('G') | KeyCode::End => app.select_last(),
            KeyCode::Esc => app.search_clear(),
            _ => {}
        }
    } else if key_event.code == KeyCode::Esc {
        app.view = View::Spells;
    }
}

/// Search field editing: every change to the query issues a new fetch;
/// the worker debounces bursts.
fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter => app.search_active = false,
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(c) => app.search_push(c),
        _ => {}
    }
}

/// Mouse wheel moves the selection
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.view != View::Spells {
        return;
    }
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> (App, mpsc::Receiver<FetchRequest>) {
        let (tx, rx) = mpsc::channel(16);
        (App::new(tx, LogBuffer::new(), false), rx)
    }

    #[test]
    fn q_quits_outside_search_mode() {
        let (mut app, _rx) = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn q_is_a_search_character_in_search_mode() {
        let (mut app, _rx) = test_app();
        app.search_active = true;
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.search, "q");
    }

    #[test]
    fn slash_enters_and_esc_leaves_search_mode() {
        let (mut app, _rx) = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('/')));
        assert!(app.search_active);
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(!app.search_active);
    }

    #[test]
    fn tab_cycles_views() {
        let (mut app, _rx) = test_app();
        assert_eq!(app.view, View::Spells);
        handle_key_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.view, View::Logs);
        handle_key_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.view, View::Help);
        handle_key_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.view, View::Spells);
    }
}
