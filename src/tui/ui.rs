// Frame layout and view rendering
//
// Chrome shared by all views: a one-line title bar on top, an optional
// error banner, and the status bar at the bottom. The Spells view fills the
// middle with search bar + list/detail split; Logs and Help take the whole
// body.

use super::app::{App, View};
use super::components::{detail_panel, logs_panel, search_bar, spell_list, status_bar};
use crate::config::VERSION;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw(f: &mut Frame, app: &App) {
    let has_error = app.error.is_some();

    let mut constraints = vec![Constraint::Length(1)]; // title
    constraints.push(Constraint::Min(0)); // body
    if has_error {
        constraints.push(Constraint::Length(1)); // error banner
    }
    constraints.push(Constraint::Length(2)); // status bar (top border + text)

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    draw_title(f, chunks[0], app);

    match app.view {
        View::Spells => draw_spells_view(f, chunks[1], app),
        View::Logs => logs_panel::render(f, chunks[1], app),
        View::Help => draw_help(f, chunks[1]),
    }

    if has_error {
        draw_error_banner(f, chunks[2], app);
    }
    status_bar::render(f, chunks[chunks.len() - 1], app);
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " Grimoire ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("v{VERSION} "),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if app.demo_mode {
        spans.push(Span::styled(
            "[demo] ",
            Style::default().fg(Color::Magenta),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_spells_view(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    search_bar::render(f, rows[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    spell_list::render(f, columns[0], app);
    detail_panel::render(f, columns[1], app);
}

fn draw_error_banner(f: &mut Frame, area: Rect, app: &App) {
    let Some(message) = app.error.as_deref() else {
        return;
    };

    // Truncate to the banner width; the logs view has the full message.
    let mut text = format!(" ✗ {message} (previous list retained)");
    while text.width() > area.width as usize {
        text.pop();
    }

    let banner = Paragraph::new(text).style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(banner, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "  Keybindings",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from("  /          edit the search filter (every edit refetches)"),
        Line::from("  Enter/Esc  leave the search field"),
        Line::from("  j/k, ↓/↑   move the selection"),
        Line::from("  g/G        jump to first/last spell"),
        Line::from("  r          refresh with the current filter"),
        Line::from("  Esc        clear the filter (outside search mode)"),
        Line::from("  Tab        cycle views (Spells → Logs → Help)"),
        Line::from("  q          quit"),
        Line::default(),
        Line::from(Span::styled(
            "  The list marker and detail glyph are tinted by each spell's",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  light attribute; spells without one are black.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
