// Logs panel component
//
// Renders the in-memory log buffer (see logging.rs), newest entries at the
// bottom. Tail-follows: only the last rows that fit the viewport are shown.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Error => Color::Red,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Info => Color::Green,
        LogLevel::Debug => Color::Cyan,
        LogLevel::Trace => Color::DarkGray,
    }
}

fn format_entry(entry: &LogEntry) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            entry.timestamp.format("%H:%M:%S ").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:<5} ", entry.level.as_str()),
            Style::default().fg(level_color(entry.level)),
        ),
        Span::raw(entry.message.clone()),
    ]))
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let entries = app.log_buffer.snapshot();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" System Logs ({}) ", entries.len()));

    // Tail the buffer: keep only what fits inside the borders
    let visible = area.height.saturating_sub(2) as usize;
    let skip = entries.len().saturating_sub(visible);

    let items: Vec<ListItem> = entries.iter().skip(skip).map(format_entry).collect();
    f.render_widget(List::new(items).block(block), area);
}
