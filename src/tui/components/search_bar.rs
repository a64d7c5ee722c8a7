// Search bar component
//
// Shows the live name filter. When active, keystrokes edit the query and a
// cursor block is appended; the border color signals which mode we are in.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let (title, border_style) = if app.search_active {
        (" Search (Enter/Esc to leave) ", Style::default().fg(Color::Yellow))
    } else {
        (" Search (/) ", Style::default())
    };

    let mut spans = vec![Span::raw(app.search.as_str())];
    if app.search_active {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    } else if app.search.is_empty() {
        spans.push(Span::styled(
            "type / to filter by name",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    f.render_widget(bar, area);
}
