// Status bar component
//
// Renders session statistics at the bottom: uptime, fetch counts, average
// latency, record count, and the active view's key hints.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let stats = &app.stats;

    let fetch_info = if stats.failed_fetches > 0 {
        format!("📡 {} ✗ {}", stats.total_fetches, stats.failed_fetches)
    } else {
        format!("📡 {}", stats.total_fetches)
    };

    let status_text = format!(
        " {} │ {} │ ~{}ms │ 📜 {} │ [{}] Tab:view /:search r:refresh q:quit",
        app.uptime(),
        fetch_info,
        stats.avg_duration().as_millis(),
        stats.record_count,
        app.view.name(),
    );

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
