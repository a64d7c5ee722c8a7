// Spell list component
//
// One row per record in the current snapshot, label = spell name, with a
// marker tinted by the record's light color. Selection is highlighted and
// kept in view via ListState.

use crate::light::color_of;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.loading {
        format!(" Spells ({}) ⟳ ", app.spells.len())
    } else {
        format!(" Spells ({}) ", app.spells.len())
    };

    let block = Block::default().borders(Borders::ALL).title(title);

    if app.spells.is_empty() {
        let placeholder = if app.loading {
            "Loading..."
        } else if app.search.trim().is_empty() {
            "No spells loaded"
        } else {
            "No spells match this search"
        };
        let empty = List::new([ListItem::new(Line::from(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray),
        )))])
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .spells
        .iter()
        .map(|spell| {
            let marker_color: Color = color_of(spell.light.as_deref()).into();
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(marker_color)),
                Span::raw(spell.name.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}
