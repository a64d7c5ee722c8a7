// Detail panel component
//
// Renders the selected record: a glyph block tinted by the light color,
// then incantation, effect, type, creator and verbal. Absent optionals show
// as empty values - the layout never drops a row.

use crate::light::color_of;
use crate::spell::SpellRecord;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the tinted glyph block, in block characters
const GLYPH_WIDTH: usize = 14;
const GLYPH_HEIGHT: usize = 3;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" Detail ");

    let Some(spell) = app.selected_spell() else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Select a spell",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    };

    let lines = detail_lines(spell);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn detail_lines(spell: &SpellRecord) -> Vec<Line<'_>> {
    let tint: Color = color_of(spell.light.as_deref()).into();
    let glyph_row = "█".repeat(GLYPH_WIDTH);

    let mut lines = vec![Line::from(Span::styled(
        spell.name.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::default());
    for _ in 0..GLYPH_HEIGHT {
        lines.push(Line::from(Span::styled(
            glyph_row.clone(),
            Style::default().fg(tint),
        )));
    }
    lines.push(Line::default());

    lines.push(field_line(
        "incantation",
        spell.incantation.as_deref().unwrap_or(""),
        Modifier::BOLD,
    ));
    lines.push(field_line(
        "effect",
        spell.effect.as_deref().unwrap_or(""),
        Modifier::ITALIC,
    ));
    lines.push(field_line("type", spell.kind.as_deref().unwrap_or(""), Modifier::empty()));
    lines.push(field_line(
        "creator",
        spell.creator.as_deref().unwrap_or(""),
        Modifier::empty(),
    ));
    lines.push(field_line(
        "verbal",
        match spell.can_be_verbal {
            Some(true) => "yes",
            Some(false) => "no",
            None => "",
        },
        Modifier::empty(),
    ));
    lines.push(field_line("light", spell.light.as_deref().unwrap_or(""), Modifier::empty()));

    lines
}

fn field_line<'a>(label: &'a str, value: &'a str, modifier: Modifier) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().add_modifier(modifier)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_spell() -> SpellRecord {
        SpellRecord {
            name: "Obscuro".to_string(),
            incantation: None,
            can_be_verbal: None,
            effect: None,
            kind: None,
            light: None,
            creator: None,
        }
    }

    #[test]
    fn absent_fields_still_get_rows() {
        let spell = bare_spell();
        let lines = detail_lines(&spell);
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        // Every labeled row is present even though all optionals are None.
        for label in ["incantation: ", "effect: ", "type: ", "creator: ", "verbal: ", "light: "] {
            assert!(
                text.iter().any(|l| l.contains(label)),
                "missing row {label:?} in {text:?}"
            );
        }
    }

    #[test]
    fn glyph_rows_carry_the_light_tint() {
        let mut spell = bare_spell();
        spell.light = Some("Gold".to_string());

        let lines = detail_lines(&spell);
        let tinted = lines.iter().any(|l| {
            l.spans
                .iter()
                .any(|s| s.style.fg == Some(Color::Rgb(0xec, 0xaa, 0x50)))
        });
        assert!(tinted, "expected a span tinted with the Gold triple");
    }

    #[test]
    fn missing_light_tints_black() {
        let spell = bare_spell();
        let lines = detail_lines(&spell);
        let black = lines.iter().any(|l| {
            l.spans
                .iter()
                .any(|s| s.style.fg == Some(Color::Rgb(0, 0, 0)) && s.content.contains('█'))
        });
        assert!(black);
    }
}
