//! Search box of the detail screen

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Box title: match count, the year it is narrowed to, and the keys that apply
fn search_title(active: bool, year: Option<&str>, match_count: usize) -> String {
    let noun = if match_count == 1 { "match" } else { "matches" };
    let scope = match year {
        Some(year) => format!("{} {} in {}", match_count, noun, year),
        None => format!("{} {}", match_count, noun),
    };
    let keys = if active {
        "Enter keeps, Esc cancels"
    } else {
        "/ edits, Esc clears"
    };
    format!(" Search: {} · {} ", scope, keys)
}

/// Render the search box; `match_count` counts files passing both filters
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    year: Option<&str>,
    match_count: usize,
) {
    let (border, text) = if match_count == 0 {
        (Color::Red, Color::Red)
    } else if active {
        (Color::Cyan, Color::White)
    } else {
        (Color::Gray, Color::Gray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(search_title(active, year, match_count))
        .border_style(Style::default().fg(border));

    let mut spans = vec![
        Span::styled("🔍 ", Style::default().fg(Color::Gray)),
        Span::styled(query.to_string(), Style::default().fg(text)),
    ];
    if active {
        spans.push(Span::styled(
            " ",
            Style::default().bg(Color::Yellow).add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_names_the_year_filter() {
        assert_eq!(
            search_title(false, Some("2023"), 2),
            " Search: 2 matches in 2023 · / edits, Esc clears "
        );
        assert_eq!(
            search_title(true, None, 1),
            " Search: 1 match · Enter keeps, Esc cancels "
        );
    }
}
