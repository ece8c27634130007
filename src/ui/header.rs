//! Detail screen header and year chips

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use homefiles::logic::formatting::format_file_count;
use homefiles::logic::layout::{view_mode_title, year_chip_label, BACK_LABEL};
use homefiles::model::Category;
use homefiles::ViewMode;

use super::icons::{gradient_colors, IconRenderer};

/// Render the category header (icon, name, advertised count, view mode)
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    category: &Category,
    view_mode: ViewMode,
    icon_renderer: &IconRenderer,
) {
    let (primary, _) = gradient_colors(category.gradient);

    let line = Line::from(vec![
        Span::styled(BACK_LABEL, Style::default().fg(Color::Gray)),
        icon_renderer.category_icon(&category.icon, category.gradient),
        Span::styled(
            category.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", format_file_count(category.count)),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(primary))
        .title_top(Line::from(view_mode_title(view_mode)).right_aligned());

    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Build the chip spans: "All" followed by each year, the selected one highlighted
fn build_chip_spans(
    years: &[String],
    selected: Option<&str>,
    highlight: Color,
) -> Vec<Span<'static>> {
    let active = Style::default()
        .fg(Color::White)
        .bg(highlight)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::Gray);

    let mut spans = vec![Span::styled(
        year_chip_label(None),
        if selected.is_none() { active } else { inactive },
    )];

    for year in years {
        spans.push(Span::raw(" "));
        let style = if selected == Some(year.as_str()) {
            active
        } else {
            inactive
        };
        spans.push(Span::styled(year_chip_label(Some(year)), style));
    }

    spans
}

/// Render the year filter chips
pub fn render_year_chips(
    f: &mut Frame,
    area: Rect,
    years: &[String],
    selected: Option<&str>,
    category: &Category,
) {
    let (primary, _) = gradient_colors(category.gradient);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Year ")
        .style(Style::default().fg(Color::Gray));

    let line = Line::from(build_chip_spans(years, selected, primary));
    f.render_widget(Paragraph::new(line).block(block), area);
}
