use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use homefiles::logic::formatting::truncate_to_width;
use homefiles::model::UploadEntry;

use super::icons::IconRenderer;

/// Render the placeholders of in-flight uploads
pub fn render_upload_panel(
    f: &mut Frame,
    area: Rect,
    entries: &[UploadEntry],
    icon_renderer: &IconRenderer,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Uploading ({}) ", entries.len()))
        .border_style(Style::default().fg(Color::Yellow));
    let rows = block.inner(area).height as usize;
    let name_width = (area.width as usize).saturating_sub(18);

    // Leave the last row for the overflow count when not everything fits
    let shown = if entries.len() > rows {
        rows.saturating_sub(1)
    } else {
        entries.len()
    };

    let mut lines: Vec<Line> = entries
        .iter()
        .take(shown)
        .map(|entry| {
            Line::from(vec![
                icon_renderer.upload_icon(),
                Span::raw(truncate_to_width(&entry.name, name_width)),
                Span::styled(
                    "  uploading…",
                    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                ),
            ])
        })
        .collect();

    if shown < entries.len() {
        lines.push(Line::from(Span::styled(
            format!("… and {} more", entries.len() - shown),
            Style::default().fg(Color::Gray),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
