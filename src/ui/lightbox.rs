//! Lightbox overlay
//!
//! Covers the whole screen with a backdrop and shows one file in a centered
//! panel: a preview strip in the category colors, then the file details.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use homefiles::logic::formatting::{format_position, truncate_to_width};
use homefiles::logic::layout::lightbox_content_rect;
use homefiles::model::{Category, FileItem};

use super::icons::{gradient_colors, gradient_row_color, IconRenderer};

pub fn render_lightbox(
    f: &mut Frame,
    file: &FileItem,
    index: usize,
    len: usize,
    category: &Category,
    icon_renderer: &IconRenderer,
) {
    let area = f.area();

    f.render_widget(Clear, area);
    f.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);

    let content = lightbox_content_rect(area);
    let (primary, _) = gradient_colors(category.gradient);

    // Prev/next arrows on the backdrop, halfway down
    if len > 1 && content.x >= 2 {
        let arrow_style = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);
        let y = content.y + content.height / 2;
        let left = Rect::new(content.x - 2, y, 1, 1);
        let right_x = content.x + content.width + 1;
        f.render_widget(Paragraph::new(Span::styled("‹", arrow_style)), left);
        if right_x < area.x + area.width {
            f.render_widget(
                Paragraph::new(Span::styled("›", arrow_style)),
                Rect::new(right_x, y, 1, 1),
            );
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(primary))
        .title(Line::from(format!(" {} ", format_position(index, len))).right_aligned())
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(content);
    f.render_widget(Clear, content);
    f.render_widget(block, content);

    let [preview, details] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(5)]).areas(inner);

    for row in 0..preview.height {
        let row_area = Rect {
            y: preview.y + row,
            height: 1,
            ..preview
        };
        let fill = Block::default()
            .style(Style::default().bg(gradient_row_color(category.gradient, row, preview.height)));
        f.render_widget(fill, row_area);
    }

    let icon = icon_renderer
        .file_icon(file.file_type.as_deref(), &category.icon)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    let icon_area = Rect {
        y: preview.y + preview.height / 2,
        height: 1.min(preview.height),
        ..preview
    };
    f.render_widget(Paragraph::new(Line::from(icon)).alignment(Alignment::Center), icon_area);

    let width = details.width as usize;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            truncate_to_width(&file.name, width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · {}", file.size, file.date),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            icon_renderer.delete_icon(),
            Span::styled("d delete   ←/→ browse   Esc close", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), details);
}
