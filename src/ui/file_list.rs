//! File list and file grid of the detail screen

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use homefiles::logic::formatting::truncate_to_width;
use homefiles::logic::layout::{self, FILE_TILE_HEIGHT, FILE_TILE_MIN_WIDTH};
use homefiles::model::{Category, FileItem};

use super::icons::{gradient_row_color, IconRenderer};

const SIZE_WIDTH: usize = 10;
const DATE_WIDTH: usize = 12;

/// Pad to a display width (format! pads by chars, not cells)
fn pad_to_width(text: &str, width: usize) -> String {
    let truncated = truncate_to_width(text, width);
    let pad = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(pad))
}

fn files_block(visible: usize, total: usize) -> Block<'static> {
    let title = if visible == total {
        format!(" Files ({}) ", total)
    } else {
        format!(" Files ({} of {}) ", visible, total)
    };
    Block::default().borders(Borders::ALL).title(title)
}

fn render_empty(f: &mut Frame, area: Rect, block: Block, filtered: bool) {
    let message = if filtered {
        "No files match the current filters"
    } else {
        "No files in this category"
    };
    let empty = Paragraph::new(message)
        .block(block)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(empty, area);
}

/// Render the visible files as rows (icon, name, size, date)
pub fn render_file_list(
    f: &mut Frame,
    area: Rect,
    files: &[&FileItem],
    total: usize,
    cursor: Option<usize>,
    category: &Category,
    icon_renderer: &IconRenderer,
) {
    let block = files_block(files.len(), total);
    if files.is_empty() {
        render_empty(f, area, block, total > 0);
        return;
    }
    let rows = block.inner(area).height;

    // Borders, highlight symbol and icon take 7 cells
    let name_width = (area.width as usize)
        .saturating_sub(7 + SIZE_WIDTH + DATE_WIDTH)
        .max(8);

    let items: Vec<ListItem> = files
        .iter()
        .map(|file| {
            ListItem::new(Line::from(vec![
                icon_renderer.file_icon(file.file_type.as_deref(), &category.icon),
                Span::raw(pad_to_width(&file.name, name_width)),
                Span::styled(
                    format!("{:>width$}", file.size, width = SIZE_WIDTH),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{:>width$}", file.date, width = DATE_WIDTH),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    // Same scroll position the mouse handler assumes
    let mut state = ListState::default()
        .with_offset(layout::list_first_index(cursor, rows))
        .with_selected(cursor);
    f.render_stateful_widget(list, area, &mut state);
}

/// Render the visible files as tiles, returning the number of columns used
pub fn render_file_grid(
    f: &mut Frame,
    area: Rect,
    files: &[&FileItem],
    total: usize,
    cursor: Option<usize>,
    category: &Category,
    icon_renderer: &IconRenderer,
) -> usize {
    let block = files_block(files.len(), total);
    let inner = block.inner(area);
    let grid = layout::visible_grid(inner, files.len(), FILE_TILE_MIN_WIDTH, FILE_TILE_HEIGHT, cursor);

    if files.is_empty() {
        render_empty(f, area, block, total > 0);
        return grid.columns;
    }
    f.render_widget(block, area);

    for (offset, cell) in grid.cells.iter().enumerate() {
        let index = grid.first_index + offset;
        if let Some(file) = files.get(index) {
            render_tile(f, *cell, file, cursor == Some(index), category, icon_renderer);
        }
    }

    grid.columns
}

fn render_tile(
    f: &mut Frame,
    area: Rect,
    file: &FileItem,
    selected: bool,
    category: &Category,
    icon_renderer: &IconRenderer,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(if selected { Color::Yellow } else { Color::DarkGray }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    // Two-row preview strip in the category colors
    let preview_rows = inner.height.saturating_sub(2).min(2);
    for row in 0..preview_rows {
        let row_area = Rect {
            y: inner.y + row,
            height: 1,
            ..inner
        };
        let fill = Block::default()
            .style(Style::default().bg(gradient_row_color(category.gradient, row, preview_rows)));
        f.render_widget(fill, row_area);
    }
    if preview_rows > 0 {
        let icon = icon_renderer
            .file_icon(file.file_type.as_deref(), &category.icon)
            .style(Style::default().fg(Color::White));
        let icon_area = Rect { height: 1, ..inner };
        f.render_widget(Paragraph::new(Line::from(icon)).alignment(Alignment::Center), icon_area);
    }

    let width = inner.width as usize;
    let name_style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let lines = vec![
        Line::from(Span::styled(truncate_to_width(&file.name, width), name_style)),
        Line::from(Span::styled(
            truncate_to_width(&format!("{} · {}", file.size, file.date), width),
            Style::default().fg(Color::Gray),
        )),
    ];
    let text_area = Rect {
        y: inner.y + preview_rows,
        height: inner.height - preview_rows,
        ..inner
    };
    f.render_widget(Paragraph::new(lines), text_area);
}
