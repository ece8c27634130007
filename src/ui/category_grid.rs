use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use homefiles::logic::formatting::{format_file_count, truncate_to_width};
use homefiles::logic::layout::{self, CATEGORY_CARD_HEIGHT, CATEGORY_CARD_MIN_WIDTH};
use homefiles::model::Category;

use super::icons::{gradient_colors, gradient_row_color, IconRenderer};

/// Render the title bar of the category screen
pub fn render_title(f: &mut Frame, area: Rect, category_count: usize) {
    let title = Line::from(vec![
        Span::styled(
            "Home Files",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} categories", category_count),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(
        Paragraph::new(title).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// Render the category cards, returning the number of columns used
pub fn render_category_grid(
    f: &mut Frame,
    area: Rect,
    categories: &[Category],
    cursor: usize,
    icon_renderer: &IconRenderer,
) -> usize {
    let grid = layout::visible_grid(
        area,
        categories.len(),
        CATEGORY_CARD_MIN_WIDTH,
        CATEGORY_CARD_HEIGHT,
        Some(cursor),
    );

    if categories.is_empty() {
        let empty = Paragraph::new("No categories")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return grid.columns;
    }

    for (offset, cell) in grid.cells.iter().enumerate() {
        let index = grid.first_index + offset;
        if let Some(category) = categories.get(index) {
            render_card(f, *cell, category, index == cursor, icon_renderer);
        }
    }

    grid.columns
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    category: &Category,
    selected: bool,
    icon_renderer: &IconRenderer,
) {
    let (primary, light) = gradient_colors(category.gradient);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(if selected { Color::White } else { primary }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Selected card is filled with its gradient
    if selected {
        for row in 0..inner.height {
            let row_area = Rect {
                y: inner.y + row,
                height: 1,
                ..inner
            };
            let fill = Block::default()
                .style(Style::default().bg(gradient_row_color(category.gradient, row, inner.height)));
            f.render_widget(fill, row_area);
        }
    }

    let (name_style, badge_style) = if selected {
        (
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else {
        (
            Style::default().fg(light).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Gray),
        )
    };

    let mut icon = icon_renderer.category_icon(&category.icon, category.gradient);
    if selected {
        icon = icon.style(Style::default().fg(Color::White));
    }

    let name_width = (inner.width as usize).saturating_sub(3);
    let lines = vec![
        Line::from(vec![
            icon,
            Span::styled(truncate_to_width(&category.name, name_width), name_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(format_file_count(category.count), badge_style)),
    ];

    // Center the three lines vertically
    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let text_area = Rect {
        y: inner.y + top,
        height: inner.height - top,
        ..inner
    };
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
}
