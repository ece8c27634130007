use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use homefiles::logic::formatting::truncate_to_width;

/// Center a dialog of the given size, shrinking it on small terminals
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the delete confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, file_name: &str, category_name: &str) {
    let prompt_width = 50;
    let name = truncate_to_width(file_name, prompt_width as usize - 10);

    let prompt_text = format!(
        "Delete this file?\n\n\
        File: {}\n\
        From: {}\n\n\
        WARNING: This action cannot be undone!\n\n\
        Continue? (y/n)",
        name, category_name
    );

    let prompt_area = centered(f.area(), prompt_width, 11);

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the upload prompt (type or paste paths, Enter uploads)
pub fn render_upload_prompt(f: &mut Frame, buffer: &str, category_name: &str) {
    let prompt_area = centered(f.area(), 64, 9);
    let input_width = prompt_area.width.saturating_sub(4) as usize;

    // Keep the end of a long buffer visible
    let shown: String = {
        let chars: Vec<char> = buffer.chars().collect();
        let skip = chars.len().saturating_sub(input_width.saturating_sub(1));
        chars[skip..].iter().collect()
    };

    let lines = vec![
        Line::from(format!("Upload to {}", category_name)),
        Line::from(""),
        Line::from(vec![
            Span::raw(shown),
            Span::styled(
                "█",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Paths separated by spaces; quote names with spaces",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Enter to upload, Esc to cancel",
            Style::default().fg(Color::Gray),
        )),
    ];

    let prompt = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Upload Files")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
