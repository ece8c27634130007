use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the status bar reports about the detail screen
pub struct StatusInfo<'a> {
    pub category_name: &'a str,
    pub visible_count: usize,
    pub total_count: usize,
    pub view_mode: &'a str,
    pub selected_year: Option<&'a str>,
    pub uploading: usize,
    pub selected_file: Option<(&'a str, &'a str)>, // (name, size)
}

fn build_status_line(info: &StatusInfo) -> String {
    let mut metrics = vec![format!("Category: {}", info.category_name)];

    if info.visible_count == info.total_count {
        metrics.push(format!("{} items", info.total_count));
    } else {
        metrics.push(format!("{} of {} items", info.visible_count, info.total_count));
    }

    metrics.push(format!("View: {}", info.view_mode));

    if let Some(year) = info.selected_year {
        metrics.push(format!("Year: {}", year));
    }

    if info.uploading > 0 {
        metrics.push(format!("Uploading: {}", info.uploading));
    }

    if let Some((name, size)) = info.selected_file {
        metrics.push(format!("Selected: {} ({})", name, size));
    }

    metrics.join(" | ")
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, info: &StatusInfo) {
    let status_line = build_status_line(info);

    // Color the labels (before colons)
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            spans.push(Span::styled(label.to_string(), Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(value.to_string()));
        } else {
            spans.push(Span::raw(part.to_string()));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
