use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Which screen the legend describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendContext {
    Categories,
    Detail,
    Lightbox,
}

/// State the legend reacts to
#[derive(Debug, Clone, Copy)]
pub struct LegendState {
    pub vim_mode: bool,
    pub context: LegendContext,
    pub search_mode: bool,
    pub has_search_query: bool,
    pub has_year_filter: bool,
    pub has_uploads: bool,
}

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(state: LegendState) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if state.context == LegendContext::Lightbox {
        hotkey_spans.extend(vec![
            key("←/→"),
            Span::raw(":Prev/Next  "),
            key("d"),
            Span::raw(":Delete  "),
            key("Esc"),
            Span::raw(":Close"),
        ]);
        return hotkey_spans;
    }

    // Navigation keys (different for vim mode)
    if state.vim_mode {
        hotkey_spans.extend(vec![
            key("hjkl"),
            Span::raw(":Nav  "),
            key("gg/G"),
            Span::raw(":First/Last  "),
        ]);
    } else {
        hotkey_spans.extend(vec![key("Arrows"), Span::raw(":Nav  ")]);
    }

    hotkey_spans.extend(vec![key("Enter"), Span::raw(":Open  ")]);

    if state.context == LegendContext::Detail {
        // Search key - contextual based on search state
        if state.search_mode {
            hotkey_spans.extend(vec![
                key("Enter"),
                Span::raw(":Keep  "),
                key("Esc"),
                Span::raw(":Exit Search  "),
            ]);
        } else if state.has_search_query {
            hotkey_spans.extend(vec![key("Esc"), Span::raw(":Clear Search  ")]);
        } else {
            hotkey_spans.extend(vec![
                key("/ ^F"),
                Span::raw(":Search  "),
                key("Esc"),
                Span::raw(":Back  "),
            ]);
        }

        if state.has_year_filter {
            hotkey_spans.extend(vec![
                key("y/Y"),
                Span::raw(":Year  "),
                key("a"),
                Span::raw(":All years  "),
            ]);
        }

        hotkey_spans.extend(vec![
            key("v"),
            Span::raw(":List/Grid  "),
            key("u"),
            Span::raw(":Upload  "),
        ]);

        if state.has_uploads {
            hotkey_spans.extend(vec![key("X"), Span::raw(":Cancel uploads  ")]);
        }

        hotkey_spans.extend(vec![key("d"), Span::raw(":Delete  ")]);
    }

    // Quit - always available outside the lightbox
    hotkey_spans.extend(vec![key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

fn build_legend_paragraph(state: LegendState) -> Paragraph<'static> {
    Paragraph::new(vec![Line::from(build_hotkey_spans(state))])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, state: LegendState) {
    f.render_widget(build_legend_paragraph(state), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, state: LegendState) -> u16 {
    // line_count() doesn't account for borders when a block is attached
    let paragraph_for_counting = Paragraph::new(vec![Line::from(build_hotkey_spans(state))])
        .wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_to_text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn detail() -> LegendState {
        LegendState {
            vim_mode: false,
            context: LegendContext::Detail,
            search_mode: false,
            has_search_query: false,
            has_year_filter: false,
            has_uploads: false,
        }
    }

    #[test]
    fn test_category_legend_has_no_file_actions() {
        let text = spans_to_text(&build_hotkey_spans(LegendState {
            context: LegendContext::Categories,
            ..detail()
        }));
        assert!(text.contains("Open"));
        assert!(!text.contains("Delete"));
        assert!(!text.contains("Upload"));
    }

    #[test]
    fn test_year_keys_only_with_year_chips() {
        let without = spans_to_text(&build_hotkey_spans(detail()));
        assert!(!without.contains("Year"));

        let with = spans_to_text(&build_hotkey_spans(LegendState {
            has_year_filter: true,
            ..detail()
        }));
        assert!(with.contains("y/Y:Year"));
    }

    #[test]
    fn test_search_hint_follows_search_state() {
        let idle = spans_to_text(&build_hotkey_spans(detail()));
        assert!(idle.contains(":Search"));

        let typing = spans_to_text(&build_hotkey_spans(LegendState {
            search_mode: true,
            ..detail()
        }));
        assert!(typing.contains("Exit Search"));

        let accepted = spans_to_text(&build_hotkey_spans(LegendState {
            has_search_query: true,
            ..detail()
        }));
        assert!(accepted.contains("Clear Search"));
    }

    #[test]
    fn test_cancel_uploads_shown_only_while_uploading() {
        let idle = spans_to_text(&build_hotkey_spans(detail()));
        assert!(!idle.contains("Cancel uploads"));

        let busy = spans_to_text(&build_hotkey_spans(LegendState {
            has_uploads: true,
            ..detail()
        }));
        assert!(busy.contains("X:Cancel uploads"));
    }

    #[test]
    fn test_lightbox_legend() {
        let text = spans_to_text(&build_hotkey_spans(LegendState {
            context: LegendContext::Lightbox,
            ..detail()
        }));
        assert!(text.contains("Prev/Next"));
        assert!(text.contains("Esc:Close"));
        assert!(!text.contains("Quit"));
    }

    #[test]
    fn test_legend_height_grows_on_narrow_terminal() {
        let wide = calculate_legend_height(300, detail());
        let narrow = calculate_legend_height(30, detail());
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
