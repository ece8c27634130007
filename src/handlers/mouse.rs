//! Mouse Input Handler
//!
//! Left clicks open category cards and files, pick year chips, toggle the
//! view, go back from the header arrow, and close the lightbox when they land
//! on its backdrop. The wheel moves the cursor.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::logic::layout::{self, FILE_TILE_HEIGHT, FILE_TILE_MIN_WIDTH};
use crate::messages::Msg;
use crate::model::{Direction, Model};
use crate::ViewMode;

/// Translate a mouse event into a message, given the terminal area
pub fn mouse_to_msg(model: &Model, event: MouseEvent, area: Rect) -> Option<Msg> {
    if model.has_modal() {
        return None;
    }

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => click(model, event.column, event.row, area),
        MouseEventKind::ScrollDown if model.ui.lightbox.is_none() => {
            Some(Msg::Move(Direction::Down))
        }
        MouseEventKind::ScrollUp if model.ui.lightbox.is_none() => Some(Msg::Move(Direction::Up)),
        _ => None,
    }
}

fn click(model: &Model, column: u16, row: u16, area: Rect) -> Option<Msg> {
    if model.ui.lightbox.is_some() {
        // Clicks on the content panel do nothing
        return if layout::is_lightbox_backdrop(area, column, row) {
            Some(Msg::CloseLightbox)
        } else {
            None
        };
    }

    if model.navigation.in_detail_view() {
        return detail_click(model, column, row, area);
    }

    let areas = layout::category_screen_areas(area);
    let grid = layout::visible_grid(
        areas.grid,
        model.library.categories.len(),
        layout::CATEGORY_CARD_MIN_WIDTH,
        layout::CATEGORY_CARD_HEIGHT,
        Some(model.navigation.category_cursor),
    );

    layout::hit_test(&grid, column, row)
        .and_then(|idx| model.library.categories.get(idx))
        .map(|category| Msg::OpenCategory(category.id.clone()))
}

fn detail_click(model: &Model, column: u16, row: u16, area: Rect) -> Option<Msg> {
    let areas = model.detail_layout(area);
    let pos = Position::new(column, row);

    if layout::back_button_rect(areas.header_area).contains(pos) {
        return Some(Msg::Back);
    }
    if layout::view_toggle_rect(areas.header_area, model.navigation.view_mode).contains(pos) {
        return Some(Msg::ToggleViewMode);
    }
    if let Some(years_area) = areas.years_area {
        if years_area.contains(pos) {
            return layout::year_chip_at(years_area, &model.available_years(), column, row)
                .map(Msg::SelectYear);
        }
    }
    if areas.search_area.is_some_and(|search| search.contains(pos)) {
        return Some(Msg::StartSearch);
    }

    file_at(model, areas.files_area, column, row).map(Msg::OpenLightbox)
}

/// Index into the visible files of the row or tile under the pointer
fn file_at(model: &Model, files_area: Rect, column: u16, row: u16) -> Option<usize> {
    let count = model.visible_files().len();
    let inner = layout::bordered_inner(files_area);
    let cursor = model.navigation.file_cursor;

    match model.navigation.view_mode {
        ViewMode::List => layout::list_row_at(inner, count, cursor, column, row),
        ViewMode::Grid => {
            let grid =
                layout::visible_grid(inner, count, FILE_TILE_MIN_WIDTH, FILE_TILE_HEIGHT, cursor);
            layout::hit_test(&grid, column, row)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::LightboxState;
    use crossterm::event::KeyModifiers;

    fn click_at(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 40,
    };

    #[test]
    fn test_click_on_category_card() {
        let model = Model::new(Catalog::builtin(), false);
        // Grid starts below the 3-line title; second card of the first row
        let msg = mouse_to_msg(&model, click_at(30, 5), AREA);
        assert_eq!(msg, Some(Msg::OpenCategory("videos".to_string())));
    }

    fn photos() -> Model {
        let mut model = Model::new(Catalog::builtin(), false);
        model.navigation.selected_category = Some("photos".to_string());
        model.navigation.file_cursor = Some(0);
        model
    }

    #[test]
    fn test_click_on_file_row_opens_lightbox() {
        let model = photos();
        // Header 0..3, year chips 3..6, files block from row 6, first row inside at 7
        assert_eq!(mouse_to_msg(&model, click_at(10, 7), AREA), Some(Msg::OpenLightbox(0)));
        assert_eq!(mouse_to_msg(&model, click_at(10, 9), AREA), Some(Msg::OpenLightbox(2)));
        // Below the last of the five rows
        assert_eq!(mouse_to_msg(&model, click_at(10, 12), AREA), None);
        // On the files border
        assert_eq!(mouse_to_msg(&model, click_at(0, 8), AREA), None);
    }

    #[test]
    fn test_click_on_file_row_respects_filters() {
        let mut model = photos();
        model.navigation.selected_year = Some("2023".to_string());
        assert_eq!(mouse_to_msg(&model, click_at(10, 8), AREA), Some(Msg::OpenLightbox(1)));
        assert_eq!(mouse_to_msg(&model, click_at(10, 9), AREA), None);
    }

    #[test]
    fn test_click_on_file_tile_opens_lightbox() {
        let mut model = photos();
        model.navigation.view_mode = ViewMode::Grid;
        // Inner width 98 fits four 24-wide tiles; the second starts at column 25
        assert_eq!(mouse_to_msg(&model, click_at(30, 8), AREA), Some(Msg::OpenLightbox(1)));
        // Second row of tiles starts at row 7 + 6
        assert_eq!(mouse_to_msg(&model, click_at(2, 14), AREA), Some(Msg::OpenLightbox(4)));
        assert_eq!(mouse_to_msg(&model, click_at(30, 14), AREA), None);
    }

    #[test]
    fn test_click_on_year_chips() {
        let model = photos();
        // " All " at 1..6, " 2024 " at 7..13, " 2023 " at 14..20
        assert_eq!(mouse_to_msg(&model, click_at(3, 4), AREA), Some(Msg::SelectYear(None)));
        assert_eq!(
            mouse_to_msg(&model, click_at(15, 4), AREA),
            Some(Msg::SelectYear(Some("2023".to_string())))
        );
        assert_eq!(mouse_to_msg(&model, click_at(80, 4), AREA), None);
    }

    #[test]
    fn test_click_on_header_buttons() {
        let model = photos();
        assert_eq!(mouse_to_msg(&model, click_at(1, 1), AREA), Some(Msg::Back));
        assert_eq!(mouse_to_msg(&model, click_at(95, 0), AREA), Some(Msg::ToggleViewMode));
        assert_eq!(mouse_to_msg(&model, click_at(40, 1), AREA), None);
    }

    #[test]
    fn test_click_on_kept_search_box_resumes_typing() {
        let mut model = photos();
        model.navigation.search_query = "img".to_string();
        // Search box sits under the chips at rows 6..9
        assert_eq!(mouse_to_msg(&model, click_at(10, 7), AREA), Some(Msg::StartSearch));
    }

    #[test]
    fn test_click_on_title_does_nothing() {
        let model = Model::new(Catalog::builtin(), false);
        assert_eq!(mouse_to_msg(&model, click_at(30, 1), AREA), None);
    }

    #[test]
    fn test_lightbox_backdrop_closes_content_does_not() {
        let mut model = Model::new(Catalog::builtin(), false);
        model.navigation.selected_category = Some("photos".to_string());
        model.ui.lightbox = Some(LightboxState { index: 0 });

        assert_eq!(mouse_to_msg(&model, click_at(1, 1), AREA), Some(Msg::CloseLightbox));
        assert_eq!(mouse_to_msg(&model, click_at(50, 20), AREA), None);
    }

    #[test]
    fn test_scroll_moves_cursor() {
        let mut model = Model::new(Catalog::builtin(), false);
        model.navigation.selected_category = Some("photos".to_string());
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(mouse_to_msg(&model, scroll, AREA), Some(Msg::Move(Direction::Down)));
    }

    #[test]
    fn test_modal_blocks_clicks() {
        let mut model = Model::new(Catalog::builtin(), false);
        model.ui.search_mode = true;
        assert_eq!(mouse_to_msg(&model, click_at(30, 5), AREA), None);
    }
}
