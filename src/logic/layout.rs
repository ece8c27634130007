//! Layout calculation logic
//!
//! Pure functions for calculating screen areas. Rendering and mouse
//! hit-testing both go through these, so a click always lands on the card,
//! row or chip that was drawn there.

use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::ViewMode;

/// Minimum width of a category card
pub const CATEGORY_CARD_MIN_WIDTH: u16 = 24;
/// Height of a category card
pub const CATEGORY_CARD_HEIGHT: u16 = 7;
/// Minimum width of a file tile in grid view
pub const FILE_TILE_MIN_WIDTH: u16 = 22;
/// Height of a file tile in grid view
pub const FILE_TILE_HEIGHT: u16 = 6;

/// Most upload placeholders listed before the panel stops growing
pub const MAX_UPLOAD_ROWS: u16 = 4;
/// Label of the back button at the start of the detail header
pub const BACK_LABEL: &str = "← ";

/// Areas of the category grid screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScreenAreas {
    pub title: Rect,
    pub grid: Rect,
    pub legend: Rect,
}

/// Cells of a grid that fit on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleGrid {
    /// Item index shown in the first cell
    pub first_index: usize,
    /// One rect per visible item, row-major
    pub cells: Vec<Rect>,
    pub columns: usize,
}

/// Split the terminal for the category grid screen
pub fn category_screen_areas(area: Rect) -> CategoryScreenAreas {
    let [title, grid, legend] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(area);

    CategoryScreenAreas { title, grid, legend }
}

/// Layout information for the detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLayout {
    /// Category name, file count and view mode
    pub header_area: Rect,
    /// Year chips (photos only)
    pub years_area: Option<Rect>,
    /// Search input (if visible)
    pub search_area: Option<Rect>,
    /// File list or grid
    pub files_area: Rect,
    /// Upload placeholders (if any are in flight)
    pub uploads_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the detail screen layout
pub fn calculate_detail_layout(
    terminal_size: Rect,
    show_years: bool,
    search_visible: bool,
    upload_count: usize,
    legend_height: u16,
) -> DetailLayout {
    let years_height = if show_years { 3 } else { 0 };
    let search_height = if search_visible { 3 } else { 0 };
    let uploads_height = if upload_count > 0 {
        (upload_count as u16).min(MAX_UPLOAD_ROWS) + 2
    } else {
        0
    };

    let [header_area, years, search, files_area, uploads, legend_area, status_area] =
        Layout::vertical([
            Constraint::Length(3),              // Header
            Constraint::Length(years_height),   // Year chips (0 when hidden)
            Constraint::Length(search_height),  // Search input (0 when hidden)
            Constraint::Min(3),                 // Files
            Constraint::Length(uploads_height), // Upload placeholders (0 when none)
            Constraint::Length(legend_height),  // Legend (exact fit for wrapped content)
            Constraint::Length(3),              // Status bar
        ])
        .areas(terminal_size);

    DetailLayout {
        header_area,
        years_area: show_years.then_some(years),
        search_area: search_visible.then_some(search),
        files_area,
        uploads_area: (upload_count > 0).then_some(uploads),
        legend_area,
        status_area,
    }
}

/// Area inside a one-cell border
pub fn bordered_inner(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

/// Back button: the arrow at the start of the header line
pub fn back_button_rect(header: Rect) -> Rect {
    let inner = bordered_inner(header);
    Rect {
        width: (BACK_LABEL.width() as u16).min(inner.width),
        height: inner.height.min(1),
        ..inner
    }
}

/// View mode label, right-aligned in the header's top border
pub fn view_toggle_rect(header: Rect, view_mode: ViewMode) -> Rect {
    let width = view_mode_title(view_mode).width() as u16;
    let right = header.right().saturating_sub(1);
    let x = right.saturating_sub(width).max(header.x.saturating_add(1));
    Rect {
        x,
        y: header.y,
        width: right.saturating_sub(x),
        height: header.height.min(1),
    }
}

/// Text of the view mode label in the header border
pub fn view_mode_title(view_mode: ViewMode) -> String {
    format!(" {} ", view_mode.as_str())
}

/// Label of a year chip (None = "All")
pub fn year_chip_label(year: Option<&str>) -> String {
    format!(" {} ", year.unwrap_or("All"))
}

/// Year chip drawn at a terminal cell: `Some(None)` is "All"
///
/// Chips sit on the first line inside the border, separated by one space.
pub fn year_chip_at(area: Rect, years: &[String], column: u16, row: u16) -> Option<Option<String>> {
    let inner = bordered_inner(area);
    if row != inner.y || !inner.contains(Position::new(column, row)) {
        return None;
    }

    let chips = std::iter::once(None).chain(years.iter().map(|y| Some(y.as_str())));
    let mut x = inner.x;
    for (i, chip) in chips.enumerate() {
        if i > 0 {
            x = x.saturating_add(1);
        }
        let width = year_chip_label(chip).width() as u16;
        if column >= x && column < x.saturating_add(width) {
            return Some(chip.map(str::to_string));
        }
        x = x.saturating_add(width);
    }
    None
}

/// First item shown by a list `rows` tall, scrolled just enough to show the cursor
///
/// # Examples
/// ```
/// use homefiles::logic::layout::list_first_index;
///
/// assert_eq!(list_first_index(Some(3), 10), 0);
/// assert_eq!(list_first_index(Some(12), 10), 3);
/// assert_eq!(list_first_index(None, 10), 0);
/// ```
pub fn list_first_index(cursor: Option<usize>, rows: u16) -> usize {
    cursor
        .map(|c| (c + 1).saturating_sub(rows.max(1) as usize))
        .unwrap_or(0)
}

/// Item of a one-line-per-item list drawn at a terminal cell
pub fn list_row_at(
    inner: Rect,
    count: usize,
    cursor: Option<usize>,
    column: u16,
    row: u16,
) -> Option<usize> {
    if !inner.contains(Position::new(column, row)) {
        return None;
    }
    let index = list_first_index(cursor, inner.height) + (row - inner.y) as usize;
    (index < count).then_some(index)
}

/// How many cells of `min_width` fit side by side (at least one)
///
/// # Examples
/// ```
/// use homefiles::logic::layout::grid_columns;
///
/// assert_eq!(grid_columns(100, 24), 4);
/// assert_eq!(grid_columns(10, 24), 1);
/// assert_eq!(grid_columns(0, 24), 1);
/// ```
pub fn grid_columns(width: u16, min_width: u16) -> usize {
    (width / min_width.max(1)).max(1) as usize
}

/// Lay out `count` cells row-major, scrolled so the cursor row is visible
pub fn visible_grid(
    area: Rect,
    count: usize,
    min_width: u16,
    cell_height: u16,
    cursor: Option<usize>,
) -> VisibleGrid {
    let columns = grid_columns(area.width, min_width);
    let cell_height = cell_height.max(1);
    let rows_fit = ((area.height / cell_height) as usize).max(1);

    let cursor_row = cursor.map(|c| c / columns).unwrap_or(0);
    let first_row = cursor_row.saturating_sub(rows_fit - 1);
    let first_index = first_row * columns;
    let last_index = count.min((first_row + rows_fit) * columns);

    let cell_width = area.width / columns as u16;
    let mut cells = Vec::new();
    for index in first_index..last_index {
        let offset = index - first_index;
        let row = (offset / columns) as u16;
        let col = (offset % columns) as u16;
        let y = area.y + row * cell_height;
        let height = cell_height.min((area.y + area.height).saturating_sub(y));
        if height == 0 {
            break;
        }
        cells.push(Rect {
            x: area.x + col * cell_width,
            y,
            width: cell_width,
            height,
        });
    }

    VisibleGrid {
        first_index,
        cells,
        columns,
    }
}

/// Index of the item drawn at a terminal cell, if any
pub fn hit_test(grid: &VisibleGrid, column: u16, row: u16) -> Option<usize> {
    let pos = Position::new(column, row);
    grid.cells
        .iter()
        .position(|cell| cell.contains(pos))
        .map(|offset| grid.first_index + offset)
}

/// Content panel of the lightbox; everything around it is backdrop
pub fn lightbox_content_rect(area: Rect) -> Rect {
    let width = (area.width * 7 / 10).max(area.width.min(30));
    let height = (area.height * 7 / 10).max(area.height.min(10));
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Whether a click at (column, row) hits the lightbox backdrop
pub fn is_lightbox_backdrop(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
        && !lightbox_content_rect(area).contains(Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_screen_areas_stack() {
        let areas = category_screen_areas(Rect::new(0, 0, 100, 40));
        assert_eq!(areas.title.height, 3);
        assert_eq!(areas.legend.height, 3);
        assert_eq!(areas.grid.y, 3);
        assert_eq!(areas.grid.height, 34);
    }

    #[test]
    fn test_visible_grid_all_fit() {
        let grid = visible_grid(Rect::new(0, 3, 100, 34), 8, 24, 7, Some(0));
        assert_eq!(grid.columns, 4);
        assert_eq!(grid.first_index, 0);
        assert_eq!(grid.cells.len(), 8);
        assert_eq!(grid.cells[4], Rect::new(0, 10, 25, 7));
    }

    #[test]
    fn test_visible_grid_scrolls_to_cursor() {
        // One column, room for two rows of 7
        let grid = visible_grid(Rect::new(0, 0, 20, 14), 8, 24, 7, Some(5));
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.first_index, 4);
        assert_eq!(grid.cells.len(), 2);
    }

    #[test]
    fn test_visible_grid_empty() {
        let grid = visible_grid(Rect::new(0, 0, 100, 30), 0, 24, 7, None);
        assert!(grid.cells.is_empty());
    }

    #[test]
    fn test_hit_test() {
        let grid = visible_grid(Rect::new(0, 3, 100, 34), 8, 24, 7, Some(0));
        assert_eq!(hit_test(&grid, 1, 4), Some(0));
        assert_eq!(hit_test(&grid, 30, 12), Some(5));
        assert_eq!(hit_test(&grid, 1, 1), None);
    }

    #[test]
    fn test_hit_test_accounts_for_scroll() {
        let grid = visible_grid(Rect::new(0, 0, 20, 14), 8, 24, 7, Some(5));
        assert_eq!(hit_test(&grid, 2, 8), Some(5));
    }

    #[test]
    fn test_minimal_detail_layout() {
        let layout = calculate_detail_layout(Rect::new(0, 0, 100, 40), false, false, 0, 3);
        assert!(layout.years_area.is_none());
        assert!(layout.search_area.is_none());
        assert!(layout.uploads_area.is_none());
        assert_eq!(layout.files_area.y, 3);
        assert_eq!(layout.files_area.height, 40 - 3 - 3 - 3);
    }

    #[test]
    fn test_optional_panels_take_space() {
        let layout = calculate_detail_layout(Rect::new(0, 0, 100, 40), true, true, 2, 3);
        assert_eq!(layout.years_area.map(|r| r.y), Some(3));
        assert_eq!(layout.search_area.map(|r| r.y), Some(6));
        assert_eq!(layout.files_area.y, 9);
        assert_eq!(layout.uploads_area.map(|r| r.height), Some(4));
    }

    #[test]
    fn test_upload_panel_is_capped() {
        let layout = calculate_detail_layout(Rect::new(0, 0, 100, 40), false, false, 50, 3);
        assert_eq!(layout.uploads_area.map(|r| r.height), Some(MAX_UPLOAD_ROWS + 2));
    }

    #[test]
    fn test_header_buttons() {
        let header = Rect::new(0, 0, 100, 3);
        assert_eq!(back_button_rect(header), Rect::new(1, 1, 2, 1));
        // " List " ends just before the top-right corner
        assert_eq!(view_toggle_rect(header, ViewMode::List), Rect::new(93, 0, 6, 1));
    }

    #[test]
    fn test_year_chip_at() {
        let area = Rect::new(0, 3, 60, 3);
        let years = vec!["2024".to_string(), "2023".to_string()];
        // " All " covers 1..6, then a gap at 6, " 2024 " at 7..13, gap, " 2023 " at 14..20
        assert_eq!(year_chip_at(area, &years, 2, 4), Some(None));
        assert_eq!(year_chip_at(area, &years, 6, 4), None);
        assert_eq!(year_chip_at(area, &years, 7, 4), Some(Some("2024".to_string())));
        assert_eq!(year_chip_at(area, &years, 19, 4), Some(Some("2023".to_string())));
        assert_eq!(year_chip_at(area, &years, 25, 4), None);
        assert_eq!(year_chip_at(area, &years, 2, 3), None);
    }

    #[test]
    fn test_list_row_at_follows_scroll() {
        let inner = Rect::new(1, 10, 50, 5);
        assert_eq!(list_row_at(inner, 20, Some(0), 5, 10), Some(0));
        assert_eq!(list_row_at(inner, 20, Some(0), 5, 14), Some(4));
        // Cursor on item 9 scrolls the window to 5..10
        assert_eq!(list_row_at(inner, 20, Some(9), 5, 10), Some(5));
        assert_eq!(list_row_at(inner, 3, Some(0), 5, 13), None);
        assert_eq!(list_row_at(inner, 20, Some(0), 5, 9), None);
    }

    #[test]
    fn test_lightbox_backdrop() {
        let area = Rect::new(0, 0, 100, 40);
        let content = lightbox_content_rect(area);
        assert!(content.width < area.width);
        assert!(is_lightbox_backdrop(area, 0, 0));
        assert!(!is_lightbox_backdrop(area, 50, 20));
        assert!(!is_lightbox_backdrop(area, 200, 200));
    }

    #[test]
    fn test_lightbox_content_on_tiny_terminal() {
        let area = Rect::new(0, 0, 20, 8);
        let content = lightbox_content_rect(area);
        assert_eq!(content, area);
    }
}
