//! Navigation Model
//!
//! This sub-model contains all state related to navigation:
//! which screen is showing, cursors, and the filters applied to the
//! current category.

use crate::ViewMode;

/// Navigation state (screen, cursors, filters)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Category shown in the detail screen (None = category grid)
    pub selected_category: Option<String>,

    /// Highlighted card in the category grid
    pub category_cursor: usize,

    /// Highlighted file, as an index into the visible file sequence
    pub file_cursor: Option<usize>,

    /// Case-insensitive name filter
    pub search_query: String,

    /// Year chip filter (photos only)
    pub selected_year: Option<String>,

    /// List or grid rendering of the files
    pub view_mode: ViewMode,

    /// Columns of the category grid as last rendered
    pub category_columns: usize,

    /// Columns of the file grid as last rendered
    pub file_columns: usize,

    /// Height of the detail legend as last rendered (it wraps with the width)
    pub legend_height: u16,
}

impl NavigationModel {
    /// Create initial navigation model (category grid, nothing filtered)
    pub fn new() -> Self {
        Self {
            selected_category: None,
            category_cursor: 0,
            file_cursor: None,
            search_query: String::new(),
            selected_year: None,
            view_mode: ViewMode::List,
            category_columns: 4,
            file_columns: 5,
            legend_height: 3,
        }
    }

    /// Check if the detail screen is showing
    pub fn in_detail_view(&self) -> bool {
        self.selected_category.is_some()
    }

    /// Drop search, year filter and view mode back to defaults
    pub fn reset_filters(&mut self) {
        self.search_query.clear();
        self.selected_year = None;
        self.view_mode = ViewMode::List;
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}
