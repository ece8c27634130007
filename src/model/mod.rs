//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models for maintainability:
//!
//! - **LibraryModel**: Categories and their file listings
//! - **NavigationModel**: Screen, cursors, search and year filters
//! - **UiModel**: Preferences, dialogs, lightbox, toast
//! - **UploadModel**: In-flight upload placeholders
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: Timers live in the runtime, requested through effects
//! - Pure accessors: Helper methods are side-effect free

pub mod library;
pub mod navigation;
pub mod types;
pub mod ui;
pub mod uploads;

pub use library::LibraryModel;
pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;
pub use uploads::UploadModel;

use ratatui::layout::Rect;

use crate::catalog::Catalog;
use crate::logic;
use crate::logic::layout::DetailLayout;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Categories and files
    pub library: LibraryModel,

    /// Navigation state (screen, cursors, filters)
    pub navigation: NavigationModel,

    /// UI preferences and popups
    pub ui: UiModel,

    /// Upload placeholders
    pub uploads: UploadModel,
}

impl Model {
    /// Create initial model showing the category grid
    pub fn new(catalog: Catalog, vim_mode: bool) -> Self {
        Self {
            library: LibraryModel::new(catalog),
            navigation: NavigationModel::new(),
            ui: UiModel::new(vim_mode),
            uploads: UploadModel::new(),
        }
    }

    /// Category shown in the detail screen (if any)
    pub fn current_category(&self) -> Option<&Category> {
        self.navigation
            .selected_category
            .as_deref()
            .and_then(|id| self.library.category(id))
    }

    /// All files of the selected category
    pub fn current_files(&self) -> &[FileItem] {
        match self.navigation.selected_category.as_deref() {
            Some(id) => self.library.files(id),
            None => &[],
        }
    }

    /// Files of the selected category that pass the search and year filters
    pub fn visible_files(&self) -> Vec<&FileItem> {
        logic::filter::visible_files(
            self.current_files(),
            &self.navigation.search_query,
            self.navigation.selected_year.as_deref(),
        )
    }

    /// Year chips for the selected category (empty unless it supports year filtering)
    pub fn available_years(&self) -> Vec<String> {
        match self.navigation.selected_category.as_deref() {
            Some(id) => logic::filter::years_for_category(id, self.library.files(id)),
            None => Vec::new(),
        }
    }

    /// File under the cursor in the detail screen
    pub fn selected_file(&self) -> Option<&FileItem> {
        let idx = self.navigation.file_cursor?;
        self.visible_files().get(idx).copied()
    }

    /// File displayed in the lightbox, with its position
    pub fn lightbox_file(&self) -> Option<(usize, &FileItem)> {
        let index = self.ui.lightbox?.index;
        self.visible_files().get(index).map(|f| (index, *f))
    }

    /// Whether the search box is on screen (typing, or a kept query)
    pub fn search_visible(&self) -> bool {
        self.ui.search_mode || !self.navigation.search_query.is_empty()
    }

    /// Detail screen areas for a terminal of size `area`
    pub fn detail_layout(&self, area: Rect) -> DetailLayout {
        logic::layout::calculate_detail_layout(
            area,
            !self.available_years().is_empty(),
            self.search_visible(),
            self.uploads.len(),
            self.navigation.legend_height,
        )
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        Model::new(Catalog::builtin(), false)
    }

    #[test]
    fn test_model_creation() {
        let model = model();
        assert_eq!(model.library.categories.len(), 8);
        assert!(!model.navigation.in_detail_view());
        assert!(model.current_category().is_none());
        assert!(model.current_files().is_empty());
        assert!(model.uploads.is_empty());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = model();
        let _cloned = model.clone();
    }

    #[test]
    fn test_visible_files_follow_filters() {
        let mut model = model();
        model.navigation.selected_category = Some("photos".to_string());
        assert_eq!(model.visible_files().len(), 5);

        model.navigation.selected_year = Some("2023".to_string());
        assert_eq!(model.visible_files().len(), 2);

        model.navigation.search_query = "156".to_string();
        let names: Vec<&str> = model.visible_files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["IMG_2023_156.jpg"]);
    }

    #[test]
    fn test_available_years_only_for_photos() {
        let mut model = model();
        model.navigation.selected_category = Some("photos".to_string());
        assert_eq!(model.available_years(), vec!["2024", "2023", "2022"]);

        model.navigation.selected_category = Some("videos".to_string());
        assert!(model.available_years().is_empty());
    }

    #[test]
    fn test_lightbox_file_indexes_visible_sequence() {
        let mut model = model();
        model.navigation.selected_category = Some("photos".to_string());
        model.navigation.search_query = "2023".to_string();
        model.ui.lightbox = Some(LightboxState { index: 1 });

        let (index, file) = model.lightbox_file().unwrap();
        assert_eq!(index, 1);
        assert_eq!(file.name, "IMG_2023_089.jpg");
    }

    #[test]
    fn test_selected_file_out_of_range_is_none() {
        let mut model = model();
        model.navigation.selected_category = Some("videos".to_string());
        model.navigation.file_cursor = Some(9);
        assert!(model.selected_file().is_none());
    }
}
