//! Library Model
//!
//! The in-memory file catalog: the static category list and the per-category
//! file sequences. Only deletion mutates it.

use std::collections::HashMap;

use super::types::{Category, FileItem};
use crate::catalog::Catalog;

#[derive(Clone, Debug)]
pub struct LibraryModel {
    /// Fixed category list (never mutated)
    pub categories: Vec<Category>,

    /// category id -> ordered files
    pub files: HashMap<String, Vec<FileItem>>,
}

impl LibraryModel {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            categories: catalog.categories,
            files: catalog.files,
        }
    }

    /// Get category by ID
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Files of a category (empty when the category has no listing)
    pub fn files(&self, category_id: &str) -> &[FileItem] {
        self.files
            .get(category_id)
            .map(|files| files.as_slice())
            .unwrap_or(&[])
    }

    /// Remove a file by id from one category, returning it if it was present
    pub fn remove_file(&mut self, category_id: &str, file_id: &str) -> Option<FileItem> {
        let files = self.files.get_mut(category_id)?;
        let pos = files.iter().position(|f| f.id == file_id)?;
        Some(files.remove(pos))
    }
}
