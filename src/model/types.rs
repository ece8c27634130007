//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use serde::{Deserialize, Serialize};

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// Color family of a category card (rendered as a 600 → 400 shade gradient)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gradient {
    Purple,
    Blue,
    Green,
    Red,
    Orange,
    Pink,
    Indigo,
    Cyan,
}

/// A fixed top-level grouping of files
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Icon identifier, resolved by the icon renderer (unknown names fall back to a folder)
    pub icon: String,
    /// Advertised number of files on the server, not the length of the listing
    pub count: u64,
    pub gradient: Gradient,
}

/// A displayed file record (metadata only)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileItem {
    /// Unique within its own category only
    pub id: String,
    pub name: String,
    pub size: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// File awaiting delete confirmation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteTarget {
    pub file_id: String,
    pub category_id: String,
    pub name: String,
}

/// Open lightbox; `index` points into the visible (filtered) file sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightboxState {
    pub index: usize,
}

/// One simulated upload placeholder
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadEntry {
    pub ticket: u64,
    pub name: String,
}

/// Movement inside a grid or list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
