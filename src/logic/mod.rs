//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Error message formatting
//! - filter: Search and year filtering, year chips
//! - formatting: Counts, positions, width-aware truncation
//! - layout: Screen areas and mouse hit-testing
//! - navigation: Cursor wrapping, clamping and grid movement
//! - ui: UI state transitions and cycling
//! - upload: Parsing dropped/pasted paths into file names

pub mod errors;
pub mod filter;
pub mod formatting;
pub mod layout;
pub mod navigation;
pub mod ui;
pub mod upload;
