//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, dialogs, overlays, and visual state.

use std::time::Instant;

use super::types::{DeleteTarget, LightboxState, VimCommandState};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    /// How long a toast stays on screen
    pub toast_duration_ms: u128,

    // ============================================
    // DIALOGS & OVERLAYS
    // ============================================
    /// Full-screen viewer (None = closed)
    pub lightbox: Option<LightboxState>,

    /// Delete confirmation dialog; present means the dialog is open
    pub confirm_delete: Option<DeleteTarget>,

    /// Upload prompt buffer (None = prompt closed)
    pub upload_prompt: Option<String>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // SEARCH
    // ============================================
    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            toast_duration_ms: crate::logic::ui::DEFAULT_TOAST_MS,
            lightbox: None,
            confirm_delete: None,
            upload_prompt: None,
            toast_message: None,
            search_mode: false,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.confirm_delete.is_some() || self.upload_prompt.is_some() || self.search_mode
    }

    /// Close all modal dialogs (the lightbox is an overlay, not a modal)
    pub fn close_all_modals(&mut self) {
        self.confirm_delete = None;
        self.upload_prompt = None;
        self.search_mode = false;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(
                timestamp.elapsed().as_millis(),
                self.toast_duration_ms,
            )
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
