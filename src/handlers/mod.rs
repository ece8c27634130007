//! Event Handlers
//!
//! Pure translations from terminal events to messages:
//! - keyboard: Key presses
//! - mouse: Clicks and wheel
//! - paste: Bracketed paste, which is how files get dropped onto the terminal

pub mod keyboard;
pub mod mouse;

use crate::logic::upload::parse_dropped_paths;
use crate::messages::Msg;
use crate::model::Model;

pub use keyboard::key_to_msg;
pub use mouse::mouse_to_msg;

/// Translate pasted text into a message
///
/// With the upload prompt open the text goes into the prompt. Otherwise, on a
/// detail screen with nothing on top of it, the paste is treated as a drop of
/// the files it names.
pub fn paste_to_msg(model: &Model, text: &str) -> Option<Msg> {
    if model.ui.upload_prompt.is_some() {
        return Some(Msg::UploadPromptPaste(text.to_string()));
    }

    if model.has_modal() || model.ui.lightbox.is_some() || !model.navigation.in_detail_view() {
        return None;
    }

    let names = parse_dropped_paths(text);
    if names.is_empty() {
        None
    } else {
        Some(Msg::FilesDropped(names))
    }
}
