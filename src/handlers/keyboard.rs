//! Keyboard Input Handler
//!
//! Maps key presses to messages. Dialogs and overlays take precedence over
//! the screen underneath, in this order: delete confirmation, upload prompt,
//! search input, lightbox, then the current screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::messages::Msg;
use crate::model::{Direction, Model};
use crate::ViewMode;

/// Translate a key press into a message (None = ignored)
pub fn key_to_msg(model: &Model, key: KeyEvent) -> Option<Msg> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Msg::Quit);
    }

    // Handle confirmation prompt first
    if model.ui.confirm_delete.is_some() {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Msg::ConfirmDelete),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Msg::CancelDelete),
            // Ignore other keys while prompt is showing
            _ => None,
        };
    }

    if model.ui.upload_prompt.is_some() {
        return match key.code {
            KeyCode::Esc => Some(Msg::CloseUploadPrompt),
            KeyCode::Enter => Some(Msg::SubmitUploadPrompt),
            KeyCode::Backspace => Some(Msg::UploadPromptBackspace),
            KeyCode::Char(c) if !ctrl => Some(Msg::UploadPromptInput(c)),
            _ => None,
        };
    }

    if model.ui.search_mode {
        return match key.code {
            KeyCode::Esc => Some(Msg::ClearSearch),
            KeyCode::Enter => Some(Msg::AcceptSearch),
            KeyCode::Backspace => Some(Msg::SearchBackspace),
            KeyCode::Char(c) if !ctrl => Some(Msg::SearchInput(c)),
            _ => None,
        };
    }

    if model.ui.lightbox.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Msg::CloseLightbox),
            KeyCode::Left | KeyCode::Char('h') => Some(Msg::LightboxPrev),
            KeyCode::Right | KeyCode::Char('l') => Some(Msg::LightboxNext),
            KeyCode::Char('d') | KeyCode::Delete => Some(Msg::RequestDeleteCurrent),
            _ => None,
        };
    }

    if model.navigation.in_detail_view() {
        detail_key(model, key.code, ctrl)
    } else {
        category_key(model, key.code)
    }
}

fn category_key(model: &Model, code: KeyCode) -> Option<Msg> {
    let vim = model.ui.vim_mode;
    match code {
        KeyCode::Char('q') => Some(Msg::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::OpenSelectedCategory),
        KeyCode::Up => Some(Msg::Move(Direction::Up)),
        KeyCode::Down => Some(Msg::Move(Direction::Down)),
        KeyCode::Left => Some(Msg::Move(Direction::Left)),
        KeyCode::Right => Some(Msg::Move(Direction::Right)),
        KeyCode::Home => Some(Msg::JumpFirst),
        KeyCode::End => Some(Msg::JumpLast),
        // Vim keybindings
        KeyCode::Char('k') if vim => Some(Msg::Move(Direction::Up)),
        KeyCode::Char('j') if vim => Some(Msg::Move(Direction::Down)),
        KeyCode::Char('h') if vim => Some(Msg::Move(Direction::Left)),
        KeyCode::Char('l') if vim => Some(Msg::Move(Direction::Right)),
        KeyCode::Char('g') if vim => Some(Msg::VimG),
        KeyCode::Char('G') if vim => Some(Msg::JumpLast),
        _ => None,
    }
}

fn detail_key(model: &Model, code: KeyCode, ctrl: bool) -> Option<Msg> {
    let vim = model.ui.vim_mode;
    let grid = model.navigation.view_mode == ViewMode::Grid;

    match code {
        KeyCode::Char('f') if ctrl => Some(Msg::StartSearch),
        KeyCode::Char('q') => Some(Msg::Quit),
        KeyCode::Char('/') => Some(Msg::StartSearch),
        KeyCode::Esc => {
            if model.navigation.search_query.is_empty() {
                Some(Msg::Back)
            } else {
                Some(Msg::ClearSearch)
            }
        }
        KeyCode::Backspace => Some(Msg::Back),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::OpenSelectedFile),
        KeyCode::Up => Some(Msg::Move(Direction::Up)),
        KeyCode::Down => Some(Msg::Move(Direction::Down)),
        KeyCode::Left if grid => Some(Msg::Move(Direction::Left)),
        KeyCode::Left => Some(Msg::Back),
        KeyCode::Right if grid => Some(Msg::Move(Direction::Right)),
        KeyCode::Right => Some(Msg::OpenSelectedFile),
        KeyCode::Home => Some(Msg::JumpFirst),
        KeyCode::End => Some(Msg::JumpLast),
        KeyCode::Char('y') => Some(Msg::CycleYear { forward: true }),
        KeyCode::Char('Y') => Some(Msg::CycleYear { forward: false }),
        KeyCode::Char('a') => Some(Msg::SelectYear(None)),
        KeyCode::Char('v') => Some(Msg::ToggleViewMode),
        KeyCode::Char('1') => Some(Msg::SetViewMode(ViewMode::List)),
        KeyCode::Char('2') => Some(Msg::SetViewMode(ViewMode::Grid)),
        KeyCode::Char('u') => Some(Msg::OpenUploadPrompt),
        KeyCode::Char('X') => Some(Msg::CancelUploads),
        KeyCode::Char('d') | KeyCode::Delete => Some(Msg::RequestDeleteSelected),
        // Vim keybindings
        KeyCode::Char('k') if vim => Some(Msg::Move(Direction::Up)),
        KeyCode::Char('j') if vim => Some(Msg::Move(Direction::Down)),
        KeyCode::Char('h') if vim && grid => Some(Msg::Move(Direction::Left)),
        KeyCode::Char('h') if vim => Some(Msg::Back),
        KeyCode::Char('l') if vim && grid => Some(Msg::Move(Direction::Right)),
        KeyCode::Char('l') if vim => Some(Msg::OpenSelectedFile),
        KeyCode::Char('g') if vim => Some(Msg::VimG),
        KeyCode::Char('G') if vim => Some(Msg::JumpLast),
        _ => None,
    }
}
