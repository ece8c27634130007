//! Message types for the Elm Architecture pattern
//!
//! Every user intention and timer event is a `Msg`. Messages flow into
//! `update::update`, which mutates the model and may request `Effect`s that
//! only the runtime can perform.
//!
//! Message sources:
//! - User input (keyboard, mouse, bracketed paste)
//! - Upload timers (a scheduled upload has expired)

use crate::model::Direction;
use crate::ViewMode;

/// Unified message type for all application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    // ============================================
    // CATEGORY GRID
    // ============================================
    /// Enter a category's detail screen
    OpenCategory(String),

    /// Enter the category under the grid cursor
    OpenSelectedCategory,

    /// Return to the category grid
    Back,

    // ============================================
    // CURSOR
    // ============================================
    /// Move the cursor of the current screen
    Move(Direction),

    /// Jump to the first item
    JumpFirst,

    /// Jump to the last item
    JumpLast,

    /// First 'g' of a vim 'gg'
    VimG,

    // ============================================
    // SEARCH & FILTERS
    // ============================================
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    /// Enter: stop typing, keep the query
    AcceptSearch,
    /// Esc: drop the query
    ClearSearch,

    /// Pick a year chip (None = "All")
    SelectYear(Option<String>),

    /// Step through the year chips
    CycleYear { forward: bool },

    SetViewMode(ViewMode),
    ToggleViewMode,

    // ============================================
    // UPLOADS
    // ============================================
    /// Files dropped or picked (names only)
    FilesDropped(Vec<String>),

    /// An upload timer expired
    UploadFinished { ticket: u64 },

    /// Abandon every in-flight upload
    CancelUploads,

    OpenUploadPrompt,
    UploadPromptInput(char),
    UploadPromptPaste(String),
    UploadPromptBackspace,
    SubmitUploadPrompt,
    CloseUploadPrompt,

    // ============================================
    // LIGHTBOX
    // ============================================
    /// Open the lightbox at an index of the visible sequence
    OpenLightbox(usize),

    /// Open the lightbox on the file under the cursor
    OpenSelectedFile,
    CloseLightbox,
    LightboxNext,
    LightboxPrev,

    // ============================================
    // DELETE
    // ============================================
    /// Ask to delete the file under the cursor
    RequestDeleteSelected,

    /// Ask to delete the file shown in the lightbox
    RequestDeleteCurrent,
    ConfirmDelete,
    CancelDelete,

    Quit,
}

impl Msg {
    /// Short name for the debug log (no payloads)
    pub fn kind(&self) -> &'static str {
        match self {
            Msg::OpenCategory(_) => "OpenCategory",
            Msg::OpenSelectedCategory => "OpenSelectedCategory",
            Msg::Back => "Back",
            Msg::Move(_) => "Move",
            Msg::JumpFirst => "JumpFirst",
            Msg::JumpLast => "JumpLast",
            Msg::VimG => "VimG",
            Msg::StartSearch => "StartSearch",
            Msg::SearchInput(_) => "SearchInput",
            Msg::SearchBackspace => "SearchBackspace",
            Msg::AcceptSearch => "AcceptSearch",
            Msg::ClearSearch => "ClearSearch",
            Msg::SelectYear(_) => "SelectYear",
            Msg::CycleYear { .. } => "CycleYear",
            Msg::SetViewMode(_) => "SetViewMode",
            Msg::ToggleViewMode => "ToggleViewMode",
            Msg::FilesDropped(_) => "FilesDropped",
            Msg::UploadFinished { .. } => "UploadFinished",
            Msg::CancelUploads => "CancelUploads",
            Msg::OpenUploadPrompt => "OpenUploadPrompt",
            Msg::UploadPromptInput(_) => "UploadPromptInput",
            Msg::UploadPromptPaste(_) => "UploadPromptPaste",
            Msg::UploadPromptBackspace => "UploadPromptBackspace",
            Msg::SubmitUploadPrompt => "SubmitUploadPrompt",
            Msg::CloseUploadPrompt => "CloseUploadPrompt",
            Msg::OpenLightbox(_) => "OpenLightbox",
            Msg::OpenSelectedFile => "OpenSelectedFile",
            Msg::CloseLightbox => "CloseLightbox",
            Msg::LightboxNext => "LightboxNext",
            Msg::LightboxPrev => "LightboxPrev",
            Msg::RequestDeleteSelected => "RequestDeleteSelected",
            Msg::RequestDeleteCurrent => "RequestDeleteCurrent",
            Msg::ConfirmDelete => "ConfirmDelete",
            Msg::CancelDelete => "CancelDelete",
            Msg::Quit => "Quit",
        }
    }
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start the expiry timer of an upload
    ScheduleUpload { ticket: u64, name: String },

    /// Stop the timers of these uploads
    CancelUploads(Vec<u64>),
}
