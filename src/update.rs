//! Update Function - Elm Architecture
//!
//! The single place where the model changes. Every transition is synchronous
//! and total: stale indices and unknown ids are ignored or clamped. Work the
//! reducer cannot do itself (upload timers) is returned as `Effect`s.

use crate::logic;
use crate::messages::{Effect, Msg};
use crate::model::{DeleteTarget, Direction, LightboxState, Model, VimCommandState};
use crate::log_debug;

/// Apply a message to the model
pub fn update(model: &mut Model, msg: Msg) -> Vec<Effect> {
    log_debug(&format!("update: {}", msg.kind()));

    if msg != Msg::VimG {
        model.ui.vim_command_state = VimCommandState::None;
    }

    match msg {
        Msg::OpenCategory(category_id) => open_category(model, category_id),
        Msg::OpenSelectedCategory => {
            if let Some(category) = model.library.categories.get(model.navigation.category_cursor) {
                let id = category.id.clone();
                open_category(model, id);
            }
        }
        Msg::Back => go_back(model),

        Msg::Move(direction) => move_cursor(model, direction),
        Msg::JumpFirst => jump(model, true),
        Msg::JumpLast => jump(model, false),
        Msg::VimG => {
            if model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
                model.ui.vim_command_state = VimCommandState::None;
                jump(model, true);
            } else {
                model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }

        Msg::StartSearch => {
            if model.navigation.in_detail_view() {
                model.ui.search_mode = true;
            }
        }
        Msg::SearchInput(c) => {
            if model.navigation.in_detail_view() {
                model.navigation.search_query.push(c);
                refresh_after_filter_change(model);
            }
        }
        Msg::SearchBackspace => {
            if model.navigation.search_query.pop().is_some() {
                refresh_after_filter_change(model);
            }
        }
        Msg::AcceptSearch => model.ui.search_mode = false,
        Msg::ClearSearch => {
            model.ui.search_mode = false;
            if !model.navigation.search_query.is_empty() {
                model.navigation.search_query.clear();
                refresh_after_filter_change(model);
            }
        }

        Msg::SelectYear(year) => {
            let offered = model.available_years();
            let allowed = match &year {
                None => true,
                Some(y) => offered.contains(y),
            };
            if allowed && model.navigation.in_detail_view() {
                model.navigation.selected_year = year;
                refresh_after_filter_change(model);
            }
        }
        Msg::CycleYear { forward } => {
            let years = model.available_years();
            if !years.is_empty() {
                model.navigation.selected_year = logic::ui::cycle_year(
                    &years,
                    model.navigation.selected_year.as_deref(),
                    forward,
                );
                refresh_after_filter_change(model);
            }
        }
        Msg::SetViewMode(mode) => {
            if model.navigation.in_detail_view() {
                model.navigation.view_mode = mode;
            }
        }
        Msg::ToggleViewMode => {
            if model.navigation.in_detail_view() {
                model.navigation.view_mode =
                    logic::ui::toggle_view_mode(model.navigation.view_mode);
            }
        }

        Msg::FilesDropped(names) => return start_uploads(model, names),
        Msg::UploadFinished { ticket } => {
            if let Some(entry) = model.uploads.finish(ticket) {
                log_debug(&format!("upload #{} finished: {}", entry.ticket, entry.name));
            }
        }
        Msg::CancelUploads => {
            let tickets = model.uploads.clear();
            if !tickets.is_empty() {
                log_debug(&format!("cancelled uploads: {:?}", tickets));
                model.show_toast(format!("Cancelled {} upload(s)", tickets.len()));
                return vec![Effect::CancelUploads(tickets)];
            }
        }
        Msg::OpenUploadPrompt => {
            if model.navigation.in_detail_view() {
                model.ui.upload_prompt = Some(String::new());
            }
        }
        Msg::UploadPromptInput(c) => {
            if let Some(buffer) = &mut model.ui.upload_prompt {
                buffer.push(c);
            }
        }
        Msg::UploadPromptPaste(text) => {
            if let Some(buffer) = &mut model.ui.upload_prompt {
                if !buffer.is_empty() && !buffer.ends_with(' ') {
                    buffer.push(' ');
                }
                buffer.push_str(&text.replace(['\r', '\n'], " "));
            }
        }
        Msg::UploadPromptBackspace => {
            if let Some(buffer) = &mut model.ui.upload_prompt {
                buffer.pop();
            }
        }
        Msg::SubmitUploadPrompt => {
            if let Some(buffer) = model.ui.upload_prompt.take() {
                let names = logic::upload::parse_dropped_paths(&buffer);
                return start_uploads(model, names);
            }
        }
        Msg::CloseUploadPrompt => model.ui.upload_prompt = None,

        Msg::OpenLightbox(index) => open_lightbox(model, index),
        Msg::OpenSelectedFile => {
            if let Some(index) = model.navigation.file_cursor {
                open_lightbox(model, index);
            }
        }
        Msg::CloseLightbox => {
            if let Some(lightbox) = model.ui.lightbox.take() {
                model.navigation.file_cursor = Some(lightbox.index);
            }
        }
        Msg::LightboxNext => step_lightbox(model, true),
        Msg::LightboxPrev => step_lightbox(model, false),

        Msg::RequestDeleteSelected => {
            let target = model.selected_file().map(|f| (f.id.clone(), f.name.clone()));
            request_delete(model, target);
        }
        Msg::RequestDeleteCurrent => {
            let target = model.lightbox_file().map(|(_, f)| (f.id.clone(), f.name.clone()));
            request_delete(model, target);
        }
        Msg::ConfirmDelete => confirm_delete(model),
        Msg::CancelDelete => model.ui.confirm_delete = None,

        Msg::Quit => {
            model.ui.should_quit = true;
            let tickets = model.uploads.clear();
            if !tickets.is_empty() {
                return vec![Effect::CancelUploads(tickets)];
            }
        }
    }

    Vec::new()
}

fn open_category(model: &mut Model, category_id: String) {
    let Some(pos) = model
        .library
        .categories
        .iter()
        .position(|c| c.id == category_id)
    else {
        log_debug(&format!("open_category: unknown category {}", category_id));
        return;
    };

    model.navigation.category_cursor = pos;
    model.navigation.selected_category = Some(category_id);
    model.navigation.reset_filters();
    model.ui.close_all_modals();
    model.ui.lightbox = None;
    model.navigation.file_cursor =
        logic::navigation::clamp_selection(None, model.visible_files().len());
}

fn go_back(model: &mut Model) {
    if !model.navigation.in_detail_view() {
        return;
    }
    model.navigation.selected_category = None;
    model.navigation.reset_filters();
    model.navigation.file_cursor = None;
    model.ui.close_all_modals();
    model.ui.lightbox = None;
}

/// After search/year changes: cursor back to the first match, lightbox kept in bounds
fn refresh_after_filter_change(model: &mut Model) {
    let len = model.visible_files().len();
    model.navigation.file_cursor = logic::navigation::clamp_selection(None, len);
    clamp_lightbox(model, len);
}

fn clamp_lightbox(model: &mut Model, len: usize) {
    if let Some(lightbox) = &mut model.ui.lightbox {
        match logic::navigation::clamp_selection(Some(lightbox.index), len) {
            Some(index) => lightbox.index = index,
            None => model.ui.lightbox = None,
        }
    }
}

fn move_cursor(model: &mut Model, direction: Direction) {
    if model.navigation.in_detail_view() {
        let len = model.visible_files().len();
        let columns = match model.navigation.view_mode {
            crate::ViewMode::List => 1,
            crate::ViewMode::Grid => model.navigation.file_columns,
        };
        model.navigation.file_cursor =
            logic::navigation::grid_move(model.navigation.file_cursor, len, columns, direction);
    } else {
        let len = model.library.categories.len();
        if let Some(cursor) = logic::navigation::grid_move(
            Some(model.navigation.category_cursor),
            len,
            model.navigation.category_columns,
            direction,
        ) {
            model.navigation.category_cursor = cursor;
        }
    }
}

fn jump(model: &mut Model, to_first: bool) {
    if model.navigation.in_detail_view() {
        let len = model.visible_files().len();
        if len > 0 {
            model.navigation.file_cursor = Some(if to_first { 0 } else { len - 1 });
        }
    } else {
        let len = model.library.categories.len();
        if len > 0 {
            model.navigation.category_cursor = if to_first { 0 } else { len - 1 };
        }
    }
}

fn start_uploads(model: &mut Model, names: Vec<String>) -> Vec<Effect> {
    if !model.navigation.in_detail_view() {
        return Vec::new();
    }

    names
        .into_iter()
        .map(|name| {
            let ticket = model.uploads.begin(name.clone());
            log_debug(&format!("upload #{} started: {}", ticket, name));
            Effect::ScheduleUpload { ticket, name }
        })
        .collect()
}

fn open_lightbox(model: &mut Model, index: usize) {
    if index < model.visible_files().len() {
        model.ui.lightbox = Some(LightboxState { index });
        model.navigation.file_cursor = Some(index);
    }
}

fn step_lightbox(model: &mut Model, forward: bool) {
    let Some(lightbox) = model.ui.lightbox else {
        return;
    };
    let len = model.visible_files().len();
    let next = if forward {
        logic::navigation::next_selection(Some(lightbox.index), len)
    } else {
        logic::navigation::prev_selection(Some(lightbox.index), len)
    };
    model.ui.lightbox = next.map(|index| LightboxState { index });
}

fn request_delete(model: &mut Model, target: Option<(String, String)>) {
    let (Some((file_id, name)), Some(category_id)) =
        (target, model.navigation.selected_category.clone())
    else {
        return;
    };

    model.ui.confirm_delete = Some(DeleteTarget {
        file_id,
        category_id,
        name,
    });
}

fn confirm_delete(model: &mut Model) {
    let Some(target) = model.ui.confirm_delete.take() else {
        return;
    };

    if model
        .library
        .remove_file(&target.category_id, &target.file_id)
        .is_none()
    {
        log_debug(&format!(
            "confirm_delete: {}/{} already gone",
            target.category_id, target.file_id
        ));
        return;
    }

    log_debug(&format!("deleted {}/{} ({})", target.category_id, target.file_id, target.name));
    model.show_toast(format!("Deleted {}", target.name));

    if model.navigation.selected_category.as_deref() == Some(target.category_id.as_str()) {
        let len = model.visible_files().len();
        model.navigation.file_cursor =
            logic::navigation::clamp_selection(model.navigation.file_cursor, len);
        clamp_lightbox(model, len);
    }
}
