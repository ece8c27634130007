use crate::App;
use ratatui::Frame;

use homefiles::logic::layout::category_screen_areas;
use homefiles::ViewMode;

use super::{
    category_grid, dialogs, file_list, header, legend,
    legend::{LegendContext, LegendState},
    lightbox, search, status_bar, toast, uploads,
};

/// Main render function - orchestrates all UI rendering
///
/// Writes the rendered grid column counts back into the model so that
/// up/down movement steps by whole rows.
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    if app.model.navigation.in_detail_view() {
        render_detail(f, app);
    } else {
        let areas = category_screen_areas(size);
        category_grid::render_title(f, areas.title, app.model.library.categories.len());
        let columns = category_grid::render_category_grid(
            f,
            areas.grid,
            &app.model.library.categories,
            app.model.navigation.category_cursor,
            &app.icon_renderer,
        );
        app.model.navigation.category_columns = columns;

        legend::render_legend(
            f,
            areas.legend,
            LegendState {
                vim_mode: app.model.ui.vim_mode,
                context: LegendContext::Categories,
                search_mode: false,
                has_search_query: false,
                has_year_filter: false,
                has_uploads: !app.model.uploads.is_empty(),
            },
        );
    }

    // Lightbox covers the screen
    if let (Some((index, file)), Some(category)) =
        (app.model.lightbox_file(), app.model.current_category())
    {
        let len = app.model.visible_files().len();
        lightbox::render_lightbox(f, file, index, len, category, &app.icon_renderer);
    }

    // Render dialogs if active
    if let Some(target) = &app.model.ui.confirm_delete {
        let category_name = app
            .model
            .library
            .category(&target.category_id)
            .map(|c| c.name.as_str())
            .unwrap_or(target.category_id.as_str());
        dialogs::render_delete_confirmation(f, &target.name, category_name);
    }

    if let Some(buffer) = &app.model.ui.upload_prompt {
        let category_name = app
            .model
            .current_category()
            .map(|c| c.name.as_str())
            .unwrap_or_default();
        dialogs::render_upload_prompt(f, buffer, category_name);
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}

fn render_detail(f: &mut Frame, app: &mut App) {
    let legend_state = LegendState {
        vim_mode: app.model.ui.vim_mode,
        context: if app.model.ui.lightbox.is_some() {
            LegendContext::Lightbox
        } else {
            LegendContext::Detail
        },
        search_mode: app.model.ui.search_mode,
        has_search_query: !app.model.navigation.search_query.is_empty(),
        has_year_filter: !app.model.available_years().is_empty(),
        has_uploads: !app.model.uploads.is_empty(),
    };
    // Mouse hit-testing lays the screen out again from this height
    app.model.navigation.legend_height =
        legend::calculate_legend_height(f.area().width, legend_state);

    let model = &app.model;
    let Some(category) = model.current_category() else {
        return;
    };

    let years = model.available_years();
    let visible = model.visible_files();
    let total = model.current_files().len();
    let layout_info = model.detail_layout(f.area());

    header::render_header(
        f,
        layout_info.header_area,
        category,
        model.navigation.view_mode,
        &app.icon_renderer,
    );

    if let Some(area) = layout_info.years_area {
        header::render_year_chips(
            f,
            area,
            &years,
            model.navigation.selected_year.as_deref(),
            category,
        );
    }

    if let Some(area) = layout_info.search_area {
        search::render_search_input(
            f,
            area,
            &model.navigation.search_query,
            model.ui.search_mode,
            model.navigation.selected_year.as_deref(),
            visible.len(),
        );
    }

    let file_columns = match model.navigation.view_mode {
        ViewMode::List => {
            file_list::render_file_list(
                f,
                layout_info.files_area,
                &visible,
                total,
                model.navigation.file_cursor,
                category,
                &app.icon_renderer,
            );
            1
        }
        ViewMode::Grid => file_list::render_file_grid(
            f,
            layout_info.files_area,
            &visible,
            total,
            model.navigation.file_cursor,
            category,
            &app.icon_renderer,
        ),
    };

    if let Some(area) = layout_info.uploads_area {
        uploads::render_upload_panel(f, area, &model.uploads.entries, &app.icon_renderer);
    }

    legend::render_legend(f, layout_info.legend_area, legend_state);

    let selected_file = model
        .navigation
        .file_cursor
        .and_then(|idx| visible.get(idx))
        .map(|file| (file.name.as_str(), file.size.as_str()));

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &status_bar::StatusInfo {
            category_name: &category.name,
            visible_count: visible.len(),
            total_count: total,
            view_mode: model.navigation.view_mode.as_str(),
            selected_year: model.navigation.selected_year.as_deref(),
            uploading: model.uploads.len(),
            selected_file,
        },
    );

    app.model.navigation.file_columns = file_columns;
}
