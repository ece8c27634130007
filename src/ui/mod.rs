// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Icon rendering (emoji and Nerd Fonts) and category gradients
// - render: Main orchestration function that coordinates all rendering
// - category_grid: Renders the category cards
// - header: Renders the detail header and year chips
// - file_list: Renders files as a list or as a grid of tiles
// - uploads: Renders in-flight upload placeholders
// - lightbox: Renders the full-screen file viewer
// - legend: Renders hotkey legend
// - search: Renders search input box with query and match count
// - status_bar: Renders bottom status bar
// - dialogs: Renders the delete confirmation and upload prompt
// - toast: Renders toast notifications (brief pop-up messages)

pub mod category_grid;
pub mod dialogs;
pub mod file_list;
pub mod header;
pub mod icons;
pub mod legend;
pub mod lightbox;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod toast;
pub mod uploads;

// Re-export main render function for convenience
pub use render::render;
