//! Home Files TUI Library
//!
//! Exposes the model, reducer and pure logic for testing

pub mod catalog;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod messages;
pub mod model;
pub mod services;
pub mod update;
pub mod utils;

use std::sync::atomic::{AtomicBool, Ordering};

// Global flag for debug mode
pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Append a line to the debug log (no-op unless `--debug` was given)
pub fn log_debug(msg: &str) {
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let stamp = chrono::Local::now().format("%H:%M:%S%.3f");
        // A failed log write must not disturb the UI
        let _ = writeln!(file, "[{}] {}", stamp, msg);
    }
}

/// How the files of a category are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl ViewMode {
    pub fn as_str(&self) -> &str {
        match self {
            ViewMode::List => "List",
            ViewMode::Grid => "Grid",
        }
    }
}
