/// Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("homefiles-debug.log");
    path
}

/// Get the default config file location (`<config_dir>/homefiles/config.yaml`)
pub fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("homefiles").join("config.yaml"))
}
