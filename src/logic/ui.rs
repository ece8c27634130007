//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use crate::ViewMode;

/// Default toast lifetime
pub const DEFAULT_TOAST_MS: u128 = 1500;

/// Check if a toast has been shown long enough
pub fn should_dismiss_toast(elapsed_ms: u128, duration_ms: u128) -> bool {
    elapsed_ms >= duration_ms
}

/// Flip between list and grid
pub fn toggle_view_mode(current: ViewMode) -> ViewMode {
    match current {
        ViewMode::List => ViewMode::Grid,
        ViewMode::Grid => ViewMode::List,
    }
}

/// Cycle through the year chips: All → first year → ... → last year → All
///
/// `None` stands for the "All" chip. A current year that is no longer offered
/// restarts the cycle from "All".
///
/// # Examples
/// ```
/// use homefiles::logic::ui::cycle_year;
///
/// let years = vec!["2024".to_string(), "2023".to_string()];
/// assert_eq!(cycle_year(&years, None, true), Some("2024".to_string()));
/// assert_eq!(cycle_year(&years, Some("2024"), true), Some("2023".to_string()));
/// assert_eq!(cycle_year(&years, Some("2023"), true), None);
/// assert_eq!(cycle_year(&years, None, false), Some("2023".to_string()));
/// ```
pub fn cycle_year(years: &[String], current: Option<&str>, forward: bool) -> Option<String> {
    if years.is_empty() {
        return None;
    }

    // Chip positions: 0 = All, 1..=len = years
    let chips = years.len() + 1;
    let pos = current
        .and_then(|year| years.iter().position(|y| y == year))
        .map(|i| i + 1)
        .unwrap_or(0);

    let next = if forward {
        (pos + 1) % chips
    } else {
        (pos + chips - 1) % chips
    };

    if next == 0 {
        None
    } else {
        Some(years[next - 1].clone())
    }
}
