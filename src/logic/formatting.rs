//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a category's file count badge
///
/// # Examples
/// ```
/// use homefiles::logic::formatting::format_file_count;
///
/// assert_eq!(format_file_count(1), "1 file");
/// assert_eq!(format_file_count(1245), "1245 files");
/// ```
pub fn format_file_count(count: u64) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", count)
    }
}

/// Format the lightbox position as "i / n" (1-based)
pub fn format_position(index: usize, len: usize) -> String {
    format!("{} / {}", index + 1, len)
}

/// Cut a string to a display width, ending in "…" when shortened
///
/// Width is measured in terminal cells, so wide characters count double.
///
/// # Examples
/// ```
/// use homefiles::logic::formatting::truncate_to_width;
///
/// assert_eq!(truncate_to_width("IMG_2024_001.jpg", 20), "IMG_2024_001.jpg");
/// assert_eq!(truncate_to_width("IMG_2024_001.jpg", 8), "IMG_202…");
/// assert_eq!(truncate_to_width("anything", 0), "");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
