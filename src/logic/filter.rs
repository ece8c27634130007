//! Filter Logic
//!
//! Pure functions deciding which files of a category are visible and which
//! year chips a category offers.

use crate::model::FileItem;

/// The only category whose view offers year chips
pub const YEAR_FILTER_CATEGORY: &str = "photos";

/// Case-insensitive substring match of a query against a file name
///
/// # Examples
/// ```
/// use homefiles::logic::filter::search_matches;
///
/// assert!(search_matches("", "any-file.txt"));
/// assert!(search_matches("2024", "IMG_2024_001.jpg"));
/// assert!(search_matches("img_", "IMG_2024_001.jpg"));
/// assert!(!search_matches("*.jpg", "IMG_2024_001.jpg"));
/// ```
pub fn search_matches(query: &str, name: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// A file passes the year filter when no year is selected or its year equals it
pub fn year_matches(selected_year: Option<&str>, file_year: Option<&str>) -> bool {
    match selected_year {
        None => true,
        Some(year) => file_year == Some(year),
    }
}

/// Files passing both filters, in catalog order
pub fn visible_files<'a>(
    files: &'a [FileItem],
    query: &str,
    selected_year: Option<&str>,
) -> Vec<&'a FileItem> {
    files
        .iter()
        .filter(|file| {
            search_matches(query, &file.name) && year_matches(selected_year, file.year.as_deref())
        })
        .collect()
}

/// Whether a category's view offers year chips
pub fn supports_year_filter(category_id: &str) -> bool {
    category_id == YEAR_FILTER_CATEGORY
}

/// Distinct years present among the files, in first-appearance order
pub fn distinct_years(files: &[FileItem]) -> Vec<String> {
    let mut years: Vec<String> = Vec::new();
    for year in files.iter().filter_map(|f| f.year.as_ref()) {
        if !years.contains(year) {
            years.push(year.clone());
        }
    }
    years
}

/// Year chips for a category (empty for categories without year filtering)
pub fn years_for_category(category_id: &str, files: &[FileItem]) -> Vec<String> {
    if supports_year_filter(category_id) {
        distinct_years(files)
    } else {
        Vec::new()
    }
}
