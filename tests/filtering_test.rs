//! Search and year filtering through the reducer
//!
//! The visible sequence is what the cursor, the lightbox and the delete
//! action all index into, so these tests drive it the way a user would:
//! open a category, type, pick chips.

use homefiles::catalog::Catalog;
use homefiles::messages::Msg;
use homefiles::model::Model;
use homefiles::update::update;

fn open(category: &str) -> Model {
    let mut model = Model::new(Catalog::builtin(), false);
    update(&mut model, Msg::OpenCategory(category.to_string()));
    model
}

fn type_query(model: &mut Model, query: &str) {
    update(model, Msg::StartSearch);
    for c in query.chars() {
        update(model, Msg::SearchInput(c));
    }
}

fn visible_names(model: &Model) -> Vec<String> {
    model.visible_files().iter().map(|f| f.name.clone()).collect()
}

#[test]
fn test_search_2024_in_photos() {
    let mut model = open("photos");
    type_query(&mut model, "2024");
    assert_eq!(
        visible_names(&model),
        vec!["IMG_2024_001.jpg", "IMG_2024_002.jpg"]
    );
}

#[test]
fn test_search_matches_exactly_the_names_containing_the_query() {
    let catalog = Catalog::builtin();
    let queries = ["", "img", "IMG", "2023", ".jpg", "_0", "zzz", "4_00"];

    for (category, files) in &catalog.files {
        for query in queries {
            let mut model = open(category);
            type_query(&mut model, query);

            let expected: Vec<String> = files
                .iter()
                .filter(|f| f.name.to_lowercase().contains(&query.to_lowercase()))
                .map(|f| f.name.clone())
                .collect();
            assert_eq!(
                visible_names(&model),
                expected,
                "category {} query {:?}",
                category,
                query
            );
        }
    }
}

#[test]
fn test_search_is_case_insensitive() {
    let mut model = open("documents");
    type_query(&mut model, "REPORT");
    assert_eq!(visible_names(&model), vec!["Report_2024.pdf"]);
}

#[test]
fn test_backspace_widens_the_result() {
    let mut model = open("photos");
    type_query(&mut model, "2024_002");
    assert_eq!(visible_names(&model).len(), 1);

    for _ in 0..4 {
        update(&mut model, Msg::SearchBackspace);
    }
    assert_eq!(visible_names(&model).len(), 2);
}

#[test]
fn test_year_filter_keeps_only_that_year() {
    let mut model = open("photos");
    update(&mut model, Msg::SelectYear(Some("2023".to_string())));

    let visible = model.visible_files();
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|f| f.year.as_deref() == Some("2023")));
}

#[test]
fn test_year_chips_in_first_appearance_order() {
    let model = open("photos");
    assert_eq!(model.available_years(), vec!["2024", "2023", "2022"]);
}

#[test]
fn test_year_chips_only_for_photos() {
    let model = open("videos");
    assert!(model.available_years().is_empty());
}

#[test]
fn test_cycle_year_wraps_back_to_all() {
    let mut model = open("photos");
    for expected in [Some("2024"), Some("2023"), Some("2022"), None] {
        update(&mut model, Msg::CycleYear { forward: true });
        assert_eq!(model.navigation.selected_year.as_deref(), expected);
    }
}

#[test]
fn test_search_and_year_combine() {
    let mut model = open("photos");
    update(&mut model, Msg::SelectYear(Some("2024".to_string())));
    type_query(&mut model, "002");
    assert_eq!(visible_names(&model), vec!["IMG_2024_002.jpg"]);
}

#[test]
fn test_filters_reset_when_leaving_category() {
    let mut model = open("photos");
    update(&mut model, Msg::SelectYear(Some("2022".to_string())));
    type_query(&mut model, "img");
    update(&mut model, Msg::ToggleViewMode);

    update(&mut model, Msg::Back);
    update(&mut model, Msg::OpenCategory("photos".to_string()));

    assert!(model.navigation.search_query.is_empty());
    assert_eq!(model.navigation.selected_year, None);
    assert_eq!(model.navigation.view_mode, homefiles::ViewMode::List);
    assert_eq!(model.visible_files().len(), 5);
}

#[test]
fn test_cursor_returns_to_first_match_after_filtering() {
    let mut model = open("photos");
    update(&mut model, Msg::JumpLast);
    assert_eq!(model.navigation.file_cursor, Some(4));

    type_query(&mut model, "2024");
    assert_eq!(model.navigation.file_cursor, Some(0));

    type_query(&mut model, "nothing");
    assert_eq!(model.navigation.file_cursor, None);
}
