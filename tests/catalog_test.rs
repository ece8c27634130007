//! Catalog files and the JSON listing

use std::io::Write;

use homefiles::catalog::Catalog;

const CATALOG: &str = r#"
categories:
  - { id: photos, name: Photos, icon: image, count: 3, gradient: purple }
  - { id: docs, name: Docs, icon: file-text, count: 1, gradient: green }
files:
  photos:
    - { id: "1", name: beach.jpg, size: 1 MB, date: 1 Jan 2024, year: "2024", type: image }
    - { id: "2", name: city.jpg, size: 2 MB, date: 1 Jan 2023, year: "2023" }
  docs:
    - { id: "1", name: notes_2024.txt, size: 1 KB, date: 2 Jan 2024, year: "2024" }
"#;

#[test]
fn test_load_catalog_file() {
    let mut file = tempfile();
    file.1.write_all(CATALOG.as_bytes()).unwrap();

    let catalog = Catalog::load(&file.0).unwrap();
    assert_eq!(catalog.categories.len(), 2);
    assert_eq!(catalog.files["photos"][0].file_type.as_deref(), Some("image"));
    std::fs::remove_file(&file.0).unwrap();
}

#[test]
fn test_category_without_files_has_empty_listing() {
    let yaml = "categories:\n  - { id: music, name: Music, icon: music, count: 9, gradient: indigo }\n";
    let catalog = Catalog::from_yaml_str(yaml).unwrap();
    assert_eq!(catalog.listing("music", None, "").count, 0);
}

#[test]
fn test_files_for_unknown_category_rejected() {
    let yaml = "categories: []\nfiles:\n  ghosts:\n    - { id: '1', name: boo, size: '0', date: never }\n";
    let err = Catalog::from_yaml_str(yaml).unwrap_err();
    assert!(format!("{:#}", err).contains("ghosts"));
}

#[test]
fn test_listing_json_shape() {
    let catalog = Catalog::from_yaml_str(CATALOG).unwrap();
    let listing = catalog.listing("photos", Some("2024"), "");
    let json = serde_json::to_value(&listing).unwrap();

    assert_eq!(json["count"], 1);
    assert_eq!(json["files"][0]["name"], "beach.jpg");
    assert_eq!(json["files"][0]["category"], "photos");
    assert_eq!(json["files"][0]["type"], "image");
}

#[test]
fn test_listing_year_applies_outside_photos() {
    let catalog = Catalog::from_yaml_str(CATALOG).unwrap();
    assert_eq!(catalog.listing("docs", Some("2024"), "").count, 1);
    assert_eq!(catalog.listing("docs", Some("2023"), "").count, 0);
}

#[test]
fn test_listing_search() {
    let catalog = Catalog::builtin();
    let listing = catalog.listing("photos", None, "2024");
    assert_eq!(listing.count, 2);
}

/// Unique temp file path plus an open handle
fn tempfile() -> (std::path::PathBuf, std::fs::File) {
    let path = std::env::temp_dir().join(format!(
        "homefiles-catalog-{}-{}.yaml",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let file = std::fs::File::create(&path).unwrap();
    (path, file)
}
