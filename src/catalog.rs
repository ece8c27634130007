//! File Catalog
//!
//! The categories and file listings shown by the application. A built-in
//! catalog mirrors the home server's demo data; a YAML catalog file can
//! replace it at startup.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::model::{Category, FileItem, Gradient};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    /// category id -> ordered files
    #[serde(default)]
    pub files: HashMap<String, Vec<FileItem>>,
}

/// A file as reported by the listing output (carries its category)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListedFile<'a> {
    #[serde(flatten)]
    pub file: &'a FileItem,
    pub category: &'a str,
}

/// Listing output: `{"files": [...], "count": n}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Listing<'a> {
    pub files: Vec<ListedFile<'a>>,
    pub count: usize,
}

fn category(id: &str, name: &str, icon: &str, count: u64, gradient: Gradient) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        count,
        gradient,
    }
}

fn file(id: &str, name: &str, size: &str, date: &str, year: Option<&str>) -> FileItem {
    FileItem {
        id: id.to_string(),
        name: name.to_string(),
        size: size.to_string(),
        date: date.to_string(),
        year: year.map(str::to_string),
        file_type: None,
        thumbnail: None,
    }
}

impl Catalog {
    /// The demo catalog served by the home server
    pub fn builtin() -> Self {
        let categories = vec![
            category("photos", "Photos", "image", 1245, Gradient::Purple),
            category("videos", "Videos", "video", 324, Gradient::Blue),
            category("documents", "Documents", "file-text", 892, Gradient::Green),
            category("movies", "Movies", "film", 156, Gradient::Red),
            category("work", "Work", "briefcase", 567, Gradient::Orange),
            category("software", "Software", "package", 89, Gradient::Pink),
            category("music", "Music", "music", 2341, Gradient::Indigo),
            category("archives", "Archives", "archive", 234, Gradient::Cyan),
        ];

        let mut files = HashMap::new();
        files.insert(
            "photos".to_string(),
            vec![
                file("1", "IMG_2024_001.jpg", "4.2 MB", "15 Oct 2024", Some("2024")),
                file("2", "IMG_2024_002.jpg", "3.8 MB", "14 Oct 2024", Some("2024")),
                file("3", "IMG_2023_156.jpg", "5.1 MB", "22 Dec 2023", Some("2023")),
                file("4", "IMG_2023_089.jpg", "4.5 MB", "10 Jun 2023", Some("2023")),
                file("5", "IMG_2022_234.jpg", "3.9 MB", "5 May 2022", Some("2022")),
            ],
        );
        files.insert(
            "videos".to_string(),
            vec![
                file("1", "video_2024_summer.mp4", "124 MB", "10 Aug 2024", None),
                file("2", "family_trip.mov", "89 MB", "5 Jul 2024", None),
            ],
        );
        files.insert(
            "documents".to_string(),
            vec![
                file("1", "Report_2024.pdf", "2.1 MB", "20 Oct 2024", None),
                file("2", "Contract.docx", "145 KB", "18 Oct 2024", None),
            ],
        );
        files.insert(
            "movies".to_string(),
            vec![file("1", "Inception.mkv", "8.5 GB", "12 Sep 2024", None)],
        );
        files.insert(
            "work".to_string(),
            vec![file("1", "Presentation.pptx", "15 MB", "18 Oct 2024", None)],
        );
        files.insert(
            "software".to_string(),
            vec![file("1", "vscode-installer.exe", "95 MB", "1 Oct 2024", None)],
        );
        files.insert(
            "music".to_string(),
            vec![file("1", "Playlist_Summer.mp3", "6.8 MB", "20 Jul 2024", None)],
        );
        files.insert(
            "archives".to_string(),
            vec![file("1", "backup_2024.zip", "1.2 GB", "1 Oct 2024", None)],
        );

        Self { categories, files }
    }

    /// Parse and validate a YAML catalog
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(yaml).context("Invalid catalog YAML")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a YAML catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        Self::from_yaml_str(&yaml)
    }

    /// Reject duplicate category ids, listings for unknown categories and
    /// duplicate file ids within one category
    pub fn validate(&self) -> Result<()> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                bail!("Duplicate category id: {}", category.id);
            }
        }

        for (category_id, files) in &self.files {
            if !category_ids.contains(category_id.as_str()) {
                bail!("Files listed for unknown category: {}", category_id);
            }
            let mut file_ids = HashSet::new();
            for file in files {
                if !file_ids.insert(file.id.as_str()) {
                    bail!("Duplicate file id {} in category {}", file.id, category_id);
                }
            }
        }

        Ok(())
    }

    /// Listing of one category with optional year and search filters
    ///
    /// Unlike the interactive view, the year filter applies to any category.
    pub fn listing<'a>(
        &'a self,
        category_id: &'a str,
        year: Option<&str>,
        search: &str,
    ) -> Listing<'a> {
        let files: Vec<ListedFile<'a>> = self
            .files
            .get(category_id)
            .map(|files| crate::logic::filter::visible_files(files, search, year))
            .unwrap_or_default()
            .into_iter()
            .map(|file| ListedFile {
                file,
                category: category_id,
            })
            .collect();

        Listing {
            count: files.len(),
            files,
        }
    }
}
