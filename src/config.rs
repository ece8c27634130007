use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::logic::ui::DEFAULT_TOAST_MS;
use crate::services::uploads::DEFAULT_UPLOAD_DELAY_MS;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    /// How long an upload placeholder stays visible
    #[serde(default = "default_upload_delay_ms")]
    pub upload_delay_ms: u64,
    /// Catalog file replacing the built-in categories and files
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
}

fn default_icon_mode() -> String {
    "emoji".to_string()
}

fn default_upload_delay_ms() -> u64 {
    DEFAULT_UPLOAD_DELAY_MS
}

fn default_toast_ms() -> u64 {
    DEFAULT_TOAST_MS as u64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vim_mode: false,
            icon_mode: default_icon_mode(),
            upload_delay_ms: default_upload_delay_ms(),
            catalog_path: None,
            toast_ms: default_toast_ms(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty file is a valid config with every field defaulted
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_yaml_str("").unwrap();
        assert!(!config.vim_mode);
        assert_eq!(config.icon_mode, "emoji");
        assert_eq!(config.upload_delay_ms, 2000);
        assert_eq!(config.toast_ms, 1500);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_yaml_str("vim_mode: true\nupload_delay_ms: 500\n").unwrap();
        assert!(config.vim_mode);
        assert_eq!(config.upload_delay_ms, 500);
        assert_eq!(config.icon_mode, "emoji");
    }

    #[test]
    fn test_catalog_path() {
        let config = Config::from_yaml_str("catalog_path: /srv/catalog.yaml").unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/catalog.yaml")));
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(Config::from_yaml_str("upload_delay_ms: soon").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Config::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
