//! Configuration management for pagekit
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/pagekit/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::paging::PagingOptions;

/// Default number of demo records
pub const DEFAULT_DATASET_SIZE: usize = 1000;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeName,
    pub auto_load: bool,
    pub dataset_size: usize,
    pub paging: PagingOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Gruvbox,
            auto_load: false,
            dataset_size: DEFAULT_DATASET_SIZE,
            paging: PagingOptions {
                pages_to_show: Some(5),
                ..PagingOptions::default()
            },
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("pagekit");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load config from an explicit path, creating it with defaults if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            info!(path = %path.display(), "wrote default config");
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Parse and validate config text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid TOML")?;
        config
            .paging
            .validate()
            .context("Invalid [paging] section")?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Cycle the default page size through common values
    pub fn cycle_items_per_page(&mut self) {
        const SIZES: &[usize] = &[5, 10, 13, 20, 50];
        let current = self.paging.items_per_page;
        self.paging.items_per_page = SIZES
            .iter()
            .copied()
            .find(|size| *size > current)
            .unwrap_or(SIZES[0]);
    }

    /// Cycle the page-number window size (unbounded included)
    pub fn cycle_pages_to_show(&mut self) {
        self.paging.pages_to_show = match self.paging.pages_to_show {
            None => Some(3),
            Some(n) if n < 3 => Some(3),
            Some(3) => Some(5),
            Some(5) => Some(7),
            Some(_) => None,
        };
    }
}

/// Available theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Gruvbox,
    Nord,
    Transparent,
}

impl ThemeName {
    pub fn all() -> &'static [ThemeName] {
        &[ThemeName::Gruvbox, ThemeName::Nord, ThemeName::Transparent]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Gruvbox => "Gruvbox",
            ThemeName::Nord => "Nord",
            ThemeName::Transparent => "Transparent",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeName::Gruvbox => ThemeName::Nord,
            ThemeName::Nord => ThemeName::Transparent,
            ThemeName::Transparent => ThemeName::Gruvbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeName::Gruvbox);
        assert_eq!(config.dataset_size, 1000);
        assert_eq!(config.paging.items_per_page, 10);
        assert_eq!(config.paging.pages_to_show, Some(5));
        assert!(!config.auto_load);
    }

    #[test]
    fn test_theme_cycle() {
        let theme = ThemeName::Gruvbox;
        assert_eq!(theme.next(), ThemeName::Nord);
        assert_eq!(theme.next().next(), ThemeName::Transparent);
        assert_eq!(theme.next().next().next(), ThemeName::Gruvbox);
        assert_eq!(ThemeName::all().len(), 3);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = Config::from_toml(
            r#"
theme = "nord"

[paging]
items_per_page = 13
"#,
        )
        .unwrap();
        assert_eq!(config.theme, ThemeName::Nord);
        assert_eq!(config.paging.items_per_page, 13);
        assert_eq!(config.paging.start_page, 1);
        assert_eq!(config.dataset_size, DEFAULT_DATASET_SIZE);
    }

    #[test]
    fn test_from_toml_rejects_zero_page_size() {
        let err = Config::from_toml("[paging]\nitems_per_page = 0\n").unwrap_err();
        assert!(format!("{:#}", err).contains("items per page"));
    }

    /// Temp directory removed on drop, even when an assertion fails
    struct TempDir(PathBuf);

    impl TempDir {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("{}-{}", name, std::process::id()));
            let _ = fs::remove_dir_all(&dir);
            Self(dir)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new("pagekit-config");
        let path = dir.0.join("config.toml");

        let created = Config::load_from(&path).unwrap();
        assert_eq!(created, Config::default());
        assert!(path.exists());

        let mut config = created;
        config.theme = ThemeName::Transparent;
        config.auto_load = true;
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_cycles() {
        let mut config = Config::default();
        config.cycle_items_per_page();
        assert_eq!(config.paging.items_per_page, 13);
        config.paging.items_per_page = 50;
        config.cycle_items_per_page();
        assert_eq!(config.paging.items_per_page, 5);

        config.cycle_pages_to_show();
        assert_eq!(config.paging.pages_to_show, Some(7));
        config.cycle_pages_to_show();
        assert_eq!(config.paging.pages_to_show, None);
        config.cycle_pages_to_show();
        assert_eq!(config.paging.pages_to_show, Some(3));
    }
}
