use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::repository::source::{DataSource, FileSource, HttpSource};
use crate::services::error_handling::CatalogError;

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "PERF_CATALOG_CONFIG";
/// Environment variable overriding [`CatalogConfig::data_root`].
pub const DATA_ROOT_ENV: &str = "PERF_CATALOG_DATA_ROOT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Local directory or `http(s)://` base URL holding the data files
    pub data_root: String,

    /// Path of the issue CSV, relative to `data_root`
    pub issues_file: String,

    /// Directory of example snippets, relative to `data_root`
    pub examples_dir: String,

    /// Title of the application window
    pub window_title: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_root: ".".to_string(),
            issues_file: "data/performance_issues_list_v2.csv".to_string(),
            examples_dir: "data/examples".to_string(),
            window_title: "Android Performance Issues Catalog".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from file, falling back to defaults, then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => Self::config_path()?,
        };
        let config = Self::load_from(&path)?;
        Ok(config.with_data_root_override(std::env::var(DATA_ROOT_ENV).ok()))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content).map_err(|err| CatalogError::Config {
            message: format!("{}: {}", path.display(), err.message()),
        })?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("perf-catalog").join("config.toml"))
    }

    pub fn with_data_root_override(mut self, data_root: Option<String>) -> Self {
        if let Some(root) = data_root.filter(|root| !root.trim().is_empty()) {
            self.data_root = root;
        }
        self
    }

    pub fn is_remote(&self) -> bool {
        self.data_root.starts_with("http://") || self.data_root.starts_with("https://")
    }

    /// Source matching `data_root`.
    pub fn data_source(&self) -> Box<dyn DataSource> {
        if self.is_remote() {
            Box::new(HttpSource::new(self.data_root.clone()))
        } else {
            Box::new(FileSource::new(self.data_root.clone()))
        }
    }

    /// Relative path of an example snippet.
    pub fn example_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.examples_dir.trim_end_matches('/'), file_name)
    }
}
