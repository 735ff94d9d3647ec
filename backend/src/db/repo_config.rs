//! Dashboard configuration file support.
//!
//! This module reads the dashboard configuration from a TOML file. Every
//! field has a default, so a missing file or a partial file is valid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::repository::{ErrorContext, RepositoryError, RepositoryResult};
use crate::models::Category;
use crate::services::RenderOptions;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "YTDASH_CONFIG";

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub datasets: DatasetSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

/// Location of the three category CSV files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_gaming")]
    pub gaming: String,
    #[serde(default = "default_movies")]
    pub movies: String,
    #[serde(default = "default_music")]
    pub music: String,
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Render tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
    #[serde(default = "default_max_top_n")]
    pub max_top_n: usize,
    #[serde(default = "default_top_videos")]
    pub top_videos: usize,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_gaming() -> String {
    "gaming.csv".to_string()
}

fn default_movies() -> String {
    "movies.csv".to_string()
}

fn default_music() -> String {
    "music.csv".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_top_n() -> usize {
    5
}

fn default_max_top_n() -> usize {
    20
}

fn default_top_videos() -> usize {
    10
}

fn default_preview_rows() -> usize {
    5
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            gaming: default_gaming(),
            movies: default_movies(),
            music: default_music(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
            max_top_n: default_max_top_n(),
            top_videos: default_top_videos(),
            preview_rows: default_preview_rows(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(DashboardConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let context = || ErrorContext::new("read_config").with_entity_id(path.display());

        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to read config file: {}", e),
                context(),
            )
        })?;

        Self::from_toml_str(&content).map_err(|e| e.with_operation("read_config"))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> RepositoryResult<Self> {
        let config: DashboardConfig = toml::from_str(content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(Some(DashboardConfig))` if found and parsed successfully
    /// * `Ok(None)` if no config file exists
    /// * `Err(RepositoryError)` on a parse error
    pub fn from_default_location() -> RepositoryResult<Option<Self>> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths.iter() {
            if path.exists() {
                log::info!("Using configuration file {}", path.display());
                return Self::from_file(path).map(Some);
            }
        }

        Ok(None)
    }

    /// Resolve the configuration for a process.
    ///
    /// `YTDASH_CONFIG` names an explicit file; otherwise the default locations
    /// are searched and built-in defaults apply when nothing is found.
    /// `HOST`, `PORT` and `DATA_DIR` override the file afterwards.
    pub fn load() -> RepositoryResult<Self> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_default_location()?.unwrap_or_default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT` and `DATA_DIR` from the environment.
    pub fn apply_env_overrides(&mut self) -> RepositoryResult<()> {
        self.apply_overrides(
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
            std::env::var("DATA_DIR").ok(),
        )
    }

    fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<String>,
        data_dir: Option<String>,
    ) -> RepositoryResult<()> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port.parse().map_err(|_| {
                RepositoryError::configuration_with_context(
                    format!("Invalid PORT value: {}", port),
                    ErrorContext::new("apply_env_overrides").with_entity("server"),
                )
            })?;
        }
        if let Some(dir) = data_dir {
            self.datasets.data_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    fn validate(&self) -> RepositoryResult<()> {
        let d = &self.dashboard;
        if d.max_top_n == 0 {
            return Err(RepositoryError::configuration(
                "dashboard.max_top_n must be at least 1",
            ));
        }
        if d.default_top_n == 0 || d.default_top_n > d.max_top_n {
            return Err(RepositoryError::configuration(format!(
                "dashboard.default_top_n must be within 1..={}",
                d.max_top_n
            )));
        }
        Ok(())
    }

    /// Full path of a category's CSV file.
    pub fn dataset_path(&self, category: Category) -> PathBuf {
        let file = match category {
            Category::Gaming => &self.datasets.gaming,
            Category::Movies => &self.datasets.movies,
            Category::Music => &self.datasets.music,
        };
        self.datasets.data_dir.join(file)
    }

    /// Render tunables with the configured defaults.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            views_top: self.dashboard.default_top_n,
            counts_top: self.dashboard.default_top_n,
            max_top_n: self.dashboard.max_top_n,
            top_videos: self.dashboard.top_videos,
        }
    }

    /// `host:port` bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
