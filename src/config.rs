//! Configuration management for lifeline using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::llm::LlmConfig;
use crate::repository::AsyncSqlitePool;

/// Default database filename inside the data directory.
pub const DEFAULT_DATABASE_FILENAME: &str = "lifeline.db";

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base data directory.
    pub data_dir: PathBuf,
    /// Database filename.
    pub database_filename: String,
    /// Advisory LLM settings.
    pub llm: LlmConfig,
}

impl Default for Settings {
    fn default() -> Self {
        // Local data dir -> current dir
        let data_dir = dirs::data_local_dir()
            .map(|dir| dir.join("lifeline"))
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            data_dir,
            database_filename: DEFAULT_DATABASE_FILENAME.to_string(),
            llm: LlmConfig::default(),
        }
    }
}

impl Settings {
    /// Create settings with a custom data directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Default::default()
        }
    }

    /// Full path of the SQLite database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_filename)
    }

    /// Connection factory for the configured database.
    pub fn pool(&self) -> AsyncSqlitePool {
        AsyncSqlitePool::from_path(&self.database_path())
    }
}

/// File-backed configuration (`lifeline.toml`, `lifeline.json`, `lifeline.yaml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Data directory path (relative paths resolve against the config file).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    /// Database filename.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Advisory LLM configuration.
    #[serde(default, skip_serializing_if = "LlmConfig::is_default")]
    pub llm: LlmConfig,
    /// Where this config was loaded from.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Discover and load the config file, falling back to defaults.
    pub async fn load() -> Self {
        // Use prefer for file discovery, then parse with serde
        match prefer::load("lifeline").await {
            Ok(pref_config) => match pref_config.source_path() {
                Some(path) => match Self::load_from_path(path).await {
                    Ok(config) => config,
                    Err(e) => {
                        warn!("Ignoring config file {}: {}", path.display(), e);
                        Self::default()
                    }
                },
                None => Self::default(),
            },
            Err(_) => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

        let mut config: Config = match ext {
            "json" => serde_json::from_str(&contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => toml::from_str(&contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
        };

        config.source_path = Some(path.to_path_buf());
        // Environment variables override file values
        config.llm = config.llm.with_env_overrides();
        Ok(config)
    }

    /// Directory of the config file, if one was loaded.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref data_dir) = self.data_dir {
            settings.data_dir = self.resolve_path(data_dir, base_dir);
        }
        if let Some(ref database) = self.database {
            settings.database_filename = database.clone();
        }
        settings.llm = self.llm.clone();
    }
}

/// Load settings from the discovered config file, then apply a CLI data dir override.
pub async fn load_settings(data_dir_override: Option<PathBuf>) -> Settings {
    let config = Config::load().await;
    let mut settings = Settings::default();

    let base_dir = config
        .base_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    config.apply_to_settings(&mut settings, &base_dir);

    if let Some(data_dir) = data_dir_override {
        settings.data_dir = data_dir;
    }
    settings
}
