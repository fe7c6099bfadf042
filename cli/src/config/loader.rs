//! CLI configuration loader for pagestack
//!
//! Implements single-source priority loading:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./pagestack.json or ./.pagestack/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/pagestack/config.json or ~/.config/pagestack/config.json
//!
//! Parameter storage lives in --storage, or in the user's data directory.

use anyhow::{anyhow, Context, Result};
use pagestack_core::error::ConfigError;
use pagestack_core::RouterConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default manifest file name in the working directory
const MANIFEST_FILE_NAME: &str = "pagestack.json";

/// Default storage file name
const STORAGE_FILE_NAME: &str = "storage.json";

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Override storage file path
    storage_override: Option<PathBuf>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            storage_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(expand_path(&path));
        self
    }

    /// Set storage file override
    pub fn with_storage_override(mut self, path: PathBuf) -> Self {
        self.storage_override = Some(expand_path(&path));
        self
    }

    /// Load and validate the router manifest
    pub async fn load(&self) -> Result<RouterConfig> {
        if let Some(override_path) = &self.config_override {
            return self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            });
        }

        self.search_and_load().await
    }

    /// Path of the parameter storage file
    pub fn storage_path(&self) -> PathBuf {
        if let Some(path) = &self.storage_override {
            return path.clone();
        }

        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("pagestack");
        path.push(STORAGE_FILE_NAME);
        path
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RouterConfig> {
        let cwd = std::env::current_dir()?;
        let mut candidates = vec![
            cwd.join(MANIFEST_FILE_NAME),
            cwd.join(".pagestack").join("config.json"),
        ];
        if let Some(config_dir) = self.get_xdg_config_dir() {
            candidates.push(config_dir.join("pagestack").join("config.json"));
        }

        for candidate in candidates {
            if candidate.is_file() {
                debug!("Using config file: {}", candidate.display());
                return self.load_file(&candidate).await;
            }
        }

        Err(ConfigError::NoConfigFound).context(format!(
            "Create a {} file or pass --config",
            MANIFEST_FILE_NAME
        ))
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RouterConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            let config_file = path.join(MANIFEST_FILE_NAME);
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No {} found in directory: {}",
                    MANIFEST_FILE_NAME,
                    path.display()
                ))
            }
        } else {
            Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into())
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RouterConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        RouterConfig::from_json_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get XDG config directory
    fn get_xdg_config_dir(&self) -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            Some(PathBuf::from(xdg_config))
        } else {
            dirs::home_dir().map(|home| home.join(".config"))
        }
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand `~` and environment variables in a user-supplied path
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"{
        "pages": [
            { "name": "index", "url": "pages/index/index" },
            { "name": "login", "url": "pages/login/login" }
        ],
        "tabBar": ["index"]
    }"#;

    #[tokio::test]
    async fn test_load_from_file_override() {
        let temp_dir = tempdir().unwrap();
        let manifest = temp_dir.path().join("app.json");
        std::fs::write(&manifest, MANIFEST).unwrap();

        let config = CliConfigLoader::new()
            .with_config_override(manifest)
            .load()
            .await
            .unwrap();
        assert_eq!(config.tab_bar, vec!["index"]);
    }

    #[tokio::test]
    async fn test_load_from_directory_override() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join(MANIFEST_FILE_NAME), MANIFEST).unwrap();

        let config = CliConfigLoader::new()
            .with_config_override(temp_dir.path().to_path_buf())
            .load()
            .await
            .unwrap();
        assert_eq!(config.pages.map(|pages| pages.len()), Some(2));
    }

    #[tokio::test]
    async fn test_missing_override_fails() {
        let temp_dir = tempdir().unwrap();
        let result = CliConfigLoader::new()
            .with_config_override(temp_dir.path().join("missing.json"))
            .load()
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_manifest_fails() {
        let temp_dir = tempdir().unwrap();
        let manifest = temp_dir.path().join("app.json");
        std::fs::write(&manifest, r#"{"pages": [], "tabBar": ["ghost"]}"#).unwrap();

        let error = CliConfigLoader::new()
            .with_config_override(manifest)
            .load()
            .await
            .unwrap_err();
        assert!(format!("{:#}", error).contains("tabBar"));
    }

    #[test]
    fn test_storage_override_wins() {
        let loader = CliConfigLoader::new().with_storage_override(PathBuf::from("/tmp/s.json"));
        assert_eq!(loader.storage_path(), PathBuf::from("/tmp/s.json"));
    }
}
