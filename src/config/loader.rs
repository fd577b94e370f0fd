//! Configuration File Loading
//!
//! Finds and loads configuration files from the usual locations with
//! format detection and fallback to defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{Error, Result};

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files, in priority order
    search_paths: Vec<PathBuf>,
    /// Supported configuration file formats
    supported_formats: Vec<ConfigFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            search_paths: Self::get_search_paths(),
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
        }
    }

    /// Load configuration from the first file found in the search paths
    ///
    /// Returns defaults when no file exists; a file that exists but does
    /// not parse is skipped with a warning so one broken location cannot
    /// take the application down.
    pub fn load() -> Result<Config> {
        let loader = Self::new();
        if let Some((path, config)) = loader.find_and_load_config()? {
            info!("configuration loaded from {}", path.display());
            return Ok(config);
        }
        debug!("no configuration file found, using defaults");
        Ok(Config::default())
    }

    /// Load a specific configuration file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: "file does not exist".to_string(),
            });
        }
        let loader = Self::new();
        loader.load_config_file(path, Self::format_for(path))
    }

    /// Save configuration to a specific path, format from the extension
    pub fn save_to_path(&self, config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = match Self::format_for(path) {
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| {
                Error::ConfigSerializationFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                }
            })?,
            ConfigFormat::Toml => {
                toml::to_string_pretty(config).map_err(|e| Error::ConfigSerializationFailed {
                    format: "TOML".to_string(),
                    reason: e.to_string(),
                })?
            }
        };

        fs::write(path, content)?;
        Ok(())
    }

    fn format_for(path: &Path) -> ConfigFormat {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }

    /// Find and load configuration from search paths
    fn find_and_load_config(&self) -> Result<Option<(PathBuf, Config)>> {
        for base in &self.search_paths {
            for format in &self.supported_formats {
                let config_path = self.config_path_for_format(base, *format);

                if config_path.exists() {
                    match self.load_config_file(&config_path, *format) {
                        Ok(config) => return Ok(Some((config_path, config))),
                        Err(e) => {
                            warn!(
                                "failed to load config from {}: {}",
                                config_path.display(),
                                e
                            );
                            continue;
                        }
                    }
                }
            }
        }

        Ok(None)
    }

    /// Load a specific configuration file in a known format
    fn load_config_file(&self, path: &Path, format: ConfigFormat) -> Result<Config> {
        let content = fs::read_to_string(path)?;

        match format {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                format: "TOML".to_string(),
                reason: e.to_string(),
            }),
            ConfigFormat::Json => {
                serde_json::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// File path for a base stem and format
    fn config_path_for_format(&self, base_path: &Path, format: ConfigFormat) -> PathBuf {
        let extension = match format {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        };
        base_path.join("config").with_extension(extension)
    }

    /// Default search paths for configuration files
    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("seclearn"));
        }

        if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("seclearn"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".seclearn"));
            paths.push(home.join(".config").join("seclearn"));
        }

        if let Ok(cwd) = env::current_dir() {
            paths.push(cwd.join(".seclearn"));
        }

        paths
    }

    /// List all search paths
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Clear all search paths and use a single path
    pub fn set_search_path(&mut self, path: PathBuf) {
        self.search_paths = vec![path];
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_loader_creation() {
        let loader = ConfigLoader::new();
        assert!(!loader.search_paths.is_empty());
        assert!(!loader.supported_formats.is_empty());
    }

    #[test]
    fn test_search_paths_mention_app_dir() {
        let paths = ConfigLoader::get_search_paths();
        assert!(paths
            .iter()
            .any(|p| p.to_string_lossy().contains("seclearn")));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = ConfigLoader::load_file(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(Error::ConfigLoadFailed { .. })));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let loader = ConfigLoader::new();
        let mut config = Config::default();
        config.ui.font_size = 18;

        loader.save_to_path(&config, &config_path).unwrap();
        assert!(config_path.exists());

        let loaded = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(loaded.ui.font_size, 18);
    }

    #[test]
    fn test_json_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let loader = ConfigLoader::new();
        let mut config = Config::default();
        config.chat.model = "gpt-4o".to_string();

        loader.save_to_path(&config, &config_path).unwrap();
        let loaded = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(loaded.chat.model, "gpt-4o");
    }

    #[test]
    fn test_malformed_file_is_skipped_during_search() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("config.toml"), "not [valid toml").unwrap();

        let mut loader = ConfigLoader::new();
        loader.set_search_path(temp_dir.path().to_path_buf());

        let found = loader.find_and_load_config().unwrap();
        assert!(found.is_none());
    }
}
