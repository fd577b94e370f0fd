//! Configuration management for SecLearn
//!
//! TOML-based configuration with loading/saving, validation, theme
//! management, and a runtime wrapper that the application consumes.

pub mod loader;
pub mod theme;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::theme::ThemeManager;
use crate::error::{Error, Result};
use crate::models::LessonRef;
use crate::nav::AdvancePolicy;

pub use loader::ConfigLoader;

/// Main configuration structure for SecLearn
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// UI configuration
    pub ui: UiConfig,

    /// Study assistant configuration
    pub chat: ChatConfig,

    /// Progress tracking configuration
    pub progress: ProgressConfig,
}

/// UI-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Base font size in points
    pub font_size: u32,

    /// UI theme name
    pub theme_name: String,

    /// Sidebar width in logical pixels
    pub sidebar_width: f32,

    /// Chat panel width in logical pixels
    pub chat_panel_width: f32,

    /// Pacing of the assistant typewriter reveal, per character
    pub reveal_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_size: 14,
            theme_name: "dark".to_string(),
            sidebar_width: 280.0,
            chat_panel_width: 320.0,
            reveal_interval_ms: 12,
        }
    }
}

/// Completion-service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Chat-completions endpoint URL
    pub endpoint: String,

    /// Model name sent with each request
    pub model: String,

    /// Environment variable holding the bearer token
    pub api_key_env: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "SECLEARN_API_KEY".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Progress tracking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// What `advance()` does at the last lesson of a module
    pub advance_policy: AdvancePolicy,

    /// Lessons pre-marked complete on startup, as "module-id:index"
    /// entries. Defaults to empty; progress is otherwise session-local.
    pub seed: Vec<String>,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            advance_policy: AdvancePolicy::WithinModule,
            seed: Vec::new(),
        }
    }
}

impl ProgressConfig {
    /// Parse the seed entries into lesson references
    pub fn seed_refs(&self) -> Result<Vec<LessonRef>> {
        self.seed.iter().map(|s| s.parse()).collect()
    }
}

impl Config {
    /// Validate field values, reporting the first offending field
    pub fn validate(&self) -> Result<()> {
        if self.ui.font_size < 6 || self.ui.font_size > 72 {
            return Err(Error::ConfigValidationFailed {
                field: "ui.font_size".to_string(),
                reason: "must be between 6 and 72".to_string(),
            });
        }

        if !(160.0..=600.0).contains(&self.ui.sidebar_width) {
            return Err(Error::ConfigValidationFailed {
                field: "ui.sidebar_width".to_string(),
                reason: "must be between 160 and 600".to_string(),
            });
        }

        if !(200.0..=700.0).contains(&self.ui.chat_panel_width) {
            return Err(Error::ConfigValidationFailed {
                field: "ui.chat_panel_width".to_string(),
                reason: "must be between 200 and 700".to_string(),
            });
        }

        if self.ui.reveal_interval_ms > 1000 {
            return Err(Error::ConfigValidationFailed {
                field: "ui.reveal_interval_ms".to_string(),
                reason: "must not exceed 1000".to_string(),
            });
        }

        if self.ui.theme_name.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "ui.theme_name".to_string(),
                reason: "theme name cannot be empty".to_string(),
            });
        }

        if !self.chat.endpoint.starts_with("http://") && !self.chat.endpoint.starts_with("https://")
        {
            return Err(Error::ConfigValidationFailed {
                field: "chat.endpoint".to_string(),
                reason: "must be an http(s) URL".to_string(),
            });
        }

        if self.chat.model.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "chat.model".to_string(),
                reason: "model name cannot be empty".to_string(),
            });
        }

        if self.chat.request_timeout_secs == 0 || self.chat.request_timeout_secs > 300 {
            return Err(Error::ConfigValidationFailed {
                field: "chat.request_timeout_secs".to_string(),
                reason: "must be between 1 and 300".to_string(),
            });
        }

        // Seed entries must at least parse; bounds are checked against
        // the course at startup
        self.progress.seed_refs()?;

        Ok(())
    }
}

/// Configuration plus the managers derived from it
pub struct RuntimeConfig {
    config: Config,
    theme_manager: ThemeManager,
}

impl RuntimeConfig {
    /// Load from the default search locations, falling back to defaults
    pub fn new() -> Result<Self> {
        let config = match ConfigLoader::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load configuration: {}. Using defaults", e);
                Config::default()
            }
        };
        Self::from_config(config)
    }

    /// Load from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let config = ConfigLoader::load_file(path)?;
        Self::from_config(config)
    }

    /// Wrap an already-built configuration
    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;

        let mut theme_manager = ThemeManager::new();
        if let Err(e) = theme_manager.set_theme(&config.ui.theme_name) {
            warn!(
                "theme '{}' not available, using default: {}",
                config.ui.theme_name, e
            );
        }

        Ok(Self {
            config,
            theme_manager,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn theme_manager_mut(&mut self) -> &mut ThemeManager {
        &mut self.theme_manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_font_size() {
        let mut config = Config::default();
        config.ui.font_size = 0;
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigValidationFailed { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_bad_endpoint() {
        let mut config = Config::default();
        config.chat.endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unparsable_seed() {
        let mut config = Config::default();
        config.progress.seed = vec!["not-a-ref".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seed_refs_parse() {
        let mut config = Config::default();
        config.progress.seed = vec!["intro-fundamentals:0".to_string(), "module-2:3".to_string()];
        let refs = config.progress.seed_refs().unwrap();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[1], LessonRef::new("module-2", 3));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[ui]\nfont_size = 16\n").unwrap();
        assert_eq!(config.ui.font_size, 16);
        assert_eq!(config.ui.theme_name, "dark");
        assert_eq!(config.chat.model, "gpt-4o-mini");
        assert!(config.progress.seed.is_empty());
    }

    #[test]
    fn test_advance_policy_from_toml() {
        let config: Config =
            toml::from_str("[progress]\nadvance_policy = \"cross-module\"\n").unwrap();
        assert_eq!(config.progress.advance_policy, AdvancePolicy::CrossModule);
    }
}
