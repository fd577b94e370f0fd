//! SecLearn - A desktop course viewer for a hands-on cybersecurity curriculum
//!
//! This library provides the core functionality for SecLearn: a
//! single-window viewer that renders a built-in curriculum with lesson
//! navigation, progress tracking, a simulated practice terminal, and an
//! AI study assistant.
//!
//! ## Features
//!
//! - **Navigation tree:** Modules and lessons with expand/collapse and
//!   per-module progress bars
//! - **Progress tracking:** Session-local completion set with a
//!   configurable advance policy and optional seeding
//! - **Practice terminal:** Canned-response shell with command recall,
//!   no real execution
//! - **Study assistant:** Lesson-aware chat against an external
//!   completion service with a typewriter reveal
//! - **Themes:** Built-in dark / light / high-contrast palettes
//! - **Configuration:** TOML-based configuration files
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`content`] - The course content store and built-in catalog
//! - [`nav`] - Navigation and progress state machine
//! - [`terminal`] - Canned terminal session and command table
//! - [`chat`] - Completion-service client and typewriter reveal
//! - [`render`] - Lesson markup parsing, stripping, URL auto-linking
//! - [`config`] - Configuration loading, runtime config, themes
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### UI
//!
//! - [`ui`] - Rendering components (sidebar, views, chat panel)
//! - [`app`] - The eframe application shell
//! - [`models`] - Data structures (LessonRef, ChatMessage, TranscriptLine)
//!
//! ## Architecture
//!
//! SecLearn runs in the single-threaded `egui` event loop. The only
//! background work is the chat request loop, which runs on a tokio
//! runtime owned by the application; the UI and the loop communicate
//! via unbounded channels. All learner state is process-local and
//! discarded on exit.
//!
//! ## Safety and Reliability
//!
//! - **No panics:** Fallible operations return `Result`; content lookup
//!   misses and chat failures degrade to user-visible notices
//! - **Serialized requests:** Chat sending is disabled while a request
//!   is outstanding, so the transcript can never interleave
//! - **Graceful degradation:** Missing config files, unknown themes,
//!   and absent API keys all fall back with a logged warning

#![allow(unexpected_cfgs)]

#[macro_use]
extern crate tracing;

pub mod chat;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod nav;
pub mod render;
pub mod terminal;

// UI modules
pub mod app;
pub mod ui;

// Re-exports for core functionality
pub use config::{Config, ConfigLoader, RuntimeConfig};
pub use content::ContentStore;
pub use error::{Error, Result};
pub use nav::{AdvancePolicy, NavigationState};
pub use terminal::TerminalSession;

// Version information
/// The current version of SecLearn from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize SecLearn with default settings
///
/// Loads configuration from the default locations, falling back to
/// built-in defaults when nothing is found or a file fails to load.
///
/// # Errors
///
/// Returns an error only when a loaded configuration fails validation;
/// a missing configuration is not an error.
pub fn init() -> Result<RuntimeConfig> {
    info!("initializing {} v{}", NAME, VERSION);

    let runtime_config = RuntimeConfig::new()?;

    info!(
        "configuration ready (theme '{}')",
        runtime_config.theme_manager().active_name()
    );
    Ok(runtime_config)
}

/// Initialize SecLearn with a custom configuration file
pub fn init_with_config(config_path: &std::path::Path) -> Result<RuntimeConfig> {
    info!(
        "initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    if !config_path.exists() {
        return Err(Error::ConfigLoadFailed {
            path: config_path.to_path_buf(),
            reason: "configuration file does not exist".to_string(),
        });
    }

    RuntimeConfig::load_from_file(config_path)
}

/// Get default configuration
///
/// Returns a `Config` instance with all default values, useful for
/// testing or for writing out a starter config file.
///
/// # Examples
///
/// ```
/// use seclearn::default_config;
///
/// let config = default_config();
/// assert_eq!(config.ui.theme_name, "dark");
/// ```
pub fn default_config() -> Config {
    Config::default()
}

/// Human-readable guidance for startup errors
pub fn handle_startup_error(error: &Error) -> String {
    match error {
        Error::ConfigLoadFailed { path, reason } => {
            format!(
                "Configuration Error: Failed to load config from '{}': {}\n\nTry:\n• Check the configuration file path\n• Ensure file permissions are correct\n• Remove the file to use defaults",
                path.display(),
                reason
            )
        }
        Error::ConfigParseFailed { format, reason } => {
            format!(
                "Configuration Error: Failed to parse {} config: {}\n\nTry:\n• Check configuration file syntax\n• Remove the file to use defaults",
                format, reason
            )
        }
        Error::ConfigValidationFailed { field, reason } => {
            format!(
                "Configuration Error: Validation failed for '{}': {}\n\nTry:\n• Fix the value in the configuration file\n• Remove the field to use its default",
                field, reason
            )
        }
        Error::InvalidSeedEntry { entry, reason } => {
            format!(
                "Configuration Error: progress seed entry '{}' is invalid: {}\n\nTry:\n• Use the 'module-id:index' form\n• Check the module ids in the course",
                entry, reason
            )
        }
        _ => {
            format!(
                "Startup Error: {}\n\nPlease report this issue with debug logs enabled (RUST_LOG=debug)",
                error
            )
        }
    }
}
