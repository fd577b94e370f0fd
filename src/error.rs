//! Error types and Result aliases for SecLearn

use std::fmt;
use std::path::PathBuf;

/// Result type alias for SecLearn operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for SecLearn
#[derive(Debug)]
pub enum Error {
    // === Content errors ===
    /// Requested module identifier does not exist in the course
    ModuleNotFound {
        module_id: String,
    },

    /// Lesson index is outside the module's lesson bounds
    LessonIndexOutOfRange {
        module_id: String,
        index: usize,
        lesson_count: usize,
    },

    /// Course data failed a structural check (duplicate ids, empty modules)
    InvalidCourse {
        reason: String,
    },

    // === Chat errors ===
    /// The completion service request failed
    ChatRequestFailed {
        reason: String,
    },

    /// The completion service returned a reply with no usable content
    EmptyCompletion,

    /// No API key was available for the completion backend
    ChatBackendMissing,

    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Configuration file not found
    ConfigNotFound,

    /// Configuration validation failed
    ConfigValidationFailed {
        field: String,
        reason: String,
    },

    /// Failed to serialize configuration
    ConfigSerializationFailed {
        format: String,
        reason: String,
    },

    /// Failed to parse configuration
    ConfigParseFailed {
        format: String,
        reason: String,
    },

    /// Theme not found
    ThemeNotFound {
        theme_name: String,
    },

    /// A progress seed entry could not be parsed or points outside the course
    InvalidSeedEntry {
        entry: String,
        reason: String,
    },

    // === I/O and serialization errors ===
    /// I/O errors
    Io(std::io::Error),

    /// Serialization errors
    Serde(serde_json::Error),

    /// TOML parsing errors
    Toml(toml::de::Error),

    /// HTTP transport errors
    Http(reqwest::Error),

    /// Regex compilation errors
    Regex(regex::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors (for cases not yet categorized)
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Content errors
            Error::ModuleNotFound { module_id } => {
                write!(f, "Module '{}' not found in course", module_id)
            }
            Error::LessonIndexOutOfRange {
                module_id,
                index,
                lesson_count,
            } => {
                write!(
                    f,
                    "Lesson index {} out of range for module '{}' ({} lessons)",
                    index, module_id, lesson_count
                )
            }
            Error::InvalidCourse { reason } => {
                write!(f, "Invalid course data: {}", reason)
            }

            // Chat errors
            Error::ChatRequestFailed { reason } => {
                write!(f, "Completion request failed: {}", reason)
            }
            Error::EmptyCompletion => {
                write!(f, "Completion service returned an empty reply")
            }
            Error::ChatBackendMissing => {
                write!(f, "No API key configured for the study assistant")
            }

            // Configuration errors
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigNotFound => {
                write!(f, "Configuration file not found")
            }
            Error::ConfigValidationFailed { field, reason } => {
                write!(f, "Configuration validation failed for '{}': {}", field, reason)
            }
            Error::ConfigSerializationFailed { format, reason } => {
                write!(f, "Failed to serialize config as {}: {}", format, reason)
            }
            Error::ConfigParseFailed { format, reason } => {
                write!(f, "Failed to parse {} config: {}", format, reason)
            }
            Error::ThemeNotFound { theme_name } => {
                write!(f, "Theme '{}' not found", theme_name)
            }
            Error::InvalidSeedEntry { entry, reason } => {
                write!(f, "Invalid progress seed entry '{}': {}", entry, reason)
            }

            // I/O and serialization errors
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Serialization error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Regex(err) => write!(f, "Regex compilation error: {}", err),

            // Generic fallback
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Regex(err)
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
