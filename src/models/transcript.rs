//! Terminal Transcript Model
//!
//! Display lines accumulated by the practice terminal. Each line carries
//! a kind so the view can style prompts, output, and banner text
//! differently without re-parsing the text.

use serde::{Deserialize, Serialize};

/// Kind of a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LineKind {
    /// Echo of a submitted command, rendered with the prompt prefix
    Command,
    /// Canned command output
    #[default]
    Output,
    /// Guidance for unrecognized input
    Error,
    /// Fixed banner text shown on start and after `clear`
    Banner,
    /// Blank separator between command blocks
    Blank,
}

/// One display line in the terminal transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptLine {
    /// Visible text, prompt prefix included for command echoes
    pub text: String,

    /// Styling category
    pub kind: LineKind,
}

impl TranscriptLine {
    /// Echoed command line, `"$ "` prefix included
    pub fn command(input: &str) -> Self {
        Self {
            text: format!("$ {}", input),
            kind: LineKind::Command,
        }
    }

    /// Canned output line
    pub fn output(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Output,
        }
    }

    /// "command not found" guidance line
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Error,
        }
    }

    /// Banner line
    pub fn banner(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Banner,
        }
    }

    /// Blank separator
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            kind: LineKind::Blank,
        }
    }
}
