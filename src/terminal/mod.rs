//! Practice Terminal Session
//!
//! Gives the illusion of a command shell without executing anything.
//! A session owns the display transcript and a separate recall history
//! of submitted raw commands for arrow-key traversal. Both are
//! append-only; only the `clear` pseudo-command resets the transcript,
//! back to a fixed banner.

pub mod commands;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::TranscriptLine;
use commands::Execution;

/// Fixed banner shown on start and after `clear`
pub const BANNER: [&str; 2] = [
    "SecLearn practice terminal (simulated lab environment)",
    "Type 'help' to see the available commands.",
];

/// One simulated shell session
#[derive(Debug, Clone)]
pub struct TerminalSession {
    /// Session identifier
    pub id: String,

    /// When the session was opened
    pub started: DateTime<Utc>,

    /// Display lines in order
    transcript: Vec<TranscriptLine>,

    /// Raw submitted commands, matched or not, for up/down recall
    history: Vec<String>,

    /// Position while browsing history (None = not browsing)
    cursor: Option<usize>,

    /// In-progress input stashed when history browsing starts
    stash: String,
}

impl TerminalSession {
    /// Open a session showing the banner
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started: Utc::now(),
            transcript: Self::banner_lines(),
            history: Vec::new(),
            cursor: None,
            stash: String::new(),
        }
    }

    fn banner_lines() -> Vec<TranscriptLine> {
        let mut lines: Vec<TranscriptLine> =
            BANNER.iter().map(|l| TranscriptLine::banner(*l)).collect();
        lines.push(TranscriptLine::blank());
        lines
    }

    /// Submit one line of input
    ///
    /// Empty or whitespace-only input is a complete no-op: nothing is
    /// echoed and nothing enters the recall history. Everything else is
    /// recorded verbatim in the history, then matched against the canned
    /// table. Returns whether the input was actually submitted.
    pub fn submit(&mut self, raw: &str) -> bool {
        let input = raw.trim();
        if input.is_empty() {
            return false;
        }

        self.history.push(raw.to_string());
        self.cursor = None;
        self.stash.clear();

        match commands::execute(input) {
            Execution::Clear => {
                self.transcript = Self::banner_lines();
            }
            Execution::Output(lines) => {
                self.transcript.push(TranscriptLine::command(input));
                for line in lines {
                    self.transcript.push(TranscriptLine::output(line));
                }
                self.transcript.push(TranscriptLine::blank());
            }
            Execution::NotFound(line) => {
                self.transcript.push(TranscriptLine::command(input));
                self.transcript.push(TranscriptLine::error(line));
                self.transcript.push(TranscriptLine::blank());
            }
        }
        true
    }

    /// Step backwards through the recall history
    ///
    /// The first step stashes the in-progress input so `recall_next`
    /// can restore it after walking past the newest entry.
    pub fn recall_previous(&mut self, current: &str) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }
        match self.cursor {
            None => {
                self.stash = current.to_string();
                self.cursor = Some(self.history.len() - 1);
            }
            Some(0) => {}
            Some(i) => self.cursor = Some(i - 1),
        }
        self.cursor.map(|i| self.history[i].clone())
    }

    /// Step forwards through the recall history
    pub fn recall_next(&mut self) -> Option<String> {
        match self.cursor {
            None => None,
            Some(i) if i + 1 < self.history.len() => {
                self.cursor = Some(i + 1);
                Some(self.history[i + 1].clone())
            }
            Some(_) => {
                self.cursor = None;
                Some(std::mem::take(&mut self.stash))
            }
        }
    }

    /// Display lines in order
    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    /// Raw submitted commands in order
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Whether the transcript is just the banner
    pub fn is_pristine(&self) -> bool {
        self.transcript == Self::banner_lines()
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineKind;

    #[test]
    fn test_new_session_shows_banner() {
        let session = TerminalSession::new();
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.transcript()[0].kind, LineKind::Banner);
        assert_eq!(session.transcript()[2].kind, LineKind::Blank);
        assert!(session.is_pristine());
    }

    #[test]
    fn test_empty_input_is_a_noop() {
        let mut session = TerminalSession::new();
        assert!(!session.submit(""));
        assert!(!session.submit("   "));
        assert!(!session.submit("\t"));
        assert!(session.history().is_empty());
        assert!(session.is_pristine());
    }

    #[test]
    fn test_submit_appends_echo_output_and_separator() {
        let mut session = TerminalSession::new();
        assert!(session.submit("whoami"));

        let lines = session.transcript();
        // banner(2) + blank + echo + output + blank
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3].text, "$ whoami");
        assert_eq!(lines[3].kind, LineKind::Command);
        assert_eq!(lines[4].text, "student");
        assert_eq!(lines[5].kind, LineKind::Blank);
    }

    #[test]
    fn test_unmatched_input_still_enters_history() {
        let mut session = TerminalSession::new();
        session.submit("frobnicate --hard");

        assert_eq!(session.history(), &["frobnicate --hard".to_string()]);
        assert!(session
            .transcript()
            .iter()
            .any(|l| l.kind == LineKind::Error && l.text.contains("frobnicate --hard")));
    }

    #[test]
    fn test_clear_resets_to_banner() {
        let mut session = TerminalSession::new();
        session.submit("nmap");
        session.submit("whoami");
        assert!(!session.is_pristine());

        session.submit("clear");
        let lines = session.transcript();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, BANNER[0]);
        assert_eq!(lines[1].text, BANNER[1]);
        assert_eq!(lines[2].kind, LineKind::Blank);
        // clear itself is still recallable
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_recall_walks_history_and_restores_input() {
        let mut session = TerminalSession::new();
        session.submit("ls");
        session.submit("pwd");

        assert_eq!(session.recall_previous("draft"), Some("pwd".to_string()));
        assert_eq!(session.recall_previous("draft"), Some("ls".to_string()));
        // Pinned at the oldest entry
        assert_eq!(session.recall_previous("draft"), Some("ls".to_string()));

        assert_eq!(session.recall_next(), Some("pwd".to_string()));
        // Walking past the newest restores the stashed draft
        assert_eq!(session.recall_next(), Some("draft".to_string()));
        assert_eq!(session.recall_next(), None);
    }

    #[test]
    fn test_recall_with_empty_history() {
        let mut session = TerminalSession::new();
        assert_eq!(session.recall_previous("draft"), None);
        assert_eq!(session.recall_next(), None);
    }

    #[test]
    fn test_submit_resets_recall_cursor() {
        let mut session = TerminalSession::new();
        session.submit("ls");
        let _ = session.recall_previous("");
        session.submit("pwd");
        // Browsing restarts from the newest entry
        assert_eq!(session.recall_previous(""), Some("pwd".to_string()));
    }
}
