//! Unit tests for the canned terminal
//!
//! Covers the exact-vs-prefix matching boundary, case handling, the
//! clear reset, and transcript/history bookkeeping.

use seclearn::models::LineKind;
use seclearn::terminal::commands::{execute, Execution};
use seclearn::terminal::{TerminalSession, BANNER};

fn output_lines(input: &str) -> Vec<String> {
    match execute(input) {
        Execution::Output(lines) => lines,
        other => panic!("expected output for {:?}, got {:?}", input, other),
    }
}

#[test]
fn help_matches_any_case() {
    assert_eq!(output_lines("HELP"), output_lines("help"));
    assert_eq!(output_lines("HeLp"), output_lines("help"));
}

#[test]
fn help_with_arguments_is_not_help() {
    // Exact-match boundary: "help me" falls through to not-found
    match execute("help me") {
        Execution::NotFound(line) => assert!(line.contains("help me")),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn nmap_ignores_its_arguments() {
    assert_eq!(output_lines("nmap anything-here"), output_lines("nmap"));
    assert_eq!(
        output_lines("NMAP -sV --top-ports 100 10.9.9.9"),
        output_lines("nmap")
    );
}

#[test]
fn empty_and_whitespace_input_touch_nothing() {
    let mut session = TerminalSession::new();
    let transcript_before = session.transcript().len();

    assert!(!session.submit(""));
    assert!(!session.submit("   "));
    assert!(!session.submit(" \t "));

    assert_eq!(session.transcript().len(), transcript_before);
    assert!(session.history().is_empty());
}

#[test]
fn clear_resets_to_exactly_banner_plus_blank() {
    let mut session = TerminalSession::new();
    session.submit("nmap");
    session.submit("unknown-thing");
    session.submit("clear");

    let lines = session.transcript();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].text, BANNER[0]);
    assert_eq!(lines[1].text, BANNER[1]);
    assert_eq!(lines[2].kind, LineKind::Blank);
    assert!(lines[2].text.is_empty());
}

#[test]
fn transcript_format_is_prompt_output_separator() {
    let mut session = TerminalSession::new();
    session.submit("pwd");

    let lines = session.transcript();
    let tail = &lines[lines.len() - 3..];
    assert_eq!(tail[0].text, "$ pwd");
    assert_eq!(tail[0].kind, LineKind::Command);
    assert_eq!(tail[1].text, "/home/student");
    assert_eq!(tail[2].kind, LineKind::Blank);
}

#[test]
fn unmatched_commands_are_recallable() {
    let mut session = TerminalSession::new();
    session.submit("definitely-not-a-command");
    session.submit("ls");

    assert_eq!(session.history().len(), 2);
    assert_eq!(
        session.recall_previous(""),
        Some("ls".to_string())
    );
    assert_eq!(
        session.recall_previous(""),
        Some("definitely-not-a-command".to_string())
    );
}

#[test]
fn recall_round_trip_restores_draft() {
    let mut session = TerminalSession::new();
    session.submit("whoami");

    assert_eq!(session.recall_previous("half-typed"), Some("whoami".to_string()));
    assert_eq!(session.recall_next(), Some("half-typed".to_string()));
}

#[test]
fn case_insensitive_aliases() {
    assert_eq!(output_lines("IFCONFIG"), output_lines("ip addr"));
    assert_eq!(output_lines("Ip Addr"), output_lines("ifconfig"));
}

#[test]
fn echo_and_cat_take_arguments() {
    assert_eq!(output_lines("echo hello lab"), vec!["hello lab"]);
    assert_eq!(
        output_lines("cat no-such-file"),
        vec!["cat: no-such-file: No such file or directory"]
    );
    assert!(!output_lines("cat notes.txt").is_empty());
}

#[test]
fn every_submission_echoes_with_prompt_prefix_except_clear() {
    let mut session = TerminalSession::new();
    session.submit("whoami");
    session.submit("date");

    let echoes: Vec<&str> = session
        .transcript()
        .iter()
        .filter(|l| l.kind == LineKind::Command)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(echoes, vec!["$ whoami", "$ date"]);

    session.submit("clear");
    assert!(session
        .transcript()
        .iter()
        .all(|l| l.kind != LineKind::Command));
}
