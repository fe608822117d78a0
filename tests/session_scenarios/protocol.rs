//! Data commands and input handling.

use crate::{last_line, transcript, transcript_with};
use tallykv::{Executor, OutputMode};

// =============================================================================
// DATA COMMANDS
// =============================================================================

#[test]
fn test_set_then_get() {
    assert_eq!(transcript(&["SET a 10", "GET a"]), vec!["10"]);
}

#[test]
fn test_counts_follow_unset() {
    assert_eq!(
        transcript(&["SET a 10", "SET b 10", "COUNTS 10", "UNSET a", "COUNTS 10"]),
        vec!["2", "1"]
    );
}

#[test]
fn test_get_never_set_prints_null() {
    assert_eq!(transcript(&["GET z"]), vec!["NULL"]);
}

#[test]
fn test_counts_zero_is_printed() {
    assert_eq!(last_line(&["COUNTS 42"]).as_deref(), Some("0"));
}

#[test]
fn test_find_lists_sorted_keys() {
    assert_eq!(
        transcript(&["SET c 1", "SET a 1", "SET b 2", "FIND 1"]),
        vec!["a c"]
    );
}

#[test]
fn test_find_with_no_match_prints_nothing() {
    assert!(transcript(&["SET a 1", "FIND 2"]).is_empty());
}

#[test]
fn test_unset_missing_key_is_silent() {
    assert!(transcript(&["UNSET nope"]).is_empty());
}

#[test]
fn test_null_text_is_a_real_value() {
    assert_eq!(
        transcript(&["SET a NULL", "COUNTS NULL", "FIND NULL", "GET a"]),
        vec!["1", "a", "NULL"]
    );
}

// =============================================================================
// INPUT HANDLING
// =============================================================================

#[test]
fn test_invalid_command() {
    assert_eq!(transcript(&["PUT a 1", "set a 1"]), vec!["INVALID COMMAND"; 2]);
}

#[test]
fn test_invalid_arguments() {
    assert_eq!(
        transcript(&["SET a", "GET", "BEGIN now", "GET a"]),
        vec!["INVALID ARGUMENTS", "INVALID ARGUMENTS", "INVALID ARGUMENTS", "NULL"]
    );
}

#[test]
fn test_blank_lines_are_ignored() {
    assert_eq!(transcript(&["", "   ", "SET a 1", "\t", "GET a"]), vec!["1"]);
}

#[test]
fn test_end_prints_ending_session() {
    assert_eq!(transcript(&["END"]), vec!["ENDING SESSION"]);
}

#[test]
fn test_json_mode_transcript() {
    let mut executor = Executor::new();
    let printed = transcript_with(
        &mut executor,
        &["SET a 1", "GET a", "FIND 1", "COMMIT"],
        OutputMode::Json,
    );

    assert_eq!(printed.len(), 3);
    assert_eq!(printed[0], r#"{"type":"maybe","value":"1"}"#);
    assert_eq!(printed[1], r#"{"type":"keys","value":["a"]}"#);

    let error: serde_json::Value = serde_json::from_str(&printed[2]).unwrap();
    assert_eq!(error["code"], "NoTransaction");
}
