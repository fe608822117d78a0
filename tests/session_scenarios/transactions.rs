//! Nested transactions as seen through the text protocol.

use crate::transcript;

#[test]
fn test_nested_rollback_then_commit() {
    assert_eq!(
        transcript(&[
            "BEGIN", "SET a 10", "BEGIN", "SET a 20", "ROLLBACK", "GET a", "COMMIT", "GET a",
        ]),
        vec!["ROLLBACK DONE", "10", "COMMIT DONE", "10"]
    );
}

#[test]
fn test_commit_without_begin() {
    assert_eq!(transcript(&["COMMIT"]), vec!["NO TRANSACTION"]);
}

#[test]
fn test_rollback_without_begin() {
    assert_eq!(
        transcript(&["SET a 1", "ROLLBACK", "GET a"]),
        vec!["NO TRANSACTION", "1"]
    );
}

#[test]
fn test_uncommitted_writes_are_visible() {
    assert_eq!(
        transcript(&["SET a 10", "BEGIN", "SET a 20", "FIND 10", "FIND 20"]),
        vec!["a"]
    );
}

#[test]
fn test_rollback_restores_counts() {
    assert_eq!(
        transcript(&[
            "SET a 10", "BEGIN", "SET b 10", "UNSET a", "COUNTS 10", "ROLLBACK", "COUNTS 10",
            "FIND 10",
        ]),
        vec!["1", "ROLLBACK DONE", "1", "a"]
    );
}

#[test]
fn test_outer_rollback_undoes_committed_inner() {
    assert_eq!(
        transcript(&[
            "BEGIN", "BEGIN", "SET a 1", "COMMIT", "GET a", "ROLLBACK", "GET a", "ROLLBACK",
        ]),
        vec!["COMMIT DONE", "1", "ROLLBACK DONE", "NULL", "NO TRANSACTION"]
    );
}

#[test]
fn test_commit_makes_writes_permanent() {
    assert_eq!(
        transcript(&["BEGIN", "SET a 5", "COMMIT", "ROLLBACK", "GET a"]),
        vec!["COMMIT DONE", "NO TRANSACTION", "5"]
    );
}

#[test]
fn test_end_leaves_open_transaction_alone() {
    assert_eq!(
        transcript(&["BEGIN", "SET a 1", "END"]),
        vec!["ENDING SESSION"]
    );
}
