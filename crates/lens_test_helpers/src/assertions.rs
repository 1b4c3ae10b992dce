//! Domain-specific assertions for TextLens tests
//!
//! Provides custom predicates and assertion helpers for common
//! test patterns.

use predicates::prelude::*;
use predicates::str::contains;

/// Assert that stderr does NOT contain any of the given strings
///
/// Useful for verifying that certain log messages or errors don't appear.
pub fn stderr_not_contains(values: &[&str]) -> impl Predicate<str> {
    let owned_values: Vec<String> = values.iter().map(|&s| s.to_string()).collect();
    predicate::function(move |s: &str| !owned_values.iter().any(|v| s.contains(v.as_str())))
}

/// Assert that a string is a valid JSON-RPC response
///
/// Checks for basic JSON-RPC structure (jsonrpc field, id, result or error).
pub fn valid_jsonrpc_response() -> impl Predicate<str> {
    contains("\"jsonrpc\"")
        .and(contains("\"id\""))
        .and(contains("\"result\"").or(contains("\"error\"")))
}

/// Assert that a string contains a document id (`doc_` + 3 digits)
pub fn contains_document_id() -> impl Predicate<str> {
    predicate::function(|s: &str| {
        s.match_indices("doc_").any(|(i, _)| {
            s[i + 4..]
                .chars()
                .take(3)
                .filter(|c| c.is_ascii_digit())
                .count()
                == 3
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_not_contains() {
        let stderr = "Some output without errors";
        assert!(stderr_not_contains(&["ERROR", "WARN"]).eval(stderr));

        let stderr_with_error = "ERROR: something went wrong";
        assert!(!stderr_not_contains(&["ERROR"]).eval(stderr_with_error));
    }

    #[test]
    fn test_valid_jsonrpc_response() {
        let valid = r#"{"jsonrpc":"2.0","id":1,"result":{}}"#;
        assert!(valid_jsonrpc_response().eval(valid));

        let valid_error = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32600}}"#;
        assert!(valid_jsonrpc_response().eval(valid_error));

        let invalid = r#"{"data":"test"}"#;
        assert!(!valid_jsonrpc_response().eval(invalid));
    }

    #[test]
    fn test_contains_document_id() {
        assert!(contains_document_id().eval("Created doc_001 just now"));
        assert!(contains_document_id().eval("doc_123"));
        assert!(!contains_document_id().eval("doc_12")); // Too short
        assert!(!contains_document_id().eval("no document id here"));
    }
}
