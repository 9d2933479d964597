//! Error types for doc-comment parsing.
//!
//! Parsing is deliberately forgiving: unrecognized tags, missing optional
//! fields, and URI candidates that fail validation all degrade into plain
//! trailing text instead of raising. The one hard error is handing the
//! directive parser something that is not a directive at all.
//!
//! ## Examples
//!
//! ```rust
//! use docblock::{Directive, ParseError};
//!
//! let err = Directive::parse("just prose").unwrap_err();
//! assert!(matches!(err, ParseError::NotDirective { .. }));
//! eprintln!("parse error: {}", err);
//! ```

use thiserror::Error;

/// Errors raised while parsing a doc comment.
///
/// Only directive parsing can fail; every other irregularity degrades into
/// trailing free text. The variant carries the offending input (shortened)
/// for diagnostics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The directive parser was invoked on text lacking a leading `@tag`.
    #[error("not a directive: expected '@' followed by a letter, found {snippet:?}")]
    NotDirective {
        /// The start of the rejected input.
        snippet: String,
    },
}

impl ParseError {
    /// Creates a `NotDirective` error, keeping a short prefix of the
    /// rejected input as context.
    pub(crate) fn not_directive(raw: &str) -> Self {
        let mut snippet: String = raw.chars().take(24).collect();
        if snippet.len() < raw.len() {
            snippet.push_str("...");
        }
        ParseError::NotDirective { snippet }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_directive_keeps_snippet() {
        let err = ParseError::not_directive("just prose");
        assert_eq!(
            err,
            ParseError::NotDirective {
                snippet: "just prose".to_string()
            }
        );
        assert!(err.to_string().contains("just prose"));
    }

    #[test]
    fn test_long_input_is_shortened() {
        let long = "x".repeat(100);
        let err = ParseError::not_directive(&long);
        let ParseError::NotDirective { snippet } = err;
        assert!(snippet.len() < 30);
        assert!(snippet.ends_with("..."));
    }
}
