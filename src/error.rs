//! Error types for the wire-protocol core.
//!
//! The line parser is total and never surfaces an error; the only fallible
//! operation is interpreting a single ISUPPORT token, and the capability
//! fold swallows those failures after logging them.

use thiserror::Error;

/// Errors raised while interpreting a single ISUPPORT token.
///
/// These never escape the capability fold: each failure is logged and the
/// offending token skipped, so one bad token cannot abort the rest of a
/// numeric-005 line.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum IsupportError {
    /// A `PREFIX=` value that does not match the `(modes)symbols` shape.
    #[error("malformed PREFIX value: {0}")]
    MalformedPrefix(String),
}
