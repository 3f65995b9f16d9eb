//! Errors for a single rejected line of `lxc-info` output.
//!
//! These never escape a scrape cycle: [`parse_samples`](super::parse_samples)
//! drops the offending line and keeps going. They exist so that
//! [`parse_line`](super::parse_line) can say *why* a line produced nothing.

use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatParseError {
    #[error("missing ':' separator at line {line}")]
    MissingSeparator { line: usize },

    #[error("invalid value for '{key}' at line {line}: '{value}': {source}")]
    InvalidValue {
        key: String,
        value: String,
        line: usize,
        #[source]
        source: ParseFloatError,
    },
}
