//! Line tokenizer
//!
//! Splits a line of text on whitespace and parses every non-empty segment as
//! a 64-bit signed integer. What happens to a segment that does not parse is
//! decided by the caller's [`MalformedPolicy`].

use thiserror::Error;

use crate::config::MalformedPolicy;

/// A segment that is not a valid `i64`
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed token `{token}`")]
pub struct TokenError {
    pub token: String,
}

/// Parse every whitespace-separated token on `line`, in order.
///
/// Under [`MalformedPolicy::Zero`] a bad token yields `Ok(0)` and the
/// iterator never produces an error.
pub fn parse_line(
    line: &str,
    policy: MalformedPolicy,
) -> impl Iterator<Item = Result<i64, TokenError>> + '_ {
    line.split_whitespace()
        .map(move |segment| match (segment.parse::<i64>(), policy) {
            (Ok(value), _) => Ok(value),
            (Err(_), MalformedPolicy::Zero) => Ok(0),
            (Err(_), MalformedPolicy::Error) => Err(TokenError {
                token: segment.to_string(),
            }),
        })
}
