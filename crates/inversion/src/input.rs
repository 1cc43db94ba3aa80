use std::num::ParseIntError;

use thiserror::Error;

/// A token in the input text that is not a valid `i64`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("value #{position} ({token:?}) is not a valid integer: {source}")]
pub struct ParseSequenceError {
    token: String,
    position: usize,
    source: ParseIntError,
}

impl ParseSequenceError {
    pub fn token(&self) -> &str {
        &self.token
    }

    /// 1-based index of the offending value.
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Parses integers separated by whitespace and/or commas.
///
/// Empty text is an empty sequence.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>, ParseSequenceError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().map_err(|source| ParseSequenceError {
                token: token.to_owned(),
                position: i + 1,
                source,
            })
        })
        .collect()
}
