//! Error types shared across lectern crates.

use thiserror::Error;

/// A selector string that could not be classified.
///
/// The default query API swallows this and returns an empty result; the
/// strict variants return it so callers can tell "malformed" from "no match".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A whitespace-separated token matched none of the selector forms.
    #[error("invalid selector token `{token}` at position {position}")]
    InvalidToken {
        /// The offending token, verbatim.
        token: String,
        /// Zero-based index of the token within the selector string.
        position: usize,
    },
}

impl SelectorError {
    /// The token that failed to classify.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::InvalidToken { token, .. } => token,
        }
    }

    /// Zero-based position of the failing token.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidToken { position, .. } => *position,
        }
    }
}
