//! Scanner failures.
//!
//! Tokenization can fail in exactly two ways. A single character that no
//! rule accepts is an [`LexError::InvalidChar`]. A longer stretch of input
//! that began a token but can no longer complete one (an unterminated
//! block comment, raw string, or quoted literal at end of input) is an
//! [`LexError::IncompleteToken`].
//!
//! Both variants carry the offending source text so a driver can point at
//! it. The text is already lossily decoded because it may contain bytes
//! that never formed valid UTF-8.

use thiserror::Error;

/// A fatal tokenization error.
///
/// Errors abort the scan at the position where the earliest unresolvable
/// candidate started; no further tokens are produced after one is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A single character that cannot begin any token.
    #[error("invalid character: {text:?}")]
    InvalidChar {
        /// The rejected character, lossily decoded.
        text: String,
    },

    /// Input ended (or became unextendable) inside a partial token.
    #[error("incomplete token: {text:?}")]
    IncompleteToken {
        /// The partial token text, lossily decoded.
        text: String,
    },
}

impl LexError {
    pub(crate) fn invalid(bytes: &[u8]) -> Self {
        LexError::InvalidChar {
            text: String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    pub(crate) fn incomplete(bytes: &[u8]) -> Self {
        LexError::IncompleteToken {
            text: String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}
