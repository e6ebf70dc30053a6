//! Error taxonomy for the rewrite core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The tree uses a kind or shape the walker cannot represent or traverse.
    #[error("malformed tree: {reason}")]
    MalformedTree { reason: String },

    /// A shifted string literal left the Unicode scalar value range.
    #[error("cannot encode {character:?} at position {position}: shifted value is not a valid character")]
    UnencodableLiteral { character: char, position: usize },

    #[error("unknown rule: {0}")]
    UnknownRule(String),

    #[error("unknown format: {0}. Use json or source")]
    UnknownFormat(String),

    #[error("invalid keep pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("cannot serialize tree: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedTree {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
