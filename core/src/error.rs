//! Error types for the pole survey

use std::fmt;

use thiserror::Error;

use crate::tokens::Position;

/// Survey result type alias
pub type Result<T> = std::result::Result<T, SurveyError>;

/// What the survey was looking for when the input let it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The leading pole count.
    Count,
    /// Height reading `index` of `of`, 1-based.
    Reading { index: usize, of: usize },
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count => f.write_str("pole count (non-negative integer)"),
            Self::Reading { index, of } => write!(f, "height reading {index} of {of} (integer)"),
        }
    }
}

/// Input did not hold a parseable integer where one was required.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputFormatError {
    #[error("expected {expected} as token #{ordinal}, but input ended")]
    MissingToken { expected: Expected, ordinal: usize },

    #[error("expected {expected} at {position}, found `{token}`")]
    InvalidInteger {
        expected: Expected,
        token: String,
        position: Position,
    },
}

impl InputFormatError {
    /// 1-based index of the offending token in the input stream.
    pub fn ordinal(&self) -> usize {
        match self {
            Self::MissingToken { ordinal, .. } => *ordinal,
            Self::InvalidInteger { position, .. } => position.ordinal,
        }
    }

    pub fn expected(&self) -> Expected {
        match self {
            Self::MissingToken { expected, .. } | Self::InvalidInteger { expected, .. } => {
                *expected
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Format(#[from] InputFormatError),
}
