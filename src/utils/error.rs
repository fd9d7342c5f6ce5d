//! Error handling for Radium

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// A character no lexical rule accepts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unexpected character '{character}' on line {line}")]
pub struct LexError {
    pub character: char,
    pub line: usize,
}

/// A grammar violation found while parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("On line {line} -> {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

/// Front-end error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Get the 1-based source line associated with this error
    pub fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line,
            Self::Parse(e) => e.line,
        }
    }
}
