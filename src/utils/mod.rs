//! Utility module

mod error;

pub use error::{Error, LexError, ParseError, Result};
