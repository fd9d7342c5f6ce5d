//! Structured Feedback Module
//!
//! Machine-readable front-end results:
//! - JSON diagnostics for lex/parse failures
//! - Token and statement counts

use serde::{Deserialize, Serialize};

use crate::utils::Error;

// ==================== Diagnostics ====================

/// Front-end stage that produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Lex,
    Parse,
}

/// A single error report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub stage: Stage,
    /// Human-readable message
    pub message: String,
    /// 1-based source line
    pub line: usize,
}

impl Diagnostic {
    /// Create a diagnostic from a front-end error
    pub fn from_error(error: &Error) -> Self {
        let (stage, message) = match error {
            Error::Lex(e) => (Stage::Lex, format!("unexpected character '{}'", e.character)),
            Error::Parse(e) => (Stage::Parse, e.message.clone()),
        };
        Self {
            stage,
            message,
            line: error.line(),
        }
    }
}

// ==================== Front-end Report ====================

/// Outcome of running the front end over one source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendReport {
    pub success: bool,
    pub source_file: String,
    pub token_count: usize,
    pub statement_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl FrontendReport {
    /// Create a successful report
    pub fn success(source_file: String, token_count: usize, statement_count: usize) -> Self {
        Self {
            success: true,
            source_file,
            token_count,
            statement_count,
            diagnostics: vec![],
        }
    }

    /// Create a failed report; counts cover whatever finished before the error
    pub fn failure(source_file: String, error: &Error, token_count: usize) -> Self {
        Self {
            success: false,
            source_file,
            token_count,
            statement_count: 0,
            diagnostics: vec![Diagnostic::from_error(error)],
        }
    }

    /// Output as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Output as compact JSON (for programmatic use)
    pub fn to_json_compact(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
