//! Token definitions for Radium

use serde::Serialize;
use std::fmt;

/// A token produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line the token starts on
    pub line: usize,
    /// Text payload, only set for identifiers and integer literals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize) -> Self {
        Self { kind, line, value: None }
    }

    pub fn with_value(kind: TokenKind, line: usize, value: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            value: Some(value.into()),
        }
    }

    /// The source text this token was scanned from
    pub fn lexeme(&self) -> String {
        match &self.value {
            Some(value) => value.clone(),
            None => self.kind.spelling().to_string(),
        }
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // ============ Keywords ============
    /// quit
    Quit,
    /// log
    Log,
    /// let
    Let,
    /// const
    Const,

    // ============ Identifiers and Literals ============
    /// Identifier (letters only)
    AlphaNumeric,
    /// Decimal integer literal, kept as text
    IntLiteral,

    // ============ Operators and Punctuation ============
    /// =
    Equal,
    /// (
    OpenParen,
    /// )
    CloseParen,
    /// ;
    SemiColon,
}

impl TokenKind {
    /// Check if this token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Quit | TokenKind::Log | TokenKind::Let | TokenKind::Const
        )
    }

    /// Get keyword from string
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "quit" => Some(TokenKind::Quit),
            "log" => Some(TokenKind::Log),
            "let" => Some(TokenKind::Let),
            "const" => Some(TokenKind::Const),
            _ => None,
        }
    }

    /// Kind name, as used in diagnostics and serialized tokens
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Quit => "quit",
            TokenKind::Log => "log",
            TokenKind::Let => "let",
            TokenKind::Const => "const",
            TokenKind::AlphaNumeric => "alpha_numeric",
            TokenKind::IntLiteral => "int_literal",
            TokenKind::Equal => "equal",
            TokenKind::OpenParen => "open_paren",
            TokenKind::CloseParen => "close_paren",
            TokenKind::SemiColon => "semi_colon",
        }
    }

    /// Source text of a fixed token; value-carrying kinds fall back to their name
    pub fn spelling(&self) -> &'static str {
        match self {
            TokenKind::Equal => "=",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::SemiColon => ";",
            other => other.name(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
