//! Radium
//!
//! Front end of the Radium toolchain: source text is scanned into tokens,
//! then parsed into an ordered list of statements for a downstream consumer.

pub mod feedback;
pub mod frontend;
pub mod utils;

pub use frontend::ast::{Expression, LogStatement, QuitStatement, Statement, VariableDeclaration};
pub use frontend::lexer::{tokenize, Lexer};
pub use frontend::parser::{parse, Parser};
pub use frontend::token::{Token, TokenKind};
pub use utils::{Error, LexError, ParseError, Result};

/// Lex and parse `source` in one go
pub fn parse_source(source: &str) -> Result<Vec<Statement>> {
    let tokens = tokenize(source)?;
    Ok(parse(&tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_source() {
        let statements = parse_source("const limit = 10;\nlog(7);\nquit(0);\n").unwrap();
        assert_eq!(statements.len(), 3);
        assert!(matches!(statements[2], Statement::Quit(_)));
    }

    #[test]
    fn test_parse_source_errors() {
        let err = parse_source("log(1);\nlog(2 + 3);").unwrap_err();
        assert_eq!(err, Error::Lex(LexError { character: '+', line: 2 }));

        let err = parse_source("quit(0); log(1);").unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError { line: 1, .. })));
    }
}
