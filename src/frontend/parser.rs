//! Parser for Radium
//!
//! Single-pass recursive descent parser with one token of lookahead.
//! Every rule fails fast on the first mismatch; there is no recovery.

use log::{debug, trace};

use crate::frontend::ast::*;
use crate::frontend::token::{Token, TokenKind};
use crate::utils::ParseError;

type Result<T> = std::result::Result<T, ParseError>;

/// The parser
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over a finished token stream
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    // ==================== Helper Methods ====================

    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Line of the most recently consumed token
    fn previous_line(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(1, |t| t.line)
    }

    /// Line to blame: the token found, or the last one consumed at end of input
    fn error_line(&self) -> usize {
        self.current().map_or_else(|| self.previous_line(), |t| t.line)
    }

    fn expect(&mut self, expected: TokenKind, message: &str) -> Result<&'a Token> {
        match self.current() {
            Some(token) if token.kind == expected => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(ParseError::new(message, self.error_line())),
        }
    }

    // ==================== Parsing Methods ====================

    /// Parse the whole token stream into statements, in source order
    pub fn parse(&mut self) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();

        while let Some(token) = self.current() {
            let statement = match token.kind {
                TokenKind::Quit => {
                    let quit = self.parse_quit()?;
                    // quit terminates the program
                    if let Some(trailing) = self.current() {
                        return Err(ParseError::new(
                            format!(
                                "token '{}' is unreachable -> expected end of file or scope",
                                trailing.kind
                            ),
                            trailing.line,
                        ));
                    }
                    quit
                }
                TokenKind::Log => self.parse_log()?,
                TokenKind::Let | TokenKind::Const => self.parse_variable_declaration()?,
                kind => {
                    return Err(ParseError::new(
                        format!("unexpected token '{}'", kind),
                        token.line,
                    ))
                }
            };
            trace!("parsed {} statement on line {}", statement.kind_name(), statement.line());
            statements.push(statement);
        }

        debug!("parsed {} statements", statements.len());
        Ok(statements)
    }

    /// Parse `quit(<int>);`
    fn parse_quit(&mut self) -> Result<Statement> {
        let line = self.expect(TokenKind::Quit, "expected 'quit'")?.line;
        let expression = self.parse_call_tail("quit")?;
        Ok(Statement::Quit(QuitStatement { expression, line }))
    }

    /// Parse `log(<int>);`
    fn parse_log(&mut self) -> Result<Statement> {
        let line = self.expect(TokenKind::Log, "expected 'log'")?.line;
        let expression = self.parse_call_tail("log")?;
        Ok(Statement::Log(LogStatement { expression, line }))
    }

    /// Parse `(<int>);` following a call-like keyword
    fn parse_call_tail(&mut self, keyword: &str) -> Result<Expression> {
        self.expect(
            TokenKind::OpenParen,
            &format!("expected '(' after '{}' statement", keyword),
        )?;
        let token = self.expect(
            TokenKind::IntLiteral,
            &format!("expected integer literal after '(' in '{}' statement", keyword),
        )?;
        self.expect(
            TokenKind::CloseParen,
            &format!("expected ')' after integer literal in '{}' statement", keyword),
        )?;
        self.expect(
            TokenKind::SemiColon,
            &format!("expected ';' after '{}' statement", keyword),
        )?;
        Ok(Expression {
            token: token.clone(),
        })
    }

    /// Parse `let|const <name> = <int>;`
    fn parse_variable_declaration(&mut self) -> Result<Statement> {
        let keyword = match self.advance() {
            Some(token) if matches!(token.kind, TokenKind::Let | TokenKind::Const) => token,
            _ => {
                return Err(ParseError::new(
                    "expected 'let' or 'const'",
                    self.error_line(),
                ))
            }
        };

        let identifier = self.expect(
            TokenKind::AlphaNumeric,
            "expected variable name after 'let' or 'const' keyword",
        )?;
        self.expect(TokenKind::Equal, "expected '=' after variable name")?;
        let value = self.expect(
            TokenKind::IntLiteral,
            "expected integer literal after '=' -> For now, only integer literals are supported",
        )?;
        self.expect(TokenKind::SemiColon, "expected ';' after integer literal")?;

        Ok(Statement::VariableDeclaration(VariableDeclaration {
            identifier: identifier.clone(),
            value: value.clone(),
            is_constant: keyword.kind == TokenKind::Const,
            line: keyword.line,
        }))
    }
}

/// Parse a finished token stream into statements
pub fn parse(tokens: &[Token]) -> Result<Vec<Statement>> {
    let mut parser = Parser::new(tokens);
    let statements = parser.parse()?;
    debug_assert!(parser.is_at_end());
    Ok(statements)
}
