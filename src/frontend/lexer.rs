//! Lexer for Radium
//!
//! Converts source code into a stream of tokens.

use log::{debug, trace};

use crate::frontend::token::{Token, TokenKind};
use crate::utils::LexError;

/// The lexer state
pub struct Lexer {
    /// Source code as chars
    source: Vec<char>,
    /// Current position in source
    pos: usize,
    /// Current 1-based line
    line: usize,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    /// Look `offset` characters ahead without advancing
    fn peek(&self, offset: usize) -> Option<char> {
        self.source.get(self.pos + offset).copied()
    }

    /// Advance to the next character
    fn advance(&mut self) -> Option<char> {
        let c = self.peek(0);
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Consume a run of characters matching `pred`
    fn read_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut buffer = String::new();
        while let Some(c) = self.peek(0) {
            if !pred(c) {
                break;
            }
            buffer.push(c);
            self.pos += 1;
        }
        buffer
    }

    /// Read an identifier or keyword
    fn read_word(&mut self) -> Token {
        let word = self.read_while(|c| c.is_ascii_alphabetic());
        match TokenKind::keyword_from_str(&word) {
            Some(keyword) => Token::new(keyword, self.line),
            None => Token::with_value(TokenKind::AlphaNumeric, self.line, word),
        }
    }

    /// Read a decimal integer literal
    fn read_number(&mut self) -> Token {
        let digits = self.read_while(|c| c.is_ascii_digit());
        Token::with_value(TokenKind::IntLiteral, self.line, digits)
    }

    /// Produce the next token, `Ok(None)` at end of input
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        while let Some(c) = self.peek(0) {
            let kind = match c {
                c if c.is_ascii_alphabetic() => return Ok(Some(self.read_word())),
                c if c.is_ascii_digit() => return Ok(Some(self.read_number())),
                '=' => TokenKind::Equal,
                '(' => TokenKind::OpenParen,
                ')' => TokenKind::CloseParen,
                ';' => TokenKind::SemiColon,
                '\n' => {
                    self.advance();
                    self.line += 1;
                    continue;
                }
                c if c.is_whitespace() => {
                    self.advance();
                    continue;
                }
                // `+ - * /` have no grammar yet and land here too
                character => {
                    return Err(LexError {
                        character,
                        line: self.line,
                    })
                }
            };
            self.advance();
            return Ok(Some(Token::new(kind, self.line)));
        }
        Ok(None)
    }

    /// Tokenize the entire source and return all tokens
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            trace!("token {:?} on line {}", token.kind, token.line);
            tokens.push(token);
        }
        debug!("lexed {} tokens over {} lines", tokens.len(), self.line);
        Ok(tokens)
    }
}

/// Tokenize `source` in one pass
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_quit_statement() {
        let tokens = tokenize("quit(0);").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Quit, 1),
                Token::new(TokenKind::OpenParen, 1),
                Token::with_value(TokenKind::IntLiteral, 1, "0"),
                Token::new(TokenKind::CloseParen, 1),
                Token::new(TokenKind::SemiColon, 1),
            ]
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("quit log let const"),
            vec![TokenKind::Quit, TokenKind::Log, TokenKind::Let, TokenKind::Const]
        );
    }

    #[test]
    fn test_identifiers() {
        let tokens = tokenize("quitter logger letx Const").unwrap();
        assert_eq!(tokens.len(), 4);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::AlphaNumeric));
        assert_eq!(tokens[0].value.as_deref(), Some("quitter"));
        assert_eq!(tokens[3].value.as_deref(), Some("Const"));
    }

    #[test]
    fn test_digits_split_from_letters() {
        let tokens = tokenize("abc123").unwrap();
        assert_eq!(tokens[0], Token::with_value(TokenKind::AlphaNumeric, 1, "abc"));
        assert_eq!(tokens[1], Token::with_value(TokenKind::IntLiteral, 1, "123"));
    }

    #[test]
    fn test_integer_kept_as_text() {
        let tokens = tokenize("let big = 000123456789012345678901234567890;").unwrap();
        assert_eq!(
            tokens[3].value.as_deref(),
            Some("000123456789012345678901234567890")
        );
    }

    #[test]
    fn test_variable_declaration() {
        assert_eq!(
            kinds("let x = 5;"),
            vec![
                TokenKind::Let,
                TokenKind::AlphaNumeric,
                TokenKind::Equal,
                TokenKind::IntLiteral,
                TokenKind::SemiColon,
            ]
        );
    }

    #[test]
    fn test_line_numbers() {
        let tokens = tokenize("log(1);\n\nlet a\n= 2;\r\n  quit(0);").unwrap();
        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 1, 1, 1, 3, 3, 4, 4, 4, 5, 5, 5, 5, 5]);
        assert!(lines.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \t\n\r\n ").unwrap().is_empty());
    }

    #[test]
    fn test_lexemes_reconstruct_source() {
        let source = "let answer = 42;\nconst  k=7 ;\n\tlog ( 1 ) ;\nquit(0);";
        let rebuilt: String = tokenize(source)
            .unwrap()
            .iter()
            .map(Token::lexeme)
            .collect();
        let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(rebuilt, expected);
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("log(1);\nlet x = \"a\";").unwrap_err();
        assert_eq!(err, LexError { character: '"', line: 2 });
    }

    #[test]
    fn test_arithmetic_operators_rejected() {
        for (source, character) in [("1 + 2", '+'), ("1 - 2", '-'), ("1 * 2", '*'), ("1 / 2", '/')] {
            let err = tokenize(source).unwrap_err();
            assert_eq!(err, LexError { character, line: 1 });
        }
    }

    #[test]
    fn test_non_ascii_letter_rejected() {
        let err = tokenize("\n\nlet é = 1;").unwrap_err();
        assert_eq!(err, LexError { character: 'é', line: 3 });
    }

    #[test]
    fn test_next_token_streams_until_end() {
        let mut lexer = Lexer::new("x;");
        assert_eq!(lexer.next_token().unwrap().map(|t| t.kind), Some(TokenKind::AlphaNumeric));
        assert_eq!(lexer.next_token().unwrap().map(|t| t.kind), Some(TokenKind::SemiColon));
        assert_eq!(lexer.next_token().unwrap(), None);
        assert_eq!(lexer.next_token().unwrap(), None);
    }
}
