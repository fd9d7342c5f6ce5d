//! Abstract Syntax Tree definitions for Radium

use serde::Serialize;

use crate::frontend::token::Token;

/// A parsed statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Statement {
    /// quit(<int>);
    #[serde(rename = "quitStatement")]
    Quit(QuitStatement),
    /// log(<int>);
    #[serde(rename = "logStatement")]
    Log(LogStatement),
    /// let|const <name> = <int>;
    VariableDeclaration(VariableDeclaration),
}

/// An expression; only a single integer literal for now
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expression {
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuitStatement {
    pub expression: Expression,
    /// Line of the `quit` keyword
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogStatement {
    pub expression: Expression,
    /// Line of the `log` keyword
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableDeclaration {
    pub identifier: Token,
    pub value: Token,
    #[serde(rename = "constant")]
    pub is_constant: bool,
    /// Line of the `let`/`const` keyword
    pub line: usize,
}

impl Statement {
    /// Line the statement starts on
    pub fn line(&self) -> usize {
        match self {
            Statement::Quit(s) => s.line,
            Statement::Log(s) => s.line,
            Statement::VariableDeclaration(s) => s.line,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Quit(_) => "quit",
            Statement::Log(_) => "log",
            Statement::VariableDeclaration(d) if d.is_constant => "const",
            Statement::VariableDeclaration(_) => "let",
        }
    }
}

impl VariableDeclaration {
    /// Declared variable name
    pub fn name(&self) -> &str {
        self.identifier.value.as_deref().unwrap_or_default()
    }
}
