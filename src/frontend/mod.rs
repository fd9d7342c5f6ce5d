//! Frontend module - Lexer and Parser

pub mod token;
pub mod lexer;
pub mod ast;
pub mod parser;
