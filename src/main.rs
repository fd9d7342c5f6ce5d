//! Radium Compiler front end
//!
//! Lexes and parses Radium source files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use radium::feedback::FrontendReport;
use radium::{parse, tokenize, Statement, Token};

/// Radium Compiler
#[derive(Parser, Debug)]
#[command(name = "radc")]
#[command(version = "0.1.0")]
#[command(about = "Radium compiler front end - lexer and parser")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input source file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a source file for errors
    Check {
        /// Input source file
        input: PathBuf,
    },
    /// Print the token stream of a source file
    Tokens {
        /// Input source file
        input: PathBuf,
    },
    /// Print the parsed statements of a source file
    Ast {
        /// Input source file
        input: PathBuf,
    },
    /// Print version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Check { input }) => {
            let (tokens, statements) = front_end(input, cli.json)?;
            if cli.json {
                print_success_report(input, &tokens, &statements);
            } else {
                println!("✅ No errors found");
            }
        }
        Some(Commands::Tokens { input }) => print_tokens(input, cli.json)?,
        Some(Commands::Ast { input }) => print_ast(input, cli.json)?,
        Some(Commands::Version) => {
            println!("radc 0.1.0");
            println!("Radium Compiler front end");
            println!("License: Apache-2.0");
        }
        None => {
            let input = cli
                .input
                .as_ref()
                .context("No input file specified\nUsage: radc <FILE> or radc check <FILE>")?;
            let (tokens, statements) = front_end(input, cli.json)?;
            if cli.json {
                print_success_report(input, &tokens, &statements);
            } else {
                println!(
                    "  [✓] Parsed {} statements ({} tokens) from {}",
                    statements.len(),
                    tokens.len(),
                    input.display()
                );
            }
        }
    }
    Ok(())
}

fn read_source(input: &Path) -> Result<String> {
    info!("reading {}", input.display());
    fs::read_to_string(input).with_context(|| format!("Error reading file {}", input.display()))
}

/// Turn a front-end error into the driver error, printing the JSON report first if asked
fn fail(input: &Path, error: radium::Error, token_count: usize, json: bool) -> anyhow::Error {
    if json {
        let report = FrontendReport::failure(input.display().to_string(), &error, token_count);
        println!("{}", report.to_json());
    }
    error.into()
}

/// Lex `input`
fn lex(input: &Path, json: bool) -> Result<Vec<Token>> {
    let source = read_source(input)?;
    tokenize(&source).map_err(|e| fail(input, e.into(), 0, json))
}

/// Lex and parse `input`
fn front_end(input: &Path, json: bool) -> Result<(Vec<Token>, Vec<Statement>)> {
    let tokens = lex(input, json)?;
    let statements = parse(&tokens).map_err(|e| fail(input, e.into(), tokens.len(), json))?;
    Ok((tokens, statements))
}

fn print_success_report(input: &Path, tokens: &[Token], statements: &[Statement]) {
    let report = FrontendReport::success(input.display().to_string(), tokens.len(), statements.len());
    println!("{}", report.to_json());
}

/// One token per line: `<line>: <kind> [value]`
fn format_token(token: &Token) -> String {
    match &token.value {
        Some(value) => format!("{}: {} {}", token.line, token.kind, value),
        None => format!("{}: {}", token.line, token.kind),
    }
}

fn print_tokens(input: &Path, json: bool) -> Result<()> {
    let tokens = lex(input, json)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for token in &tokens {
            println!("{}", format_token(token));
        }
    }
    Ok(())
}

fn print_ast(input: &Path, json: bool) -> Result<()> {
    let (_, statements) = front_end(input, json)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&statements)?);
    } else {
        println!("{:#?}", statements);
    }
    Ok(())
}
