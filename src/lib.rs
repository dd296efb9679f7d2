//! # wordscript
//!
//! wordscript is an interpreter for a small imperative scripting language
//! whose keywords read like English:
//!
//! ```text
//! count is 3
//! loop while count greater than 0 do
//!     show count
//!     count is count - 1
//! end
//! if count is 0 then show "liftoff" end
//! ```
//!
//! Source text goes through a lexer, a recursive-descent parser and a
//! tree-walking evaluator. Each stage stops at the first error it finds.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::{
    ast::Block,
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::core::Context,
        lexer::{Lexer, Spanned, Token},
        parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every error carries the line it occurred on and renders as
/// `Error on line N: ...`.
///
/// # Responsibilities
/// - Defines error enums for each phase (lexer, parser, evaluator).
/// - Wraps them in a single [`error::Error`] for the public entry points.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Owns the per-run state (environment and output sink).
pub mod interpreter;

/// Splits `source` into tokens.
///
/// Returns every token with the line it started on, up to but not including
/// the end of input.
///
/// # Examples
/// ```
/// use wordscript::{interpreter::lexer::Token, tokenize};
///
/// let tokens = tokenize("x is 1\nshow x").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".to_string()), 1),
///                 (Token::Is, 1),
///                 (Token::Integer(1), 1),
///                 (Token::Show, 2),
///                 (Token::Identifier("x".to_string()), 2)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, Error> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        match lexer.next_token()? {
            (Token::Eof, _) => return Ok(tokens),
            token => tokens.push(token),
        }
    }
}

/// Parses `source` into the program's top-level block without running it.
///
/// # Examples
/// ```
/// use wordscript::{error::Error, parse};
///
/// assert!(parse("if x then show x end").is_ok());
/// assert!(matches!(parse("if x show x end"), Err(Error::Parse(_))));
/// ```
pub fn parse(source: &str) -> Result<Block, Error> {
    Ok(Parser::new(source)?.parse()?)
}

/// Parses and runs `source`, writing the output of `show` to `output`.
///
/// # Returns
/// The context after the run, holding the final environment and the output
/// sink.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error. No statement runs if
/// the source does not parse.
///
/// # Examples
/// ```
/// use wordscript::execute;
///
/// let context = execute("show 7 / 2\nshow \"done\"", Vec::new()).unwrap();
/// assert_eq!(context.into_output(), b"3\ndone\n");
/// ```
pub fn execute<W: Write>(source: &str, output: W) -> Result<Context<W>, Error> {
    let program = parse(source)?;
    let mut context = Context::new(output);
    context.interpret(&program)?;
    Ok(context)
}

/// Runs `source`, printing to standard output.
///
/// # Returns
/// The final environment.
///
/// # Examples
/// ```
/// use wordscript::{interpreter::value::core::Value, run};
///
/// let env = run("x is 5 not is 6").unwrap();
/// assert_eq!(env.get("x"), Some(&Value::Bool(true)));
///
/// // 'y' is never assigned
/// assert!(run("x is y + 1").is_err());
/// ```
pub fn run(source: &str) -> Result<Environment, Error> {
    let context = execute(source, io::stdout().lock())?;
    Ok(context.into_environment())
}
