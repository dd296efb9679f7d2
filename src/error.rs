/// Lexical errors.
///
/// Raised by the lexer when a character starts no token or a literal cannot
/// be represented.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing source code. Parse
/// errors include unexpected tokens, missing keywords and input that ends in
/// the middle of a construct.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include things like division by zero, type mismatches and
/// reads of variables that were never assigned.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that aborts a run.
///
/// Every phase fails fast, so a run produces at most one of these.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source contains text that is not a token.
    #[error(transparent)]
    Lex(LexError),
    /// The token stream does not match the grammar.
    #[error(transparent)]
    Parse(ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Lex(e) => Self::Lex(e),
            other => Self::Parse(other),
        }
    }
}
