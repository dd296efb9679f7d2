use crate::error::LexError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that cannot start or continue the current construct.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but a different one was found.
    Expected {
        /// What the grammar required at this point.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Expressions or blocks are nested deeper than the interpreter supports.
    NestingTooDeep {
        /// The source line where the limit was reached.
        line: usize,
    },
    /// The lexer failed while the parser was asking for the next token.
    Lex(LexError),
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::Expected { expected,
                             found,
                             line, } => {
                write!(f, "Error on line {line}: Expected {expected} but found {found}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::NestingTooDeep { line } => {
                write!(f, "Error on line {line}: Program is nested too deeply.")
            },

            Self::Lex(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {}
