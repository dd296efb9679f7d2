#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while splitting source text into
/// tokens.
pub enum LexError {
    /// A character that does not begin any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The column of the character, counted in characters from 1.
        column:    usize,
    },
    /// An integer literal that does not fit in a 64 bit signed integer.
    IntegerTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl LexError {
    /// Gets the line the error occurred on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::IntegerTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character,
                                        line,
                                        column, } => write!(f,
                                                            "Error on line {line}: Unexpected character '{character}' at column {column}."),
            Self::IntegerTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Integer literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
