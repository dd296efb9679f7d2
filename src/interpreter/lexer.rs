use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Integer literal tokens, such as `42`. Signs are unary operators.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens. Everything up to the next `"` is taken
    /// verbatim; an unterminated string runs to the end of the input.
    #[token("\"", lex_string)]
    Str(String),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `end`
    #[token("end")]
    End,
    /// `loop`
    #[token("loop")]
    Loop,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// `show`
    #[token("show")]
    Show,
    /// `is`, used both for assignment and for equality.
    #[token("is")]
    Is,
    /// `not` on its own. Fused with a following `is` by [`Lexer`].
    #[token("not")]
    Not,
    /// `not is`. Never produced by the raw scanner; see [`Lexer`].
    NotIs,
    /// `less`, the first half of `less than`.
    #[token("less")]
    Less,
    /// `greater`, the first half of `greater than`.
    #[token("greater")]
    Greater,
    /// `than`
    #[token("than")]
    Than,
    /// Identifier tokens; variable names such as `x`, `total_sum` or `café`.
    /// Any Unicode letter may start a name and letters, digits and `_` may
    /// continue it.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`, symbolic spelling of `less than`.
    #[token("<")]
    LessSign,
    /// `>`, symbolic spelling of `greater than`.
    #[token(">")]
    GreaterSign,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `# Comments` running to the end of the line.
    #[token("#", skip_comment)]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        let next_line_start = lex.span().end;
        lex.extras.newline(next_line_start);
        logos::Skip
    })]
    NewLine,
    /// Any Unicode whitespace other than a line feed.
    #[regex(r"[\s&&[^\n]]+", logos::skip)]
    Ignored,
    /// End of input. Returned forever once the source is exhausted.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::If => write!(f, "if"),
            Self::Then => write!(f, "then"),
            Self::Else => write!(f, "else"),
            Self::End => write!(f, "end"),
            Self::Loop => write!(f, "loop"),
            Self::While => write!(f, "while"),
            Self::Do => write!(f, "do"),
            Self::Show => write!(f, "show"),
            Self::Is => write!(f, "is"),
            Self::Not => write!(f, "not"),
            Self::NotIs => write!(f, "not is"),
            Self::Less => write!(f, "less"),
            Self::Greater => write!(f, "greater"),
            Self::Than => write!(f, "than"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LessSign => write!(f, "<"),
            Self::GreaterSign => write!(f, ">"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comment => write!(f, "#"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// Failure reported by the raw scanner. Positions are attached by [`Lexer`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token starts with the current character.
    #[default]
    UnexpectedCharacter,
    /// An integer literal that does not fit in 64 bits.
    IntegerTooLarge,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset where it starts, so
/// that errors can report a line and column.
#[derive(Debug, Clone)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

impl LexerExtras {
    fn newline(&mut self, next_line_start: usize) {
        self.line += 1;
        self.line_start = next_line_start;
    }
}

fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::IntegerTooLarge)
}

fn lex_string(lex: &mut logos::Lexer<Token>) -> String {
    let rest = lex.remainder();
    let (text, consumed) = match rest.find('"') {
        Some(end) => (rest[..end].to_string(), end + 1),
        None => (rest.to_string(), rest.len()),
    };

    let body_start = lex.span().end;
    for (offset, _) in text.match_indices('\n') {
        lex.extras.newline(body_start + offset + 1);
    }
    lex.bump(consumed);
    text
}

fn skip_comment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    let newline = lex.remainder().find('\n');
    let consumed = newline.map_or_else(|| lex.remainder().len(), |i| i + 1);

    if newline.is_some() {
        let next_line_start = lex.span().end + consumed;
        lex.extras.newline(next_line_start);
    }
    lex.bump(consumed);
    logos::Skip
}

/// A token paired with the line it starts on.
pub type Spanned = (Token, usize);

/// Produces tokens on demand for the parser.
///
/// Wraps the logos scanner and adds the one piece of context-sensitive
/// tokenization the language needs: `not` directly followed by `is` becomes a
/// single [`Token::NotIs`]. The token after `not` is scanned ahead of time and
/// kept in a one-slot buffer when it is not `is`, so the caller still sees it
/// on the next call.
///
/// # Example
/// ```
/// use wordscript::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("a not is b");
///
/// assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("a".into()), 1));
/// assert_eq!(lexer.next_token().unwrap(), (Token::NotIs, 1));
/// assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("b".into()), 1));
/// assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 1));
/// assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 1));
/// ```
pub struct Lexer<'src> {
    inner:   logos::Lexer<'src, Token>,
    pending: Option<Result<Spanned, LexError>>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:   Token::lexer(source),
               pending: None, }
    }

    /// Returns the next token and the line it starts on.
    ///
    /// Once the input is exhausted every call returns [`Token::Eof`].
    ///
    /// # Errors
    /// Returns a [`LexError`] for a character that starts no token, or for an
    /// integer literal too large for 64 bits.
    pub fn next_token(&mut self) -> Result<Spanned, LexError> {
        let (token, line) = match self.pending.take() {
            Some(buffered) => buffered?,
            None => self.scan()?,
        };
        if token != Token::Not {
            return Ok((token, line));
        }

        match self.scan() {
            Ok((Token::Is, _)) => Ok((Token::NotIs, line)),
            lookahead => {
                self.pending = Some(lookahead);
                Ok((Token::Not, line))
            },
        }
    }

    fn scan(&mut self) -> Result<Spanned, LexError> {
        match self.inner.next() {
            None => Ok((Token::Eof, self.inner.extras.line)),
            Some(Ok(token)) => {
                // Multi-line strings have already advanced the line counter.
                let spanned_lines = self.inner.slice().matches('\n').count();
                Ok((token, self.inner.extras.line - spanned_lines))
            },
            Some(Err(kind)) => Err(self.error(kind)),
        }
    }

    fn error(&self, kind: LexErrorKind) -> LexError {
        let span = self.inner.span();
        let extras = &self.inner.extras;

        match kind {
            LexErrorKind::UnexpectedCharacter => {
                let source = self.inner.source();
                let character = source[span.start..].chars().next().unwrap_or('\0');
                let column = source[extras.line_start..span.start].chars().count() + 1;

                LexError::UnexpectedCharacter { character,
                                                line: extras.line,
                                                column }
            },
            LexErrorKind::IntegerTooLarge => {
                LexError::IntegerTooLarge { literal: self.inner.slice().to_string(),
                                            line:    extras.line, }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut result = Vec::new();
        loop {
            let (token, _) = lexer.next_token().unwrap();
            if token == Token::Eof {
                return result;
            }
            result.push(token);
        }
    }

    #[test]
    fn assignment_tokens() {
        assert_eq!(tokens("x is 10 + 5"),
                   vec![Token::Identifier("x".into()),
                        Token::Is,
                        Token::Integer(10),
                        Token::Plus,
                        Token::Integer(5)]);
    }

    #[test]
    fn keywords_are_not_identifiers() {
        assert_eq!(tokens("if then else end loop while do show"),
                   vec![Token::If,
                        Token::Then,
                        Token::Else,
                        Token::End,
                        Token::Loop,
                        Token::While,
                        Token::Do,
                        Token::Show]);
    }

    #[test]
    fn keyword_prefix_is_identifier() {
        assert_eq!(tokens("iffy ends island"),
                   vec![Token::Identifier("iffy".into()),
                        Token::Identifier("ends".into()),
                        Token::Identifier("island".into())]);
    }

    #[test]
    fn boolean_literals() {
        assert_eq!(tokens("true false"), vec![Token::Bool(true), Token::Bool(false)]);
    }

    #[test]
    fn two_word_comparisons_stay_separate() {
        assert_eq!(tokens("a less than b greater than c"),
                   vec![Token::Identifier("a".into()),
                        Token::Less,
                        Token::Than,
                        Token::Identifier("b".into()),
                        Token::Greater,
                        Token::Than,
                        Token::Identifier("c".into())]);
    }

    #[test]
    fn symbolic_comparisons() {
        assert_eq!(tokens("1 < 2 > 0"),
                   vec![Token::Integer(1),
                        Token::LessSign,
                        Token::Integer(2),
                        Token::GreaterSign,
                        Token::Integer(0)]);
    }

    #[test]
    fn not_is_fuses_across_whitespace() {
        assert_eq!(tokens("a not \n\t is b"),
                   vec![Token::Identifier("a".into()),
                        Token::NotIs,
                        Token::Identifier("b".into())]);
    }

    #[test]
    fn bare_not_keeps_following_token() {
        assert_eq!(tokens("not 5 is 5"),
                   vec![Token::Not, Token::Integer(5), Token::Is, Token::Integer(5)]);
    }

    #[test]
    fn not_at_end_of_input() {
        assert_eq!(tokens("not"), vec![Token::Not]);
    }

    #[test]
    fn not_not_is() {
        assert_eq!(tokens("not not is"), vec![Token::Not, Token::NotIs]);
    }

    #[test]
    fn not_isle_is_identifier() {
        assert_eq!(tokens("not isle"),
                   vec![Token::Not, Token::Identifier("isle".into())]);
    }

    #[test]
    fn string_is_verbatim() {
        assert_eq!(tokens(r#"show "Hello, # World! \n""#),
                   vec![Token::Show, Token::Str(r"Hello, # World! \n".into())]);
    }

    #[test]
    fn unterminated_string_runs_to_end() {
        assert_eq!(tokens("show \"abc def"),
                   vec![Token::Show, Token::Str("abc def".into())]);
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(tokens("# leading\nx is 1 # trailing\n# last"),
                   vec![Token::Identifier("x".into()), Token::Is, Token::Integer(1)]);
    }

    #[test]
    fn lines_are_tracked() {
        let mut lexer = Lexer::new("a\n# comment\n\"two\nlines\" b\nc");
        assert_eq!(lexer.next_token().unwrap().1, 1);
        assert_eq!(lexer.next_token().unwrap().1, 3);
        assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("b".into()), 4));
        assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("c".into()), 5));
    }

    #[test]
    fn eof_is_idempotent() {
        let mut lexer = Lexer::new("  ");
        for _ in 0..3 {
            assert_eq!(lexer.next_token().unwrap().0, Token::Eof);
        }
    }

    #[test]
    fn unexpected_character_reports_position() {
        let mut lexer = Lexer::new("x is 1\n  y is $");
        for _ in 0..5 {
            lexer.next_token().unwrap();
        }
        assert_eq!(lexer.next_token(),
                   Err(LexError::UnexpectedCharacter { character: '$',
                                                       line:      2,
                                                       column:    8, }));
    }

    #[test]
    fn error_after_not_is_deferred() {
        let mut lexer = Lexer::new("not @");
        assert_eq!(lexer.next_token().unwrap().0, Token::Not);
        assert!(matches!(lexer.next_token(),
                         Err(LexError::UnexpectedCharacter { character: '@', .. })));
    }

    #[test]
    fn integer_too_large() {
        let mut lexer = Lexer::new("99999999999999999999");
        assert!(matches!(lexer.next_token(), Err(LexError::IntegerTooLarge { .. })));
    }

    #[test]
    fn unicode_identifiers() {
        assert_eq!(tokens("café is 1 show café"),
                   vec![Token::Identifier("café".into()),
                        Token::Is,
                        Token::Integer(1),
                        Token::Show,
                        Token::Identifier("café".into())]);
        assert_eq!(tokens("_größe2 π"),
                   vec![Token::Identifier("_größe2".into()), Token::Identifier("π".into())]);
    }

    #[test]
    fn unicode_whitespace_is_skipped() {
        assert_eq!(tokens("show\u{a0}1\u{2003}\u{3000}+\t2"),
                   vec![Token::Show, Token::Integer(1), Token::Plus, Token::Integer(2)]);
    }

    #[test]
    fn unicode_whitespace_does_not_end_lines() {
        let mut lexer = Lexer::new("a\u{a0}\nb");
        assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("a".into()), 1));
        assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("b".into()), 2));
    }

    #[test]
    fn minimum_integer_is_not_a_literal() {
        // The digit run is read before unary minus applies.
        let mut lexer = Lexer::new("-9223372036854775808");
        assert_eq!(lexer.next_token().unwrap().0, Token::Minus);
        assert_eq!(lexer.next_token(),
                   Err(LexError::IntegerTooLarge { literal: "9223372036854775808".to_string(),
                                                   line:    1, }));
    }
}
