use crate::{
    ast::Block,
    error::ParseError,
    interpreter::lexer::{Lexer, Spanned, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest tree the parser builds.
///
/// Every chained binary operator, unary operator, parenthesis and block adds
/// a level. Evaluating and dropping the tree recurse once per level.
pub const MAX_NESTING: usize = 256;

/// A recursive-descent parser with one token of lookahead.
///
/// The parser pulls tokens from its [`Lexer`] only as it needs them, so
/// lexing and parsing are interleaved. Each grammar rule is a method; the
/// methods are spread over the `parser` submodules by rule family.
///
/// # Example
/// ```
/// use wordscript::{
///     ast::{Expr, LiteralValue, Statement},
///     interpreter::parser::core::Parser,
/// };
///
/// let program = Parser::new("x is 1").unwrap().parse().unwrap();
///
/// assert_eq!(program.statements,
///            vec![Statement::Assignment { name:  "x".to_string(),
///                                         value: Expr::Literal { value: LiteralValue::Integer(1),
///                                                                line:  1, },
///                                         line:  1, },
///                 Statement::Empty]);
/// ```
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Spanned,
    depth:   usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and reads the first token.
    ///
    /// # Errors
    /// Returns a `ParseError::Lex` if the first token cannot be scanned.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer,
                  current,
                  depth: 0 })
    }

    /// Parses a whole program.
    ///
    /// Grammar: `program := block EOF`
    ///
    /// # Returns
    /// The top-level block of the program.
    ///
    /// # Errors
    /// Returns a `ParseError` if the tokens do not form a program, including
    /// when tokens remain after the last statement.
    pub fn parse(mut self) -> ParseResult<Block> {
        let program = self.parse_block()?;

        match &self.current {
            (Token::Eof, _) => Ok(program),
            (token, line) => Err(ParseError::UnexpectedToken { token: format!("'{token}'"),
                                                               line:  *line, }),
        }
    }

    /// The current lookahead token.
    pub(crate) const fn peek(&self) -> &Token {
        &self.current.0
    }

    /// The line of the current lookahead token.
    pub(crate) const fn line(&self) -> usize {
        self.current.1
    }

    /// Consumes the current token and returns it.
    pub(crate) fn advance(&mut self) -> ParseResult<Spanned> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it is `expected`, returning its line.
    ///
    /// # Errors
    /// Returns a `ParseError` describing the mismatch otherwise.
    pub(crate) fn expect(&mut self, expected: &Token) -> ParseResult<usize> {
        if self.peek() == expected {
            let (_, line) = self.advance()?;
            return Ok(line);
        }
        Err(self.mismatch(&format!("'{expected}'")))
    }

    /// Enters one more level of nesting.
    ///
    /// # Errors
    /// Returns `NestingTooDeep` once [`MAX_NESTING`] is exceeded.
    pub(crate) fn nest(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(ParseError::NestingTooDeep { line: self.line() });
        }
        Ok(())
    }

    /// Leaves `levels` levels entered with [`Parser::nest`].
    pub(crate) const fn unnest(&mut self, levels: usize) {
        self.depth -= levels;
    }

    /// Consumes an identifier and returns its name and line.
    pub(crate) fn expect_identifier(&mut self) -> ParseResult<(String, usize)> {
        if !matches!(self.peek(), Token::Identifier(_)) {
            return Err(self.mismatch("identifier"));
        }
        match self.advance()? {
            (Token::Identifier(name), line) => Ok((name, line)),
            (token, line) => Err(ParseError::UnexpectedToken { token: format!("'{token}'"),
                                                               line }),
        }
    }

    /// Builds the error for finding the current token where `expected` was
    /// required.
    pub(crate) fn mismatch(&self, expected: &str) -> ParseError {
        match &self.current {
            (Token::Eof, line) => ParseError::UnexpectedEndOfInput { line: *line },
            (found, line) => ParseError::Expected { expected: expected.to_string(),
                                                    found:    format!("'{found}'"),
                                                    line:     *line, },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOperator, Expr, LiteralValue, Statement, UnaryOperator};

    fn parse(source: &str) -> ParseResult<Block> {
        Parser::new(source)?.parse()
    }

    fn int(value: i64, line: usize) -> Expr {
        Expr::Literal { value: LiteralValue::Integer(value),
                        line }
    }

    fn var(name: &str, line: usize) -> Expr {
        Expr::Variable { name: name.to_string(),
                         line }
    }

    fn binary(left: Expr, op: BinaryOperator, right: Expr, line: usize) -> Expr {
        Expr::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line }
    }

    fn shown(source: &str) -> Expr {
        match parse(source).unwrap().statements.remove(0) {
            Statement::Print { expr, .. } => expr,
            other => panic!("expected a show statement, found {other:?}"),
        }
    }

    #[test]
    fn empty_program() {
        let program = parse("  # nothing here\n").unwrap();
        assert_eq!(program.statements, vec![Statement::Empty]);
    }

    #[test]
    fn flat_precedence_is_left_associative() {
        // 1 + 2 is 3      -- should become ((1 + 2) is 3)
        assert_eq!(shown("show 1 + 2 is 3"),
                   binary(binary(int(1, 1), BinaryOperator::Add, int(2, 1), 1),
                          BinaryOperator::Equal,
                          int(3, 1),
                          1));
    }

    #[test]
    fn comparison_does_not_bind_tighter_than_addition() {
        // 1 is 1 + 1      -- should become ((1 is 1) + 1)
        assert_eq!(shown("show 1 is 1 + 1"),
                   binary(binary(int(1, 1), BinaryOperator::Equal, int(1, 1), 1),
                          BinaryOperator::Add,
                          int(1, 1),
                          1));
    }

    #[test]
    fn multiplication_binds_tighter() {
        // 1 + 2 * 3       -- should become (1 + (2 * 3))
        assert_eq!(shown("show 1 + 2 * 3"),
                   binary(int(1, 1),
                          BinaryOperator::Add,
                          binary(int(2, 1), BinaryOperator::Mul, int(3, 1), 1),
                          1));
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(shown("show (1 + 2) * 3"),
                   binary(binary(int(1, 1), BinaryOperator::Add, int(2, 1), 1),
                          BinaryOperator::Mul,
                          int(3, 1),
                          1));
    }

    #[test]
    fn two_word_comparisons() {
        assert_eq!(shown("show a less than b"),
                   binary(var("a", 1), BinaryOperator::Less, var("b", 1), 1));
        assert_eq!(shown("show a greater than b"),
                   binary(var("a", 1), BinaryOperator::Greater, var("b", 1), 1));
        assert_eq!(shown("show a not is b"),
                   binary(var("a", 1), BinaryOperator::NotEqual, var("b", 1), 1));
    }

    #[test]
    fn symbolic_comparisons() {
        assert_eq!(shown("show a < b"), shown("show a less than b"));
        assert_eq!(shown("show a > b"), shown("show a greater than b"));
    }

    #[test]
    fn nested_unary_operators() {
        assert_eq!(shown("show - + 5"),
                   Expr::UnaryOp { op:   UnaryOperator::Negate,
                                   expr: Box::new(Expr::UnaryOp { op:   UnaryOperator::Plus,
                                                                  expr: Box::new(int(5, 1)),
                                                                  line: 1, }),
                                   line: 1, });
    }

    #[test]
    fn conditional_with_else() {
        let program = parse("if x then\n  show 1\nelse\n  show 2\nend").unwrap();
        assert_eq!(program.statements,
                   vec![Statement::Conditional { condition:  var("x", 1),
                                                 then_block: Block { statements:
                                                                         vec![Statement::Print { expr: int(1, 2),
                                                                                                 line: 2, },
                                                                              Statement::Empty],
                                                                     line:       2, },
                                                 else_block:
                                                     Some(Block { statements:
                                                                      vec![Statement::Print { expr: int(2, 4),
                                                                                              line: 4, },
                                                                           Statement::Empty],
                                                                  line:       4, }),
                                                 line:       1, },
                        Statement::Empty]);
    }

    #[test]
    fn conditional_without_else_and_empty_body() {
        let program = parse("if true then end").unwrap();
        assert_eq!(program.statements[0],
                   Statement::Conditional { condition:  Expr::Literal { value: true.into(),
                                                                        line:  1, },
                                            then_block: Block { statements: vec![Statement::Empty],
                                                                line:       1, },
                                            else_block: None,
                                            line:       1, });
    }

    #[test]
    fn while_loop() {
        let program = parse("loop while x greater than 0 do x is x - 1 end").unwrap();
        assert_eq!(program.statements[0],
                   Statement::WhileLoop { condition: binary(var("x", 1),
                                                            BinaryOperator::Greater,
                                                            int(0, 1),
                                                            1),
                                          body:      Block { statements:
                                                                 vec![Statement::Assignment { name:  "x".to_string(),
                                                                                              value:
                                                                                                  binary(var("x", 1),
                                                                                                         BinaryOperator::Sub,
                                                                                                         int(1, 1),
                                                                                                         1),
                                                                                              line:  1, },
                                                                      Statement::Empty],
                                                             line:       1, },
                                          line:      1, });
    }

    #[test]
    fn consecutive_statements_without_separators() {
        let program = parse("x is 1 y is x show y").unwrap();
        assert_eq!(program.statements.len(), 4);
    }

    #[test]
    fn bare_not_is_a_syntax_error() {
        assert_eq!(parse("show not 5 is 5"),
                   Err(ParseError::UnexpectedToken { token: "'not'".to_string(),
                                                     line:  1, }));
        assert!(parse("not 5 is 5").is_err());
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert_eq!(parse("show 1 )"),
                   Err(ParseError::UnexpectedToken { token: "')'".to_string(),
                                                     line:  1, }));
    }

    #[test]
    fn missing_end() {
        assert_eq!(parse("if x then\nshow 1\n"),
                   Err(ParseError::UnexpectedEndOfInput { line: 3 }));
    }

    #[test]
    fn assignment_requires_is() {
        assert_eq!(parse("x 5"),
                   Err(ParseError::Expected { expected: "'is'".to_string(),
                                              found:    "'5'".to_string(),
                                              line:     1, }));
    }

    #[test]
    fn less_requires_than() {
        assert!(matches!(parse("show 1 less 2"), Err(ParseError::Expected { .. })));
    }

    #[test]
    fn unclosed_parenthesis() {
        assert_eq!(parse("show (1 + 2"), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
    }

    #[test]
    fn lex_errors_surface_through_the_parser() {
        assert!(matches!(parse("x is 1 ? 2"), Err(ParseError::Lex(_))));
    }

    #[test]
    fn long_flat_chains_are_rejected() {
        let source = format!("show 1{}", " + 1".repeat(200_000));
        assert_eq!(parse(&source), Err(ParseError::NestingTooDeep { line: 1 }));
    }

    #[test]
    fn deep_parentheses_are_rejected() {
        let source = format!("show {}1{}",
                             "(".repeat(MAX_NESTING + 1),
                             ")".repeat(MAX_NESTING + 1));
        assert!(matches!(parse(&source), Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn deep_blocks_are_rejected() {
        let source = format!("{}{}",
                             "if true then ".repeat(MAX_NESTING + 1),
                             "end ".repeat(MAX_NESTING + 1));
        assert!(matches!(parse(&source), Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn nesting_below_the_limit_parses() {
        let depth = MAX_NESTING / 4;
        let source = format!("show {}1{}", "(".repeat(depth), ")".repeat(depth));
        assert!(parse(&source).is_ok());
    }

    #[test]
    fn nesting_is_released_between_expressions() {
        // Each statement starts from the depth of its block.
        let source = format!("x is 1{}\n", " + 1".repeat(MAX_NESTING / 2)).repeat(5);
        assert!(parse(&source).is_ok());
    }
}
