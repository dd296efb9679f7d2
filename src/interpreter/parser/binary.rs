use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// Addition, subtraction and every comparison share one precedence level
    /// and associate to the left, so `1 + 2 is 3` parses as `(1 + 2) is 3`
    /// and `1 is 1 + 1` as `(1 is 1) + 1`.
    ///
    /// Grammar:
    /// ```text
    ///     expression := term (op term)*
    ///     op         := "+" | "-" | "is" | "not is" | "less" "than"
    ///                 | "greater" "than" | "<" | ">"
    /// ```
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree, or the single term if no operator follows.
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        let mut chain = 0;

        while let Some((op, line)) = self.parse_expression_operator()? {
            self.nest()?;
            chain += 1;
            let right = self.parse_term()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }
        self.unnest(chain);
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    pub(crate) fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        let mut chain = 0;

        loop {
            let op = match self.peek() {
                Token::Star => BinaryOperator::Mul,
                Token::Slash => BinaryOperator::Div,
                _ => break,
            };
            let (_, line) = self.advance()?;
            self.nest()?;
            chain += 1;
            let right = self.parse_factor()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }
        self.unnest(chain);
        Ok(left)
    }

    /// Consumes the operator of the expression level, if one is next.
    ///
    /// `less` and `greater` are only operators when followed by `than`, which
    /// is consumed as well.
    fn parse_expression_operator(&mut self) -> ParseResult<Option<(BinaryOperator, usize)>> {
        let Some(op) = token_to_binary_operator(self.peek()) else {
            return Ok(None);
        };
        let two_words = matches!(self.peek(), Token::Less | Token::Greater);

        let (_, line) = self.advance()?;
        if two_words {
            self.expect(&Token::Than)?;
        }
        Ok(Some((op, line)))
    }
}

/// Maps a token to the expression-level operator it starts.
///
/// Multiplicative operators are not included; they are handled by
/// [`Parser::parse_term`].
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Is => Some(BinaryOperator::Equal),
        Token::NotIs => Some(BinaryOperator::NotEqual),
        Token::Less | Token::LessSign => Some(BinaryOperator::Less),
        Token::Greater | Token::GreaterSign => Some(BinaryOperator::Greater),
        _ => None,
    }
}
