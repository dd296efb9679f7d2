use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor: a prefixed factor or a primary expression.
    ///
    /// Unary operators are right-associative, so `- + x` is parsed as
    /// `-( +x )`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | integer | string | boolean | identifier
    ///             | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the input ends where a factor is needed.
    /// - `UnexpectedToken` for any other token that cannot start a factor.
    /// - `Expected` if a parenthesized expression is not closed.
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Expr> {
        let (token, line) = self.advance()?;

        match token {
            Token::Plus => self.parse_unary(UnaryOperator::Plus, line),
            Token::Minus => self.parse_unary(UnaryOperator::Negate, line),
            Token::Integer(n) => Ok(literal(LiteralValue::Integer(n), line)),
            Token::Str(s) => Ok(literal(LiteralValue::Text(s), line)),
            Token::Bool(b) => Ok(literal(LiteralValue::Bool(b), line)),
            Token::Identifier(name) => Ok(Expr::Variable { name, line }),
            Token::LParen => {
                self.nest()?;
                let expr = self.parse_expression()?;
                self.expect(&Token::RParen)?;
                self.unnest(1);
                Ok(expr)
            },
            Token::Eof => Err(ParseError::UnexpectedEndOfInput { line }),
            other => Err(ParseError::UnexpectedToken { token: format!("'{other}'"),
                                                       line }),
        }
    }

    fn parse_unary(&mut self, op: UnaryOperator, line: usize) -> ParseResult<Expr> {
        self.nest()?;
        let expr = self.parse_factor()?;
        self.unnest(1);
        Ok(Expr::UnaryOp { op,
                           expr: Box::new(expr),
                           line })
    }
}

const fn literal(value: LiteralValue, line: usize) -> Expr {
    Expr::Literal { value, line }
}
