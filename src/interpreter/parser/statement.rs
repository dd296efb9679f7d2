use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - an assignment, when the lookahead is an identifier.
    /// - a conditional, led by `if`.
    /// - a while loop, led by `loop`.
    /// - a print statement, led by `show`.
    ///
    /// Any other lookahead yields [`Statement::Empty`] without consuming
    /// input.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.peek() {
            Token::Identifier(_) => self.parse_assignment(),
            Token::If => self.parse_conditional(),
            Token::Loop => self.parse_while_loop(),
            Token::Show => self.parse_print(),
            _ => Ok(Statement::Empty),
        }
    }

    /// Parses an assignment.
    ///
    /// Grammar: `assignment := identifier "is" expression`
    fn parse_assignment(&mut self) -> ParseResult<Statement> {
        let (name, line) = self.expect_identifier()?;
        self.expect(&Token::Is)?;
        let value = self.parse_expression()?;

        Ok(Statement::Assignment { name, value, line })
    }

    /// Parses a conditional with an optional `else` branch.
    ///
    /// Grammar: `conditional := "if" expression "then" block ("else" block)? "end"`
    ///
    /// # Errors
    /// - `Expected` if `then` or `end` is missing.
    /// - Propagates any errors from the condition or the blocks.
    fn parse_conditional(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::If)?;
        let condition = self.parse_expression()?;
        self.expect(&Token::Then)?;
        let then_block = self.parse_block()?;

        let else_block = if matches!(self.peek(), Token::Else) {
            self.advance()?;
            Some(self.parse_block()?)
        } else {
            None
        };
        self.expect(&Token::End)?;

        Ok(Statement::Conditional { condition,
                                    then_block,
                                    else_block,
                                    line })
    }

    /// Parses a while loop.
    ///
    /// Grammar: `while_loop := "loop" "while" expression "do" block "end"`
    fn parse_while_loop(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::Loop)?;
        self.expect(&Token::While)?;
        let condition = self.parse_expression()?;
        self.expect(&Token::Do)?;
        let body = self.parse_block()?;
        self.expect(&Token::End)?;

        Ok(Statement::WhileLoop { condition,
                                  body,
                                  line })
    }

    /// Parses a print statement.
    ///
    /// Grammar: `print := "show" expression`
    fn parse_print(&mut self) -> ParseResult<Statement> {
        let line = self.expect(&Token::Show)?;
        let expr = self.parse_expression()?;

        Ok(Statement::Print { expr, line })
    }
}
