use crate::{
    ast::{Block, Statement},
    interpreter::parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses a block of statements.
    ///
    /// Blocks have no delimiters. Statements are parsed until one comes back
    /// as [`Statement::Empty`], which happens when the lookahead cannot start
    /// a statement (typically `else`, `end` or the end of input). That empty
    /// statement is kept as the last element; the enclosing rule then checks
    /// for its closing keyword.
    ///
    /// Grammar: `block := statement*`
    ///
    /// # Returns
    /// The parsed block, starting at the line of its first token.
    pub(crate) fn parse_block(&mut self) -> ParseResult<Block> {
        let line = self.line();
        let mut statements = Vec::new();
        self.nest()?;

        loop {
            let statement = self.parse_statement()?;
            let finished = matches!(statement, Statement::Empty);
            statements.push(statement);

            if finished {
                break;
            }
        }

        self.unnest(1);
        Ok(Block { statements, line })
    }
}
