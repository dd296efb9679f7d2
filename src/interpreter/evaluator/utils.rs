use std::io::Write;

use crate::{
    ast::{BinaryOperator, Block, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Builds the type error for a binary operator applied to operands it does
/// not support.
///
/// # Example
/// ```
/// use wordscript::{
///     ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::utils::operand_error,
///     interpreter::value::core::Value,
/// };
///
/// let err = operand_error(BinaryOperator::Add, &Value::from("a"), &Value::Integer(1), 3);
/// assert_eq!(err,
///            RuntimeError::TypeError { details: "'+' is not defined for string and integer"
///                                                   .to_string(),
///                                      line:    3, });
/// ```
#[must_use]
pub fn operand_error(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("'{op}' is not defined for {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}

impl<W: Write> Context<W> {
    /// Looks up a variable by name.
    ///
    /// # Returns
    /// A copy of the bound value, or `UnknownVariable` if the name was never
    /// assigned.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.environment()
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Evaluates `value` and binds it to `name`.
    ///
    /// A failing right-hand side leaves the environment untouched.
    pub fn exec_assignment(&mut self, name: &str, value: &Expr) -> EvalResult<()> {
        let value = self.eval(value)?;
        self.environment_mut().assign(name, value);
        Ok(())
    }

    /// Executes the statements of a block in order.
    ///
    /// Blocks do not open a scope: assignments inside them are visible
    /// afterwards.
    pub fn exec_block(&mut self, block: &Block) -> EvalResult<()> {
        for statement in &block.statements {
            self.exec(statement)?;
        }
        Ok(())
    }

    /// Executes an `if` statement.
    ///
    /// The condition must evaluate to a boolean. The `then` block runs when it
    /// is `true`; otherwise the `else` block runs, if there is one.
    pub fn exec_conditional(&mut self,
                            condition: &Expr,
                            then_block: &Block,
                            else_block: Option<&Block>)
                            -> EvalResult<()> {
        if self.eval(condition)?.as_bool(condition.line_number())? {
            self.exec_block(then_block)
        } else if let Some(else_block) = else_block {
            self.exec_block(else_block)
        } else {
            Ok(())
        }
    }

    /// Executes a `loop while` statement.
    ///
    /// The condition is evaluated before every iteration, including the
    /// first, and must be a boolean each time.
    pub fn exec_while(&mut self, condition: &Expr, body: &Block) -> EvalResult<()> {
        while self.eval(condition)?.as_bool(condition.line_number())? {
            self.exec_block(body)?;
        }
        Ok(())
    }

    /// Evaluates `expr` and writes it to the output followed by a newline.
    pub fn exec_print(&mut self, expr: &Expr, line: usize) -> EvalResult<()> {
        let value = self.eval(expr)?;
        writeln!(self.output_mut(), "{value}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                                 line })
    }
}
