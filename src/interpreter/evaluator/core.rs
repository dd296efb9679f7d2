use std::io::Write;

use crate::{
    ast::{Block, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::core::eval_binary, unary::eval_unary},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// A `Context` is one interpreter instance: the variables assigned so far and
/// the sink that `show` writes to. Two contexts never share state.
///
/// ## Usage
///
/// Create a context over any [`Write`] implementation, then hand it parsed
/// programs with [`Context::interpret`]. Variables persist across calls, so a
/// program may be fed in several pieces.
///
/// ```
/// use wordscript::interpreter::{
///     evaluator::core::Context, parser::core::Parser, value::core::Value,
/// };
///
/// let program = Parser::new("x is 6 * 7 show x").unwrap().parse().unwrap();
/// let mut context = Context::new(Vec::new());
/// context.interpret(&program).unwrap();
///
/// assert_eq!(context.environment().get("x"), Some(&Value::Integer(42)));
/// assert_eq!(context.output(), b"42\n");
/// ```
pub struct Context<W: Write> {
    environment: Environment,
    output:      W,
}

impl<W: Write> Context<W> {
    /// Creates a context with an empty environment that prints to `output`.
    #[must_use]
    pub fn new(output: W) -> Self {
        Self { environment: Environment::default(),
               output }
    }

    /// Runs a whole program.
    ///
    /// Execution stops at the first error; statements that ran before it keep
    /// their effects on the environment and the output.
    pub fn interpret(&mut self, program: &Block) -> EvalResult<()> {
        self.exec_block(program)
    }

    /// Executes a single statement.
    ///
    /// The statement is dispatched on its variant: assignments update the
    /// environment, blocks run their statements in order, conditionals and
    /// loops evaluate their conditions, and `show` writes to the output.
    /// `Empty` does nothing.
    pub fn exec(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Assignment { name, value, .. } => self.exec_assignment(name, value),
            Statement::Block(block) => self.exec_block(block),
            Statement::Conditional { condition,
                                     then_block,
                                     else_block,
                                     .. } => {
                self.exec_conditional(condition, then_block, else_block.as_ref())
            },
            Statement::WhileLoop { condition, body, .. } => self.exec_while(condition, body),
            Statement::Print { expr, line } => self.exec_print(expr, *line),
            Statement::Empty => Ok(()),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands are evaluated before their operator is applied, the left
    /// operand of a binary operator first.
    ///
    /// # Example
    /// ```
    /// use wordscript::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new(std::io::sink());
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: 2.into(),
    ///                                                             line:  1, }),
    ///                             op:    BinaryOperator::Less,
    ///                             right: Box::new(Expr::Literal { value: 3.into(),
    ///                                                             line:  1, }),
    ///                             line:  1, };
    ///
    /// assert_eq!(context.eval(&expr), Ok(Value::Bool(true)));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, &left, &right, *line)
            },
        }
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    pub(crate) const fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// The output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    pub(crate) const fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the context and returns its output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Consumes the context and returns its environment.
    #[must_use]
    pub fn into_environment(self) -> Environment {
        self.environment
    }
}
