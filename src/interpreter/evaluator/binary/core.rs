use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{comparison::eval_comparison, scalar::eval_scalar_op},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two values.
///
/// Arithmetic operators go to [`eval_scalar_op`]; equality and ordering
/// operators go to [`eval_comparison`].
///
/// # Example
/// ```
/// use wordscript::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4), 1);
/// assert_eq!(result, Ok(Value::Integer(7)));
///
/// let result = eval_binary(BinaryOperator::Equal, &Value::Integer(3), &Value::from("3"), 1);
/// assert_eq!(result, Ok(Value::Bool(false)));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

    match op {
        Add | Sub | Mul | Div => eval_scalar_op(op, left, right, line),
        Equal | NotEqual | Less | Greater => eval_comparison(op, left, right, line),
    }
}
