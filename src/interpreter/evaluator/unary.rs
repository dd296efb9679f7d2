use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// Both operators are defined on integers only:
/// - `Plus`: the identity.
/// - `Negate`: arithmetic negation; negating `i64::MIN` overflows.
///
/// # Example
/// ```
/// use wordscript::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
/// assert_eq!(v, Value::Integer(-5));
///
/// assert!(eval_unary(UnaryOperator::Plus, &Value::Bool(true), 1).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
    let n = value.as_integer(&op.to_string(), line)?;

    match op {
        UnaryOperator::Plus => Ok(Value::Integer(n)),
        UnaryOperator::Negate => n.checked_neg()
                                  .map(Value::Integer)
                                  .ok_or(RuntimeError::Overflow { line }),
    }
}
