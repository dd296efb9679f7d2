use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::operand_error},
        value::core::Value,
    },
};

/// Evaluates an arithmetic operation on two integers.
///
/// Arithmetic is checked: a result outside the `i64` range is an `Overflow`
/// error. Division truncates toward zero and a zero divisor is a
/// `DivisionByZero` error. Any non-integer operand is a type error.
///
/// # Example
/// ```
/// use wordscript::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::scalar::eval_scalar_op, value::core::Value},
/// };
///
/// let result = eval_scalar_op(BinaryOperator::Div, &Value::Integer(-7), &Value::Integer(2), 1);
/// assert_eq!(result, Ok(Value::Integer(-3)));
/// ```
pub fn eval_scalar_op(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
        return Err(operand_error(op, left, right, line));
    };

    let result = match op {
        Add => a.checked_add(*b),
        Sub => a.checked_sub(*b),
        Mul => a.checked_mul(*b),
        Div => {
            if *b == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            a.checked_div(*b)
        },
        _ => return Err(operand_error(op, left, right, line)),
    };

    result.map(Value::Integer).ok_or(RuntimeError::Overflow { line })
}
