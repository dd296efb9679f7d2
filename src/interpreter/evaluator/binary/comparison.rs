use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{core::EvalResult, utils::operand_error},
        value::core::Value,
    },
};

/// Maps an equality-style operator and a boolean equality result
/// to the final boolean value.
///
/// `NotEqual` inverts the result; any other operator passes it through.
#[must_use]
pub const fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::NotEqual => !is_equal,
        _ => is_equal,
    }
}

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// `is` and `not is` compare structurally and never fail: values of
/// different variants are simply unequal. `less than` and `greater than` are
/// defined only between integers.
///
/// # Example
/// ```
/// use wordscript::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let result = eval_comparison(BinaryOperator::Less, &Value::Integer(3), &Value::Integer(5), 1);
/// assert_eq!(result, Ok(Value::Bool(true)));
///
/// let result = eval_comparison(BinaryOperator::NotEqual, &Value::from("a"), &Value::Bool(true), 1);
/// assert_eq!(result, Ok(Value::Bool(true)));
/// ```
pub fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    match (op, left, right) {
        (BinaryOperator::Equal | BinaryOperator::NotEqual, ..) => {
            Ok(Value::Bool(equality_op_result(op, left == right)))
        },
        (BinaryOperator::Less, Value::Integer(a), Value::Integer(b)) => Ok(Value::Bool(a < b)),
        (BinaryOperator::Greater, Value::Integer(a), Value::Integer(b)) => Ok(Value::Bool(a > b)),
        _ => Err(operand_error(op, left, right, line)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    #[test]
    fn cross_variant_equality_is_false() {
        for (left, right) in [(Value::Integer(1), Value::Bool(true)),
                              (Value::from("1"), Value::Integer(1)),
                              (Value::from("true"), Value::Bool(true))]
        {
            assert_eq!(eval_comparison(BinaryOperator::Equal, &left, &right, 1),
                       Ok(Value::Bool(false)));
        }
    }

    #[test]
    fn strings_compare_by_content() {
        assert_eq!(eval_comparison(BinaryOperator::Equal, &Value::from("ab"), &Value::from("ab"), 1),
                   Ok(Value::Bool(true)));
    }

    #[test]
    fn ordering_requires_integers() {
        assert_eq!(eval_comparison(BinaryOperator::Less, &Value::Integer(3), &Value::from("a"), 5),
                   Err(RuntimeError::TypeError { details: "'less than' is not defined for integer \
                                                           and string"
                                                                      .to_string(),
                                                 line:    5, }));
        assert!(eval_comparison(BinaryOperator::Greater,
                                &Value::Bool(true),
                                &Value::Bool(false),
                                1).is_err());
    }
}
