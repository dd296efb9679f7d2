use std::fmt;

use crate::{ast::LiteralValue, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to one of these. There is no implicit
/// conversion between variants: operators check the variants they receive and
/// report a type error for anything they are not defined on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A string of text.
    Text(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparisons and literals. Conditions of `if` and
    /// `loop while` must evaluate to `Bool`.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Text(s) => Self::Text(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
        }
    }
}

impl Value {
    /// Converts the value to `i64`, or returns a type error if it is not an
    /// integer.
    ///
    /// # Parameters
    /// - `op`: Name of the operation, used in the error message.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use wordscript::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_integer("+", 1), Ok(10));
    /// assert!(Value::from("ten").as_integer("+", 1).is_err());
    /// ```
    pub fn as_integer(&self, op: &str, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(RuntimeError::TypeError { details: format!("'{op}' is not defined for {}",
                                                                self.type_name()),
                                               line }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for the conditions of `if` and `loop while`.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::ExpectedBoolean)`: If not boolean.
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { found: self.type_name().to_string(),
                                                     line }),
        }
    }

    /// The name of the value's variant as it appears in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Text(_) => "string",
            Self::Bool(_) => "boolean",
        }
    }
}

/// Formats the value the way `show` prints it: integers in decimal, text
/// verbatim and booleans as `true` or `false`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
