#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to values it is not defined for.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A condition evaluated to something other than a boolean.
    ExpectedBoolean {
        /// The value that was found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing the output of `show` failed.
    Output {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::ExpectedBoolean { found, line } => {
                write!(f, "Error on line {line}: Expected boolean condition, found {found}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
