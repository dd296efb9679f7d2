/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code: integers, strings and booleans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A string literal, taken verbatim from between the quotes.
    Text(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Expressions always produce a value. Each variant records the line it
/// started on for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value (integer, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use wordscript::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }
}

/// An ordered sequence of statements.
///
/// Blocks have no delimiters of their own; they end where the enclosing
/// construct's next keyword (`else`, `end`) or the end of input appears. A
/// parsed block always ends with the [`Statement::Empty`] that terminated it.
/// The whole program is a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Statements inside the block, in source order.
    pub statements: Vec<Statement>,
    /// Line number where the block starts.
    pub line:       usize,
}

/// Represents a statement.
///
/// Statements are executed for their effect on the environment and the
/// output; they produce no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `name is value`, binding a name to the value of an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A nested block of statements.
    Block(Block),
    /// `if condition then ... else ... end`
    Conditional {
        /// The condition; must evaluate to a boolean.
        condition:  Expr,
        /// Statements executed when the condition holds.
        then_block: Block,
        /// Statements executed otherwise, if an `else` was written.
        else_block: Option<Block>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `loop while condition do ... end`
    WhileLoop {
        /// The condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// `show expr`
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// No statement. Marks the end of a block.
    Empty,
}

/// Represents a binary operator.
///
/// All binary operators except `*` and `/` share a single precedence level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Integer division (`/`)
    Div,
    /// Equality (`is`)
    Equal,
    /// Inequality (`not is`)
    NotEqual,
    /// Less than (`less than` or `<`)
    Less,
    /// Greater than (`greater than` or `>`)
    Greater,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (e.g. `+x`), the identity on integers.
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "is",
            NotEqual => "not is",
            Less => "less than",
            Greater => "greater than",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}
