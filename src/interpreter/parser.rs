/// Core parsing entry points.
///
/// Declares the [`core::Parser`] type, its token cursor, and the program-level
/// rule.
pub mod core;

/// Statement parsing.
///
/// Handles assignments, conditionals, loops and `show`, dispatching on the
/// leading token of each statement.
pub mod statement;

/// Block parsing.
///
/// Collects statements until one of them is empty, which is how a block
/// notices that the enclosing construct's closing keyword has been reached.
pub mod block;

/// Binary operator parsing.
///
/// Implements the two precedence levels: the flat comparison/additive level
/// and the multiplicative level.
pub mod binary;

/// Unary operator parsing.
///
/// Parses prefix `+` and `-` and primary expressions (literals, variables,
/// and parenthesized expressions).
pub mod unary;
