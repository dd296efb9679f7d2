/// Binary operator evaluation logic.
///
/// Handles arithmetic on integers and the equality and ordering
/// comparisons.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements unary plus and arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine and the runtime context that owns the
/// environment and the output sink.
pub mod core;

/// Statement execution helpers.
///
/// Variable lookup, assignment, blocks, conditionals, loops and `show`.
pub mod utils;
