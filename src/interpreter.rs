/// The environment module stores variable bindings.
///
/// One [`environment::Environment`] belongs to each interpreter instance.
/// Blocks, conditionals and loops all read and write the same flat map of
/// names to values.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST produced by the parser, evaluates expressions
/// and executes statements against its environment, and writes the output of
/// `show` statements to its sink.
///
/// # Responsibilities
/// - Evaluates every expression and statement variant.
/// - Applies operator semantics with checked integer arithmetic.
/// - Reports runtime errors such as unknown variables, type mismatches and
///   division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens on demand, each
/// tagged with the line it started on. Keywords are English words; the only
/// two-word token it builds itself is `not is`.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line information.
/// - Skips whitespace and `#` comments.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with a single token of
/// lookahead. It pulls tokens from the lexer as it goes and stops at the first
/// syntax error.
///
/// # Responsibilities
/// - Converts tokens into statements, blocks and expressions.
/// - Applies the two precedence levels of binary operators.
/// - Reports syntax errors with the line they occurred on.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers, strings and booleans.
/// - Provides checked accessors that turn variant mismatches into errors.
/// - Formats values the way `show` prints them.
pub mod value;
