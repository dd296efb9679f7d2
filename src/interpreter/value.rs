/// The runtime value type.
///
/// Defines [`core::Value`], conversions from literals and Rust primitives,
/// and the checked accessors used by the evaluator.
pub mod core;
