/// Binary operator evaluation.
///
/// Implements checked integer arithmetic for `+`, `-`, `*` and `/`.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements the identity and negation signs.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the tree walk and the `EvalResult` type.
pub mod core;
