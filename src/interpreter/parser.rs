/// Parser state, token consumption and the top-level entry point.
///
/// Holds the lookahead token and the lexer it is pulled from, and defines
/// `ParseResult`.
pub mod core;

/// Binary operator precedence levels.
///
/// Implements the `expression` and `term` rules as left folds over `+`/`-`
/// and `*`/`/`.
pub mod binary;

/// Factors: signs, literals and parenthesized groups.
pub mod unary;
