/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: empty input, unexpected tokens, invalid characters and oversized
/// literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, overflow and type mismatches.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
