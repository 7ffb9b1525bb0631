/// What the lexer does with a character outside digits, whitespace and
/// `+ - * / ( )`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidCharacterPolicy {
    /// Fail with [`crate::error::ParseError::InvalidCharacter`].
    #[default]
    Reject,
    /// Skip the character and report end of input, which silently ends the
    /// expression at that point.
    EndOfInput,
}

/// What the parser does when a factor starts with a token that cannot begin
/// one (a `*`, a `)`, end of input, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFactorPolicy {
    /// Fail with [`crate::error::ParseError::ExpectedFactor`].
    #[default]
    Reject,
    /// Produce a `0` literal without consuming the token.
    Zero,
}

/// Default for [`Config::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parsing configuration.
///
/// The defaults reject every malformed input. [`Config::lenient`] restores
/// the permissive behavior of the classic interpreter this grammar comes
/// from: unknown characters end the input, missing factors read as `0` and
/// anything left over after the expression is ignored.
///
/// # Example
/// ```
/// use intexpr::{config::Config, get_result, interpreter::value::Value};
///
/// assert!(get_result("1 + a", Config::strict()).is_err());
/// assert_eq!(get_result("1 + a", Config::lenient()).unwrap(), Value::Number(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Handling of unrecognized characters.
    pub invalid_character: InvalidCharacterPolicy,
    /// Handling of tokens that cannot start a factor.
    pub unknown_factor:    UnknownFactorPolicy,
    /// Whether the input must be fully consumed by the expression.
    pub require_end:       bool,
    /// Deepest nesting of parentheses and signs, and tallest tree, the
    /// parser accepts. Parsing, evaluation and dropping the tree all recurse
    /// once per level, so this bounds their stack use.
    pub max_depth:         usize,
}

impl Config {
    /// Every malformed input is an error. Same as [`Config::default`].
    #[must_use]
    pub const fn strict() -> Self {
        Self { invalid_character: InvalidCharacterPolicy::Reject,
               unknown_factor:    UnknownFactorPolicy::Reject,
               require_end:       true,
               max_depth:         DEFAULT_MAX_DEPTH, }
    }

    /// The permissive behavior of the classic interpreter.
    #[must_use]
    pub const fn lenient() -> Self {
        Self { invalid_character: InvalidCharacterPolicy::EndOfInput,
               unknown_factor:    UnknownFactorPolicy::Zero,
               require_end:       false,
               max_depth:         DEFAULT_MAX_DEPTH, }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::strict()
    }
}
