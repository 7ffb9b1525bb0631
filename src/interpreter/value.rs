use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// The arithmetic grammar only ever produces [`Value::Number`]. The remaining
/// variants keep room in the value model for non-numeric results, and the
/// evaluator rejects them wherever a number is required.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// A 64 bit signed integer.
    Number(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A string value.
    Str(String),
    /// The absence of a value.
    #[default]
    None,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl Value {
    /// Converts the value to an `i64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The number.
    /// - `Err(RuntimeError::ExpectedNumber)`: If the value is not a number.
    ///
    /// # Example
    /// ```
    /// use intexpr::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(10).as_number(0).unwrap(), 10);
    /// assert!(Value::Bool(true).as_number(0).is_err());
    /// ```
    pub fn as_number(&self, position: usize) -> EvalResult<i64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { found: self.type_name().to_string(),
                                                    position }),
        }
    }

    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::None => write!(f, "none"),
        }
    }
}
