#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// Rendering of the value that was found instead.
        found:    String,
        /// Byte offset of the operator that needed the number.
        position: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// Byte offset of the operator.
        position: usize,
    },
}

impl RuntimeError {
    /// Byte offset of the operator that failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::ExpectedNumber { position, .. }
            | Self::DivisionByZero { position }
            | Self::Overflow { position } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedNumber { found, position } => {
                write!(f, "Error at position {position}: Expected number, found {found}.")
            },
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
