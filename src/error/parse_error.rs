use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The source string was empty.
    EmptyInput,
    /// The parser required a specific token and found another one.
    UnexpectedToken {
        /// The token the grammar required.
        expected: Token,
        /// The token encountered.
        found:    Token,
        /// Byte offset of the token encountered.
        position: usize,
    },
    /// A factor (number, sign or parenthesized group) was required.
    ExpectedFactor {
        /// The token encountered.
        found:    Token,
        /// Byte offset of the token encountered.
        position: usize,
    },
    /// A character that does not belong to the language.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// Found extra tokens after the expression was complete.
    UnexpectedTrailingTokens {
        /// The first extra token.
        found:    Token,
        /// Byte offset of the first extra token.
        position: usize,
    },
    /// Parentheses, signs or operator chains nest deeper than the configured
    /// limit.
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Byte offset of the token that went past the limit.
        position: usize,
    },
    /// An integer literal was too large to be represented safely.
    LiteralTooLarge {
        /// Byte offset of the literal.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset the error refers to, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => None,
            Self::UnexpectedToken { position, .. }
            | Self::ExpectedFactor { position, .. }
            | Self::InvalidCharacter { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::NestingTooDeep { position, .. }
            | Self::LiteralTooLarge { position } => Some(*position),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error: Input can't be empty."),

            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => write!(f,
                                                          "Error at position {position}: Expected {expected} but found {found}."),

            Self::ExpectedFactor { found, position } => write!(f,
                                                               "Error at position {position}: Expected a number, sign or '(' but found {found}."),

            Self::InvalidCharacter { character, position } => {
                write!(f, "Error at position {position}: Invalid character {character:?}.")
            },

            Self::UnexpectedTrailingTokens { found, position } => write!(f,
                                                                         "Error at position {position}: Extra tokens after expression, starting with {found}."),

            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at position {position}: Expression nests deeper than {limit} levels."),

            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
