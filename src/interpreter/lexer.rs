use logos::Logos;

use crate::{config::InvalidCharacterPolicy, error::ParseError, interpreter::parser::core::ParseResult};

/// Failures reported by the generated `logos` lexer.
///
/// These never leave this module; [`Lexer::next_token`] turns them into
/// [`ParseError`]s with a source position attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// A character that starts no token.
    #[default]
    InvalidCharacter,
    /// A digit run that does not fit in an `i64`.
    LiteralTooLarge,
}

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexError)]
pub enum Token {
    /// Integer literal tokens, such as `42`. Signs are separate tokens.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A run of whitespace, newlines included.
    #[regex(r"\s+")]
    Whitespace,
    /// Produced once the source is exhausted, never matched from text.
    EndOfInput,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "integer {n}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Whitespace => write!(f, "whitespace"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A token together with the byte offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned {
    /// The token itself.
    pub token:    Token,
    /// Byte offset into the source. End of input sits at the source length.
    pub position: usize,
}

/// Pull-based lexer over one source string.
///
/// Wraps the generated `logos` lexer and hands out one [`Spanned`] token per
/// call. Whitespace is reported as [`Token::Whitespace`] rather than skipped,
/// leaving the decision to the parser.
///
/// # Example
/// ```
/// use intexpr::{config::InvalidCharacterPolicy, interpreter::lexer::{Lexer, Token}};
///
/// let mut lexer = Lexer::new("12 +", InvalidCharacterPolicy::Reject).unwrap();
/// assert_eq!(lexer.next_token().unwrap().token, Token::Integer(12));
/// assert_eq!(lexer.next_token().unwrap().token, Token::Whitespace);
/// assert_eq!(lexer.next_token().unwrap().token, Token::Plus);
/// assert_eq!(lexer.next_token().unwrap().token, Token::EndOfInput);
/// assert_eq!(lexer.next_token().unwrap().token, Token::EndOfInput);
/// ```
pub struct Lexer<'src> {
    inner:  logos::Lexer<'src, Token>,
    policy: InvalidCharacterPolicy,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    ///
    /// # Errors
    /// Returns [`ParseError::EmptyInput`] if `source` is empty.
    pub fn new(source: &'src str, policy: InvalidCharacterPolicy) -> ParseResult<Self> {
        if source.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Ok(Self { inner: Token::lexer(source),
                  policy })
    }

    /// Produces the next token.
    ///
    /// Once the source is exhausted every call yields [`Token::EndOfInput`]
    /// positioned at the source length.
    ///
    /// # Errors
    /// - [`ParseError::LiteralTooLarge`] for integer literals outside `i64`.
    /// - [`ParseError::InvalidCharacter`] for unknown characters, unless the
    ///   policy is [`InvalidCharacterPolicy::EndOfInput`].
    pub fn next_token(&mut self) -> ParseResult<Spanned> {
        let Some(result) = self.inner.next() else {
            return Ok(Spanned { token:    Token::EndOfInput,
                                position: self.inner.source().len(), });
        };
        let position = self.inner.span().start;
        let spanned = match result {
            Ok(token) => Spanned { token, position },
            Err(LexError::LiteralTooLarge) => return Err(ParseError::LiteralTooLarge { position }),
            Err(LexError::InvalidCharacter) => {
                let character = self.inner.source()[position..].chars()
                                                               .next()
                                                               .unwrap_or_default();
                match self.policy {
                    InvalidCharacterPolicy::Reject => {
                        return Err(ParseError::InvalidCharacter { character, position });
                    },
                    InvalidCharacterPolicy::EndOfInput => {
                        log::debug!("treating {character:?} at {position} as end of input");
                        Spanned { token: Token::EndOfInput,
                                  position }
                    },
                }
            },
        };
        log::trace!("token {} at {}", spanned.token, spanned.position);
        Ok(spanned)
    }
}

/// Parses an integer literal from the current token slice.
///
/// The regex only admits ASCII digits, so the only possible failure is
/// overflow.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}
