use crate::{
    ast::Expr,
    config::Config,
    error::ParseError,
    interpreter::lexer::{Lexer, Spanned, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed subtree together with its height (a literal has height 1).
pub(super) struct Node {
    pub(super) expr:   Expr,
    pub(super) height: usize,
}

/// Recursive-descent parser with a single token of lookahead.
///
/// The parser owns its [`Lexer`] and pulls tokens from it on demand; there is
/// no separate tokenization pass. Whitespace tokens never reach the grammar
/// rules: every fetch goes through [`Parser::next_significant`], including
/// the one that primes the lookahead.
///
/// The grammar rules live next to the operators they handle:
/// `parse_expression` and `parse_term` in `binary.rs`, `parse_factor` in
/// `unary.rs`.
///
/// Both the recursion of the grammar rules and the height of the tree being
/// built are capped at [`Config::max_depth`], so neither parsing nor the
/// later evaluation and drop of the tree can exhaust the stack.
pub struct Parser<'src> {
    lexer:              Lexer<'src>,
    pub(super) current: Spanned,
    pub(super) config:  Config,
    depth:              usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and primes the lookahead token.
    ///
    /// # Errors
    /// Returns [`ParseError::EmptyInput`] for an empty source, or any lexing
    /// error raised by the first significant token.
    pub fn new(source: &'src str, config: Config) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source, config.invalid_character)?;
        let current = Self::next_significant(&mut lexer)?;
        Ok(Self { lexer,
                  current,
                  config,
                  depth: 0 })
    }

    /// Parses the whole input as one expression.
    ///
    /// With [`Config::require_end`] set, anything left after the expression is
    /// an error; otherwise it is ignored.
    ///
    /// # Example
    /// ```
    /// use intexpr::{config::Config, interpreter::parser::core::Parser};
    ///
    /// let expr = Parser::new("2 + 3 * 4", Config::strict()).unwrap().parse().unwrap();
    /// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
    ///
    /// assert!(Parser::new("1 2", Config::strict()).unwrap().parse().is_err());
    /// assert!(Parser::new("1 2", Config::lenient()).unwrap().parse().is_ok());
    /// ```
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        if self.config.require_end && self.current.token != Token::EndOfInput {
            return Err(ParseError::UnexpectedTrailingTokens { found:    self.current.token,
                                                              position: self.current.position, });
        }
        log::debug!("parsed {expr}");
        Ok(expr)
    }

    /// Consumes the lookahead if it equals `expected`.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] when the lookahead differs, or
    /// any lexing error raised while fetching the next token.
    pub(super) fn eat(&mut self, expected: Token) -> ParseResult<()> {
        if self.current.token == expected {
            self.current = Self::next_significant(&mut self.lexer)?;
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected,
                                              found: self.current.token,
                                              position: self.current.position })
        }
    }

    /// Runs `rule` one nesting level deeper, failing at `position` once the
    /// configured depth is used up.
    pub(super) fn nested<T>(&mut self,
                            position: usize,
                            rule: impl FnOnce(&mut Self) -> ParseResult<T>)
                            -> ParseResult<T> {
        if self.depth >= self.config.max_depth {
            return Err(self.too_deep(position));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Pairs `expr` with `height`, rejecting trees taller than the limit.
    pub(super) fn node(&self, expr: Expr, height: usize) -> ParseResult<Node> {
        if height > self.config.max_depth {
            return Err(self.too_deep(expr.position()));
        }
        Ok(Node { expr, height })
    }

    const fn too_deep(&self, position: usize) -> ParseError {
        ParseError::NestingTooDeep { limit: self.config.max_depth,
                                     position }
    }

    /// Fetches the next token that is not whitespace.
    fn next_significant(lexer: &mut Lexer<'src>) -> ParseResult<Spanned> {
        loop {
            let next = lexer.next_token()?;
            if next.token != Token::Whitespace {
                return Ok(next);
            }
        }
    }
}
