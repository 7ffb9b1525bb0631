use crate::{
    ast::{Expr, UnaryOperator},
    config::UnknownFactorPolicy,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Node, ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor, the highest precedence level.
    ///
    /// Signs are right-associative, so `-+5` is parsed as `-(+5)`.
    /// Parentheses are consumed here and leave no node in the tree. Signs and
    /// parentheses each open one nesting level.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | integer
    ///             | "(" expression ")"
    /// ```
    ///
    /// Any other lookahead is rejected, or read as a `0` literal without being
    /// consumed under [`UnknownFactorPolicy::Zero`].
    ///
    /// # Returns
    /// An [`Expr::UnaryOp`], an [`Expr::Number`] or the parenthesized
    /// expression.
    pub(super) fn parse_factor(&mut self) -> ParseResult<Node> {
        let position = self.current.position;
        match self.current.token {
            Token::Plus => self.nested(position, |p| p.parse_sign(UnaryOperator::Plus)),
            Token::Minus => self.nested(position, |p| p.parse_sign(UnaryOperator::Negate)),
            Token::Integer(value) => {
                self.eat(Token::Integer(value))?;
                self.node(Expr::Number { value, position }, 1)
            },
            Token::LParen => self.nested(position, |p| {
                                     p.eat(Token::LParen)?;
                                     let inner = p.parse_additive()?;
                                     p.eat(Token::RParen)?;
                                     Ok(inner)
                                 }),
            found => match self.config.unknown_factor {
                UnknownFactorPolicy::Reject => Err(ParseError::ExpectedFactor { found, position }),
                UnknownFactorPolicy::Zero => {
                    log::debug!("reading {found} at {position} as 0");
                    self.node(Expr::Number { value: 0, position }, 1)
                },
            },
        }
    }

    /// Parses a signed factor; the lookahead is the sign token.
    fn parse_sign(&mut self, op: UnaryOperator) -> ParseResult<Node> {
        let position = self.current.position;
        self.eat(self.current.token)?;
        let operand = self.parse_factor()?;
        self.node(Expr::UnaryOp { op,
                                  expr: Box::new(operand.expr),
                                  position },
                  operand.height + 1)
    }
}
