use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{Node, ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// This is the entry point for expression parsing and the lowest
    /// precedence level. Handles left-associative binary operators: `+` and
    /// `-`, so `10 - 2 - 3` groups as `(10 - 2) - 3`.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` tree representing the parsed expression.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        Ok(self.parse_additive()?.expr)
    }

    pub(super) fn parse_additive(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_term()?;
        while let Some(op) = token_to_binary_operator(self.current.token)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            left = self.fold(left, op, Self::parse_term)?;
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators `*` and `/`. Since
    /// [`Parser::parse_expression`] builds on terms, these bind tighter than
    /// `+` and `-`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    ///
    /// # Returns
    /// A binary expression tree combining factor-level nodes.
    pub(super) fn parse_term(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_factor()?;
        while let Some(op) = token_to_binary_operator(self.current.token)
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            left = self.fold(left, op, Self::parse_factor)?;
        }
        Ok(left)
    }

    /// Consumes the operator in the lookahead, parses the right operand with
    /// `operand` and combines both sides into one node.
    fn fold(&mut self,
            left: Node,
            op: BinaryOperator,
            operand: fn(&mut Self) -> ParseResult<Node>)
            -> ParseResult<Node> {
        let position = self.current.position;
        self.eat(self.current.token)?;
        let right = operand(self)?;
        let height = left.height.max(right.height) + 1;
        self.node(Expr::BinaryOp { left: Box::new(left.expr),
                                   op,
                                   right: Box::new(right.expr),
                                   position },
                  height)
    }
}

/// Maps an operator token to its binary operator.
const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
