use crate::{
    ast::{BinaryOperator, Expr, Link},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`. A run of them
    /// becomes one flat [`Expr::Chain`], so a long sum costs no nesting.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let first = self.parse_multiplicative()?;
        let mut rest = Vec::new();
        while let Some((token, position)) = self.peek()
              && let Some(op) = token_to_binary_operator(token)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            self.advance();
            let operand = self.parse_multiplicative()?;
            rest.push(Link { op,
                             operand,
                             position: *position });
        }
        Ok(chain(first, rest))
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators: `*`, `/`, `//` and `%`.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
    pub(in crate::interpreter::parser) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let first = self.parse_unary()?;
        let mut rest = Vec::new();
        while let Some((token, position)) = self.peek()
              && let Some(op) = token_to_binary_operator(token)
              && matches!(op,
                          BinaryOperator::Mul
                          | BinaryOperator::Div
                          | BinaryOperator::FloorDiv
                          | BinaryOperator::Mod)
        {
            self.advance();
            let operand = self.parse_unary()?;
            rest.push(Link { op,
                             operand,
                             position: *position });
        }
        Ok(chain(first, rest))
    }

    /// Parses exponentiation expressions.
    ///
    /// The exponent is itself a signed factor, so `a ^ b ^ c` parses as
    /// `a ^ (b ^ c)` and `2 ^ -1` is accepted.
    ///
    /// The rule is: `exponent := primary (("^" | "**") unary)?`
    pub(in crate::interpreter::parser) fn parse_exponent(&mut self) -> ParseResult<Expr> {
        let base = self.parse_primary()?;
        if let Some((token, position)) = self.peek()
           && let Some(BinaryOperator::Pow) = token_to_binary_operator(token)
        {
            self.advance();
            let exponent = self.nested(Self::parse_unary)?;
            return Ok(Expr::BinaryOp { left:     Box::new(base),
                                       op:       BinaryOperator::Pow,
                                       right:    Box::new(exponent),
                                       position: *position, });
        }
        Ok(base)
    }
}

/// Wraps operands of one precedence level, leaving a lone operand as is.
fn chain(first: Expr, rest: Vec<Link>) -> Expr {
    if rest.is_empty() {
        first
    } else {
        Expr::Chain { first: Box::new(first),
                      rest }
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is one of the seven
/// arithmetic operators (`^` and `**` both map to `Pow`), and `None` for
/// every other token.
///
/// # Example
/// ```
/// use calcrs::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DoubleSlash),
///            Some(BinaryOperator::FloorDiv));
/// assert_eq!(token_to_binary_operator(&Token::DoubleStar),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleSlash => Some(BinaryOperator::FloorDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret | Token::DoubleStar => Some(BinaryOperator::Pow),
        _ => None,
    }
}
