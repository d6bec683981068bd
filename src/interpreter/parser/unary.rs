use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Supports prefix operators:
    /// - `+`  (identity)
    /// - `-`  (numeric negation)
    ///
    /// Unary operators are right-associative, so an input like `-+x` is parsed
    /// as `-( +x )`. They bind looser than exponentiation, so `-2^2` is
    /// `-(2^2)`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("+" | "-") unary
    ///            | exponent
    /// ```
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Expr> {
        let op = match self.peek() {
            Some((Token::Plus, position)) => (UnaryOperator::Plus, *position),
            Some((Token::Minus, position)) => (UnaryOperator::Negate, *position),
            _ => return self.parse_exponent(),
        };

        self.advance();
        let expr = self.nested(Self::parse_unary)?;
        Ok(Expr::UnaryOp { op:       op.0,
                           expr:     Box::new(expr),
                           position: op.1, })
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Primary expressions are numeric literals and parenthesized
    /// expressions.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// `UnexpectedToken` or `UnexpectedEndOfInput` when an operand is missing,
    /// as in `2 *` or `* 2`.
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> ParseResult<Expr> {
        const EXPECTED: &str = "a number or '('";

        match self.peek() {
            Some((Token::Integer(n), position)) => {
                self.advance();
                Ok(Expr::Literal { value:    (*n).into(),
                                   position: *position, })
            },
            Some((Token::Real(r), position)) => {
                self.advance();
                Ok(Expr::Literal { value:    (*r).into(),
                                   position: *position, })
            },
            Some((Token::LParen, _)) => self.parse_grouping(),
            Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                       expected: EXPECTED,
                                                                       position: *position, }),
            None => Err(ParseError::UnexpectedEndOfInput { expected: EXPECTED }),
        }
    }

    /// Parses a grouped expression enclosed in parentheses.
    ///
    /// # Errors
    /// - `EmptyGroup` for `()`.
    /// - `ExpectedClosingParen` when the input ends before the matching `)`.
    /// - `UnexpectedToken` when something other than `)` follows the inner
    ///   expression, as in `(1 2)`.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        let Some((_, open)) = self.advance() else {
            return Err(ParseError::UnexpectedEndOfInput { expected: "'('" });
        };
        let open = *open;

        match self.peek() {
            Some((Token::RParen, _)) => return Err(ParseError::EmptyGroup { position: open }),
            None => return Err(ParseError::ExpectedClosingParen { position: open }),
            _ => {},
        }

        let expr = self.nested(Self::parse_expression)?;

        match self.advance() {
            Some((Token::RParen, _)) => Ok(expr),
            Some((tok, position)) => Err(ParseError::UnexpectedToken { token:    tok.to_string(),
                                                                       expected: "')'",
                                                                       position: *position, }),
            None => Err(ParseError::ExpectedClosingParen { position: open }),
        }
    }
}
