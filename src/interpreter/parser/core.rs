use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::Expr,
    config::Options,
    error::ParseError,
    interpreter::lexer::Spanned,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a token slice.
///
/// Grammar, from lowest to highest precedence:
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/" | "//" | "%") factor)*
///     factor     := ("+" | "-") factor | power
///     power      := primary (("^" | "**") factor)?
///     primary    := NUMBER | "(" expression ")"
/// ```
/// A sign binds looser than `^` on its left (`-2^2` is `-(2^2)`) but may
/// prefix an exponent (`2^-1`). Powers are right-associative.
///
/// A parser is single-use: [`Parser::parse`] consumes it.
pub struct Parser<'a> {
    tokens:    Peekable<Iter<'a, Spanned>>,
    depth:     usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens` with the nesting limit from `options`.
    #[must_use]
    pub fn new(tokens: &'a [Spanned], options: &Options) -> Self {
        Self { tokens:    tokens.iter().peekable(),
               depth:     0,
               max_depth: options.max_depth, }
    }

    /// Parses the whole token stream into a single expression.
    ///
    /// # Errors
    /// - `EmptyExpression` when there are no tokens at all.
    /// - `UnexpectedTrailingTokens` when tokens remain after a complete
    ///   expression, as in `2 2`.
    /// - `NestingTooDeep` when groups, sign chains or exponents nest deeper
    ///   than the configured limit.
    /// - Any error raised by the grammar rules.
    ///
    /// # Example
    /// ```
    /// use calcrs::{
    ///     config::Options,
    ///     error::ParseError,
    ///     interpreter::{lexer::tokenize, parser::core::Parser},
    /// };
    ///
    /// let tokens = tokenize("2 + 2 3").unwrap();
    /// let err = Parser::new(&tokens, &Options::default()).parse().unwrap_err();
    ///
    /// assert!(matches!(err, ParseError::UnexpectedTrailingTokens { position: 6, .. }));
    /// ```
    pub fn parse(mut self) -> ParseResult<Expr> {
        if self.peek().is_none() {
            return Err(ParseError::EmptyExpression);
        }

        let expr = self.parse_expression()?;

        if let Some((token, position)) = self.tokens.next() {
            return Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                              position: *position, });
        }

        Ok(expr)
    }

    /// Parses a full expression, starting at the lowest precedence level.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_additive()
    }

    /// Returns the next token without consuming it.
    pub(in crate::interpreter::parser) fn peek(&mut self) -> Option<&'a Spanned> {
        self.tokens.peek().copied()
    }

    /// Consumes and returns the next token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Option<&'a Spanned> {
        self.tokens.next()
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// Every recursive rule (groups, sign chains, exponents) goes through
    /// here, which bounds the recursion depth of the parser and, later, of
    /// the evaluator. Operator chains are flat and never pass through here.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    rule: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}
