use crate::{
    ast::Expr,
    config::Options,
    error::ParseError,
    interpreter::{lexer::tokenize, parser::core::Parser},
};

/// The evaluator module reduces an expression tree to a number.
///
/// The evaluator walks the AST bottom-up and applies only the whitelisted
/// arithmetic operators. It holds no state between calls.
///
/// # Responsibilities
/// - Evaluates literal, unary and binary nodes with exhaustive matching.
/// - Tracks integer versus real representation at each step.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw text and produces a stream of numeric literals,
/// operators and parentheses, each tagged with its character position.
///
/// # Responsibilities
/// - Skips whitespace between tokens.
/// - Classifies numeric literals as integer or real.
/// - Reports invalid characters, malformed literals and oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser implements operator precedence and associativity by recursive
/// descent and guards against pathological nesting.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Validates grammar: operands, parentheses and trailing tokens.
/// - Enforces the configured maximum nesting depth.
pub mod parser;
/// The value module defines the numeric result type.
///
/// # Responsibilities
/// - Defines the `Value` enum (integer or real).
/// - Promotes integers to reals for mixed arithmetic.
/// - Normalizes whole-valued reals for presentation.
pub mod value;

/// Parses expression text into an AST with default options.
///
/// # Errors
/// Returns a `ParseError` if the text is empty or not a valid expression.
///
/// # Example
/// ```
/// use calcrs::{ast::BinaryOperator, ast::Expr, interpreter::parse};
///
/// let expr = parse("2 ^ 3 ^ 2").unwrap();
/// let Expr::BinaryOp { op, right, .. } = expr else { panic!() };
///
/// assert_eq!(op, BinaryOperator::Pow);
/// assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Pow, .. }));
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_with(source, &Options::default())
}

/// Parses expression text into an AST.
///
/// Blank input is rejected before tokenizing, so it is reported as
/// `EmptyExpression` rather than as a syntax error.
///
/// # Errors
/// Returns a `ParseError` if the text is empty, contains characters outside
/// the expression alphabet, violates the grammar, or nests deeper than
/// `options.max_depth`.
pub fn parse_with(source: &str, options: &Options) -> Result<Expr, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let tokens = tokenize(source)?;
    Parser::new(&tokens, options).parse()
}
