//! # calcrs
//!
//! calcrs is a safe arithmetic expression evaluator written in Rust.
//! It parses a line of text into a tree and evaluates it using only a closed
//! set of numeric operators: `+ - * / // % ^` (with `**` as an alias for
//! `^`), unary signs and parentheses. Nothing else in the input can ever be
//! executed.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Options,
    error::CalcError,
    interpreter::{evaluator::core::Evaluator, parse_with, value::core::Value},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the closed operator enums that
/// represent an expression as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines literal, unary and binary expression nodes.
/// - Defines the whitelist of operators as exhaustive enums.
/// - Attaches source positions to nodes for error reporting.
pub mod ast;
/// Evaluation limits.
///
/// Holds the `Options` struct and its defaults, such as the maximum nesting
/// depth accepted by the parser.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression, and classifies them into error kinds.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together lexing, parsing, evaluation and value
/// representation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides entry points for parsing expression text.
pub mod interpreter;
/// General utilities for numeric conversion.
pub mod util;

/// Evaluates an arithmetic expression with default options.
///
/// See [`evaluate_with`].
///
/// # Examples
/// ```
/// use calcrs::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Value::Integer(14));
/// assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), Value::Integer(512));
/// assert_eq!(evaluate("-2 ^ 2").unwrap(), Value::Integer(-4));
///
/// // True division is real, but whole results are shown as integers.
/// assert_eq!(evaluate("10 / 2").unwrap(), Value::Integer(5));
/// assert!(evaluate("10 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, CalcError> {
    evaluate_with(source, &Options::default())
}

/// Evaluates an arithmetic expression.
///
/// The text is parsed into a tree, the tree is evaluated, and the result is
/// normalized once: a whole-valued real becomes an integer. Each call is
/// independent; the same input always yields the same output.
///
/// # Errors
/// Returns a `CalcError` wrapping the first `ParseError` or `RuntimeError`
/// encountered. No partial result is ever produced.
pub fn evaluate_with(source: &str, options: &Options) -> Result<Value, CalcError> {
    let expr = parse_with(source, options)?;
    let value = Evaluator::eval(&expr)?;
    Ok(value.normalize())
}
