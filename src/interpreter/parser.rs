/// Parser state and entry point.
///
/// Holds the `Parser` type, the full-input parse with its trailing-token and
/// depth checks, and the nesting guard shared by the recursive rules.
pub mod core;

/// Unary and primary expressions.
///
/// Handles prefix signs, numeric literals and parenthesized groups.
pub mod unary;

/// Binary operator precedence levels.
///
/// Implements the additive, multiplicative and power levels of the grammar
/// and the token-to-operator mapping.
pub mod binary;
