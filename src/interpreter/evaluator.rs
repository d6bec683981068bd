/// Binary operator evaluation logic.
///
/// Handles the arithmetic of the seven whitelisted binary operators,
/// including integer/real promotion and division-by-zero checks.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix signs: identity and arithmetic negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the tree walk that dispatches on expression variants and the
/// shared result type.
pub mod core;
