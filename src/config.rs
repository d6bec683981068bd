/// Default maximum expression depth.
///
/// Counts parentheses, sign chains and powers. Flat operator chains such as
/// `1 + 2 + 3` do not nest and are never limited.
pub const MAX_DEPTH: usize = 256;

/// Limits applied to a single evaluation.
///
/// ## Example
/// ```
/// use calcrs::{config::Options, error::ErrorKind, evaluate_with};
///
/// let options = Options { max_depth: 4 };
///
/// assert!(evaluate_with("((1))", &options).is_ok());
/// assert!(evaluate_with("1 + 2 + 3 + 4 + 5 + 6 + 7", &options).is_ok());
/// assert_eq!(evaluate_with("((((((1))))))", &options).unwrap_err().kind(),
///            ErrorKind::NestingTooDeep);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Deepest nesting accepted before failing with
    /// [`ParseError::NestingTooDeep`](crate::error::ParseError::NestingTooDeep).
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_depth: MAX_DEPTH }
    }
}
