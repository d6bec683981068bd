/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression: empty input, invalid characters, malformed or oversized
/// literals, grammar violations and excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression, such as division by zero or results outside the native
/// numeric range.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced by the evaluation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The text could not be turned into an expression tree.
    Parse(ParseError),
    /// The tree could not be reduced to a number.
    Runtime(RuntimeError),
}

/// The error classes a caller can react to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input was empty or whitespace-only.
    EmptyExpression,
    /// An unrecognized character or malformed numeric literal.
    Lexical,
    /// A grammar violation.
    Syntax,
    /// The expression exceeded the configured nesting limit.
    NestingTooDeep,
    /// The right operand of a division was zero.
    DivisionByZero,
    /// An operator outside the arithmetic whitelist.
    UnsupportedOperator,
    /// A literal or result outside the native numeric range.
    UnsupportedValue,
}

impl CalcError {
    /// Classifies the error.
    ///
    /// ## Example
    /// ```
    /// use calcrs::{error::ErrorKind, evaluate};
    ///
    /// assert_eq!(evaluate("   ").unwrap_err().kind(), ErrorKind::EmptyExpression);
    /// assert_eq!(evaluate("5 // 0").unwrap_err().kind(), ErrorKind::DivisionByZero);
    /// assert_eq!(evaluate("(1 + 2").unwrap_err().kind(), ErrorKind::Syntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => match e {
                ParseError::EmptyExpression => ErrorKind::EmptyExpression,
                ParseError::InvalidCharacter { .. } => ErrorKind::Lexical,
                ParseError::LiteralTooLarge { .. } => ErrorKind::UnsupportedValue,
                ParseError::UnexpectedToken { .. }
                | ParseError::UnexpectedEndOfInput { .. }
                | ParseError::ExpectedClosingParen { .. }
                | ParseError::EmptyGroup { .. }
                | ParseError::UnexpectedTrailingTokens { .. } => ErrorKind::Syntax,
                ParseError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
            },
            Self::Runtime(e) => match e {
                RuntimeError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
                RuntimeError::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperator,
                RuntimeError::UnsupportedValue { .. } => ErrorKind::UnsupportedValue,
            },
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
