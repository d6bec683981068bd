use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Positions are zero-based character offsets of the operator that failed.
pub enum RuntimeError {
    /// The right operand of `/`, `//` or `%` was exactly zero, or zero was
    /// raised to a negative power.
    DivisionByZero {
        /// The operator that divided by zero.
        op:       BinaryOperator,
        /// The source position of the operator.
        position: usize,
    },
    /// An operator reached an arithmetic routine that does not handle it.
    UnsupportedOperator {
        /// The rejected operator.
        op:       BinaryOperator,
        /// The source position of the operator.
        position: usize,
    },
    /// A result fell outside the range of the native numeric types.
    UnsupportedValue {
        /// Details about the value.
        details:  String,
        /// The source position of the operation that produced it.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { op, position } => {
                write!(f, "Division by zero in '{op}' at position {position}.")
            },
            Self::UnsupportedOperator { op, position } => {
                write!(f, "Unsupported operator '{op}' at position {position}.")
            },
            Self::UnsupportedValue { details, position } => {
                write!(f, "Unsupported value at position {position}: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
