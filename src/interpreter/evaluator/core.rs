use crate::{
    ast::{Expr, Link},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stateless tree-walking evaluator.
///
/// Evaluation is a pure function of the tree: nothing is cached or carried
/// between calls, so the same tree always yields the same result and any
/// number of threads may evaluate concurrently.
pub struct Evaluator;

impl Evaluator {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// The walk is post-order: both operands of a binary operation are
    /// evaluated, left before right, before the operator is applied. A chain
    /// is folded from the left in a loop. The
    /// returned value is not normalized; see
    /// [`Value::normalize`](crate::interpreter::value::core::Value::normalize).
    ///
    /// # Errors
    /// The first `RuntimeError` raised anywhere in the tree.
    ///
    /// # Example
    /// ```
    /// use calcrs::interpreter::{evaluator::core::Evaluator, parse, value::core::Value};
    ///
    /// let expr = parse("10 / 2").unwrap();
    ///
    /// assert_eq!(Evaluator::eval(&expr).unwrap(), Value::Real(5.0));
    /// ```
    pub fn eval(expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::UnaryOp { op, expr, position } => {
                let value = Self::eval(expr)?;
                Self::eval_unary(*op, value, *position)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = Self::eval(left)?;
                let right = Self::eval(right)?;
                Self::eval_binary(*op, left, right, *position)
            },
            Expr::Chain { first, rest } => {
                let mut acc = Self::eval(first)?;
                for Link { op,
                           operand,
                           position, } in rest
                {
                    let right = Self::eval(operand)?;
                    acc = Self::eval_binary(*op, acc, right, *position)?;
                }
                Ok(acc)
            },
        }
    }
}

/// Builds the error for an integer result that does not fit in `i64`.
pub(crate) fn integer_overflow(operation: impl std::fmt::Display,
                               position: usize)
                               -> RuntimeError {
    RuntimeError::UnsupportedValue { details: format!("integer overflow in '{operation}'"),
                                     position }
}
