use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, integer_overflow},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates an exponentiation operation.
    ///
    /// An integer base with a non-negative integer exponent uses checked
    /// integer arithmetic. Every other combination (negative exponent, real
    /// base or real exponent) is computed in floating-point form with
    /// `powf`.
    ///
    /// # Errors
    /// - `DivisionByZero` when zero is raised to a negative power.
    /// - `UnsupportedValue` on integer overflow, or when the real result is not
    ///   finite (for example a fractional power of a negative base).
    ///
    /// # Example
    /// ```
    /// use calcrs::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let result = Evaluator::eval_pow(Value::Integer(2), Value::Integer(10), 0).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Evaluator::eval_pow(Value::Integer(2), Value::Integer(-1), 0).unwrap();
    /// assert_eq!(result, Value::Real(0.5));
    /// ```
    pub fn eval_pow(base: Value, exponent: Value, position: usize) -> EvalResult<Value> {
        let op = BinaryOperator::Pow;

        match (base, exponent) {
            (Value::Integer(b), Value::Integer(e)) if e >= 0 => {
                integer_pow(b, e).map(Value::Integer)
                                 .ok_or_else(|| integer_overflow(op, position))
            },
            _ => {
                let exponent = exponent.as_real();
                if base.is_zero() && exponent < 0.0 {
                    return Err(RuntimeError::DivisionByZero { op, position });
                }
                Value::real_checked(base.as_real().powf(exponent), position)
            },
        }
    }
}

/// Raises `base` to a non-negative `exponent`. `None` on overflow.
fn integer_pow(base: i64, exponent: i64) -> Option<i64> {
    if let Ok(exponent) = u32::try_from(exponent) {
        return base.checked_pow(exponent);
    }

    // Exponents past `u32::MAX` only stay in range for these bases.
    match base {
        0 | 1 => Some(base),
        -1 => Some(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => None,
    }
}
