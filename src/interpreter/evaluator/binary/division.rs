use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, integer_overflow},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates true division (`/`).
    ///
    /// The quotient is always real, even for two integer operands.
    ///
    /// # Errors
    /// `DivisionByZero` when `right` is zero; `UnsupportedValue` when the
    /// quotient overflows.
    ///
    /// # Example
    /// ```
    /// use calcrs::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let q = Evaluator::eval_true_div(Value::Integer(7), Value::Integer(2), 0).unwrap();
    /// assert_eq!(q, Value::Real(3.5));
    /// ```
    pub fn eval_true_div(left: Value, right: Value, position: usize) -> EvalResult<Value> {
        check_divisor(BinaryOperator::Div, right, position)?;
        Value::real_checked(left.as_real() / right.as_real(), position)
    }

    /// Evaluates floor division (`//`), rounding the quotient toward negative
    /// infinity.
    ///
    /// Two integers give an integer; any real operand gives a real.
    ///
    /// # Errors
    /// `DivisionByZero` when `right` is zero; `UnsupportedValue` for
    /// `i64::MIN // -1`.
    ///
    /// # Example
    /// ```
    /// use calcrs::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let q = Evaluator::eval_floor_div(Value::Integer(-7), Value::Integer(2), 0).unwrap();
    /// assert_eq!(q, Value::Integer(-4));
    ///
    /// let q = Evaluator::eval_floor_div(Value::Real(7.5), Value::Integer(2), 0).unwrap();
    /// assert_eq!(q, Value::Real(3.0));
    /// ```
    pub fn eval_floor_div(left: Value, right: Value, position: usize) -> EvalResult<Value> {
        let op = BinaryOperator::FloorDiv;
        check_divisor(op, right, position)?;

        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => {
                floor_div_i64(a, b).map(Value::Integer)
                                   .ok_or_else(|| integer_overflow(op, position))
            },
            _ => {
                let (quotient, _) = floored_divmod(left.as_real(), right.as_real());
                Value::real_checked(quotient, position)
            },
        }
    }

    /// Evaluates floored modulo (`%`). A non-zero remainder takes the sign of
    /// the divisor.
    ///
    /// Two integers give an integer; any real operand gives a real.
    ///
    /// # Errors
    /// `DivisionByZero` when `right` is zero.
    ///
    /// # Example
    /// ```
    /// use calcrs::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let r = Evaluator::eval_mod(Value::Integer(-7), Value::Integer(3), 0).unwrap();
    /// assert_eq!(r, Value::Integer(2));
    ///
    /// let r = Evaluator::eval_mod(Value::Real(7.5), Value::Integer(-2), 0).unwrap();
    /// assert_eq!(r, Value::Real(-0.5));
    /// ```
    pub fn eval_mod(left: Value, right: Value, position: usize) -> EvalResult<Value> {
        check_divisor(BinaryOperator::Mod, right, position)?;

        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(floor_mod_i64(a, b))),
            _ => {
                let (_, remainder) = floored_divmod(left.as_real(), right.as_real());
                Value::real_checked(remainder, position)
            },
        }
    }
}

fn check_divisor(op: BinaryOperator, divisor: Value, position: usize) -> EvalResult<()> {
    if divisor.is_zero() {
        return Err(RuntimeError::DivisionByZero { op, position });
    }
    Ok(())
}

/// Integer quotient rounded toward negative infinity. `None` on overflow.
fn floor_div_i64(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

/// Integer remainder with the sign of the divisor.
fn floor_mod_i64(a: i64, b: i64) -> i64 {
    // Only `i64::MIN % -1` fails here, and its remainder is zero.
    let remainder = a.checked_rem(b).unwrap_or(0);
    if remainder != 0 && (remainder < 0) != (b < 0) {
        remainder + b
    } else {
        remainder
    }
}

/// Floored quotient and remainder of two reals.
///
/// Starts from the truncated remainder and corrects both results when its
/// sign disagrees with the divisor. The quotient is rounded to the nearest
/// whole number to absorb error in `(a - remainder) / b`, and zero results
/// carry a sign (`copysign`) so `-0.0` comes out where it mathematically
/// belongs.
fn floored_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut remainder = a % b;
    let mut quotient = (a - remainder) / b;

    if remainder == 0.0 {
        remainder = 0.0_f64.copysign(b);
    } else if (b < 0.0) != (remainder < 0.0) {
        remainder += b;
        quotient -= 1.0;
    }

    let quotient = if quotient == 0.0 {
        0.0_f64.copysign(a / b)
    } else {
        let floored = quotient.floor();
        if quotient - floored > 0.5 { floored + 1.0 } else { floored }
    };

    (quotient, remainder)
}
