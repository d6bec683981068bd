use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, integer_overflow},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Two integers combine with checked integer arithmetic; any real
    /// operand promotes the other to real. The operator must be one of
    /// `Add`, `Sub` or `Mul`; anything else is rejected with
    /// `UnsupportedOperator`.
    ///
    /// # Example
    /// ```
    /// use calcrs::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let x = Value::Real(1.5);
    /// let y = Value::Integer(2);
    ///
    /// let result = Evaluator::eval_scalar_op(BinaryOperator::Mul, x, y, 0).unwrap();
    /// assert_eq!(result, Value::Real(3.0));
    ///
    /// let result = Evaluator::eval_scalar_op(BinaryOperator::Add, y, y, 0).unwrap();
    /// assert_eq!(result, Value::Integer(4));
    ///
    /// assert!(Evaluator::eval_scalar_op(BinaryOperator::Pow, y, y, 0).is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: Value,
                          right: Value,
                          position: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul, Sub};
        use Value::{Integer, Real};

        let unsupported = || RuntimeError::UnsupportedOperator { op, position };

        match (left, right) {
            (Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    _ => return Err(unsupported()),
                };
                result.map(Integer)
                      .ok_or_else(|| integer_overflow(op, position))
            },
            (Real(_), _) | (_, Real(_)) => {
                let (a, b) = (left.as_real(), right.as_real());
                Value::real_checked(match op {
                                        Add => a + b,
                                        Sub => a - b,
                                        Mul => a * b,
                                        _ => return Err(unsupported()),
                                    },
                                    position)
            },
        }
    }
}
