use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, integer_overflow},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a unary operation on a value.
    ///
    /// The result keeps the representation of the operand. Negating
    /// `i64::MIN` overflows and is reported as an unsupported value.
    ///
    /// # Example
    /// ```
    /// use calcrs::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, Value::Integer(5), 0).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Plus, Value::Real(1.5), 0).unwrap();
    /// assert_eq!(v, Value::Real(1.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value, position: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or_else(|| integer_overflow(op, position)),
                Value::Real(r) => Ok(Value::Real(-r)),
            },
        }
    }
}
