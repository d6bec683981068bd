use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to a specialized handler:
    /// `+`, `-` and `*` go to `eval_scalar_op`, the three division operators
    /// to their own handlers, and `^` to `eval_pow`. The match is exhaustive
    /// over `BinaryOperator`, so an operator added to the enum without an
    /// arithmetic rule fails to compile instead of slipping through.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use calcrs::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(7);
    /// let right = Value::Integer(-2);
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Mod, left, right, 0);
    /// assert_eq!(result.unwrap(), Value::Integer(-1));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       position: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, FloorDiv, Mod, Mul, Pow, Sub};

        match op {
            Add | Sub | Mul => Self::eval_scalar_op(op, left, right, position),
            Div => Self::eval_true_div(left, right, position),
            FloorDiv => Self::eval_floor_div(left, right, position),
            Mod => Self::eval_mod(left, right, position),
            Pow => Self::eval_pow(left, right, position),
        }
    }
}
