/// Numeric conversion helpers.
///
/// This module provides the conversions between `i64` and `f64` used by the
/// evaluator: promotion of integers for mixed arithmetic, and the exact
/// whole-float-to-integer conversion behind result normalization.
pub mod num;
