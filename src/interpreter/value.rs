/// Runtime numeric values.
///
/// Declares the `Value` enum holding either an exact integer or a finite
/// real, together with promotion to `f64` and the final whole-number
/// normalization used when presenting a result.
pub mod core;
