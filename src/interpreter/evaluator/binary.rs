/// Operator dispatch.
pub mod core;

/// Addition, subtraction and multiplication.
pub mod scalar;

/// True division, floor division and floored modulo.
pub mod division;

/// Exponentiation.
pub mod power;
