use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_i64_exact, i64_to_f64},
};

/// Represents a numeric value produced by evaluation.
///
/// Each intermediate result keeps the representation that arithmetic on its
/// operands naturally yields. Only the final result is normalized for
/// presentation, see [`Value::normalize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An exact 64 bit signed integer.
    Integer(i64),
    /// A finite double precision floating-point number.
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond 2^53 are rounded to the nearest representable float,
    /// as native integer-to-float promotion does.
    ///
    /// # Example
    /// ```
    /// use calcrs::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }

    /// Returns `true` when the value is an integer or real zero, including
    /// `-0.0`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Wraps a float result, rejecting infinities and NaN.
    ///
    /// # Parameters
    /// - `value`: The computed float.
    /// - `position`: Source position of the producing operation.
    ///
    /// # Errors
    /// `UnsupportedValue` when `value` is not finite.
    pub fn real_checked(value: f64, position: usize) -> EvalResult<Self> {
        if value.is_finite() {
            Ok(Self::Real(value))
        } else {
            Err(RuntimeError::UnsupportedValue { details: format!("result {value} is not a finite number"),
                                                 position })
        }
    }

    /// Converts a whole-valued real into an integer.
    ///
    /// This is a presentation step applied once to the final result of an
    /// evaluation. Reals with a fractional part, and whole reals outside the
    /// `i64` range, are returned unchanged.
    ///
    /// # Example
    /// ```
    /// use calcrs::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Real(5.0).normalize(), Value::Integer(5));
    /// assert_eq!(Value::Real(-0.0).normalize(), Value::Integer(0));
    /// assert_eq!(Value::Real(2.5).normalize(), Value::Real(2.5));
    /// assert_eq!(Value::Real(1e300).normalize(), Value::Real(1e300));
    /// ```
    #[must_use]
    pub fn normalize(self) -> Self {
        match self {
            Self::Real(r) => f64_to_i64_exact(r).map_or(self, Self::Integer),
            Self::Integer(_) => self,
        }
    }
}

/// Reals smaller than this in magnitude are shown in scientific notation.
const SCIENTIFIC_BELOW: f64 = 1e-4;

/// Formats values the way the calculator prints results.
///
/// Whole reals are written out exactly, however large. Non-zero reals below
/// `1e-4` in magnitude use scientific notation with a signed, two-digit
/// exponent. Everything else uses the shortest decimal that reads back to the
/// same float.
///
/// # Example
/// ```
/// use calcrs::interpreter::value::core::Value;
///
/// assert_eq!(Value::Real(9_223_372_036_854_775_808.0).to_string(), "9223372036854775808");
/// assert_eq!(Value::Real(1e-7).to_string(), "1e-07");
/// assert_eq!(Value::Real(-2.5e-5).to_string(), "-2.5e-05");
/// assert_eq!(Value::Real(0.0001).to_string(), "0.0001");
/// assert_eq!(Value::Real(0.1 + 0.2).to_string(), "0.30000000000000004");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) if r.fract() == 0.0 => write!(f, "{r:.0}"),
            Self::Real(r) if r.abs() < SCIENTIFIC_BELOW => {
                let formatted = format!("{r:e}");
                match formatted.split_once('e')
                               .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)))
                {
                    Some((mantissa, exp)) => write!(f, "{mantissa}e{exp:+03}"),
                    None => write!(f, "{formatted}"),
                }
            },
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
