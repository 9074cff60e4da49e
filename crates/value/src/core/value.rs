//! The closed union of operand kinds accepted by the coercion engine.

use std::sync::Arc;

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::ToPrimitive;

use crate::core::float32::Float32;
use crate::core::kind::ValueKind;
use crate::core::traits::Coercible;

/// Any value the coercion and operator engines can receive.
///
/// The union is closed and matched exhaustively; types outside it enter as
/// [`Value::Other`] carrying a [`Coercible`] capability handle.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The host's nil/none value.
    #[default]
    Nil,
    /// Boolean.
    Bool(bool),
    /// Machine integer.
    Int(i64),
    /// Arbitrary-precision integer.
    BigInt(BigInt),
    /// Double-precision float.
    Float(f64),
    /// Exact rational (numerator / denominator).
    Rational(BigRational),
    /// String.
    Text(String),
    /// An already-boxed single-precision value.
    Float32(Float32),
    /// Anything else, reachable only through its capability handle.
    Other(Arc<dyn Coercible>),
}

impl Value {
    /// Create a machine-integer value.
    #[must_use]
    pub const fn int(v: i64) -> Self {
        Self::Int(v)
    }

    /// Create a big-integer value.
    #[must_use]
    pub const fn big_int(v: BigInt) -> Self {
        Self::BigInt(v)
    }

    /// Create a double value.
    #[must_use]
    pub const fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Create a rational value. The ratio is reduced; `den` must be
    /// nonzero.
    #[must_use]
    pub fn rational(num: BigInt, den: BigInt) -> Self {
        Self::Rational(BigRational::new(num, den))
    }

    /// Create a text value.
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// Wrap an unknown type behind its capability handle.
    pub fn other(v: impl Coercible + 'static) -> Self {
        Self::Other(Arc::new(v))
    }

    /// Get the kind of this value.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Nil => ValueKind::Nil,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::BigInt(_) => ValueKind::BigInt,
            Self::Float(_) => ValueKind::Float,
            Self::Rational(_) => ValueKind::Rational,
            Self::Text(_) => ValueKind::Text,
            Self::Float32(_) => ValueKind::Float32,
            Self::Other(_) => ValueKind::Other,
        }
    }

    /// Name used in diagnostics. Unlike [`ValueKind::name`], booleans and
    /// nil report their literal spelling, and `Other` reports the handle's
    /// own type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Nil => "nil",
            Self::Bool(true) => "true",
            Self::Bool(false) => "false",
            Self::Other(h) => h.type_name(),
            _ => self.kind().name(),
        }
    }

    /// Check if this is a numeric kind (no delegation needed).
    #[inline]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    /// Try to get as a boolean.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as a machine integer.
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as an already-boxed Float32.
    #[inline]
    #[must_use]
    pub fn as_float32(&self) -> Option<Float32> {
        match self {
            Self::Float32(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

// Structural equality for tests and host bookkeeping; Float uses raw IEEE
// semantics (NaN != NaN) and Other compares handle identity. Semantic
// numeric equality lives on `PartialEq<Value> for Float32`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::BigInt(a), Self::BigInt(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Rational(a), Self::Rational(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Float32(a), Self::Float32(b)) => a == b,
            (Self::Other(a), Self::Other(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

// An f32 widens losslessly; narrowing it back in the coercion engine
// reproduces the same value.
impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::BigInt(v)
    }
}

impl From<BigRational> for Value {
    fn from(v: BigRational) -> Self {
        Self::Rational(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Float32> for Value {
    fn from(v: Float32) -> Self {
        Self::Float32(v)
    }
}

/// Narrow a big integer to a double, saturating to ±infinity when the
/// magnitude exceeds the double range (the host big-to-double convention).
pub(crate) fn bigint_to_f64(n: &BigInt) -> f64 {
    n.to_f64().unwrap_or(match n.sign() {
        Sign::Minus => f64::NEG_INFINITY,
        _ => f64::INFINITY,
    })
}

/// Narrow a rational by converting numerator and denominator to doubles
/// independently and dividing.
pub(crate) fn rational_to_f64(r: &BigRational) -> f64 {
    bigint_to_f64(r.numer()) / bigint_to_f64(r.denom())
}
