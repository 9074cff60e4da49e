//! The boxed single-precision float value.

use std::cmp::Ordering;
use std::fmt;

/// IEEE 754 single-precision floating point value.
///
/// Immutable once created; every arithmetic result is a new instance.
/// External callers cannot construct one directly — values enter through
/// the coercion engine ([`Float32::convert`], [`crate::float32`]), the
/// string parser ([`Float32::parse`]), or an operator.
///
/// **IMPORTANT**: this type does NOT implement `Eq` or `Hash` because
/// NaN != NaN. Semantic equality against other numeric kinds lives in
/// `PartialEq<Value>`.
#[derive(Debug, Clone, Copy)]
pub struct Float32(f32);

impl Float32 {
    /// Number of bits in the mantissa (FLT_MANT_DIG).
    pub const MANT_DIG: u32 = f32::MANTISSA_DIGITS;
    /// Decimal digits of precision (FLT_DIG).
    pub const DIG: u32 = f32::DIGITS;
    /// Minimum binary exponent (FLT_MIN_EXP).
    pub const MIN_EXP: i32 = f32::MIN_EXP;
    /// Maximum binary exponent (FLT_MAX_EXP).
    pub const MAX_EXP: i32 = f32::MAX_EXP;
    /// Minimum decimal exponent (FLT_MIN_10_EXP).
    pub const MIN_10_EXP: i32 = f32::MIN_10_EXP;
    /// Maximum decimal exponent (FLT_MAX_10_EXP).
    pub const MAX_10_EXP: i32 = f32::MAX_10_EXP;

    /// Smallest positive normal value (FLT_MIN).
    pub const MIN: Self = Self(f32::MIN_POSITIVE);
    /// Largest finite value (FLT_MAX).
    pub const MAX: Self = Self(f32::MAX);
    /// Difference between 1.0 and the next representable value.
    pub const EPSILON: Self = Self(f32::EPSILON);
    /// Positive infinity.
    pub const INFINITY: Self = Self(f32::INFINITY);
    /// Not a number.
    pub const NAN: Self = Self(f32::NAN);

    /// Wrap a raw f32. Crate-internal: the public entry points are the
    /// coercion engine, the parser, and the operators.
    pub(crate) const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the inner value. Always succeeds.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Check if this is NaN.
    #[inline]
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// Check if this is positive or negative infinity.
    #[inline]
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.0.is_infinite()
    }

    /// Check if this is finite (not NaN or infinite).
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// The next representable value toward positive infinity, at f32
    /// precision (`nextafterf(x, +inf)`).
    ///
    /// `NAN` and `INFINITY` return themselves; `MAX` returns `INFINITY`;
    /// negative infinity returns `-MAX`; both zeros return the smallest
    /// positive subnormal.
    #[must_use]
    pub fn next_float(&self) -> Self {
        let x = self.0;
        if x.is_nan() || x == f32::INFINITY {
            return *self;
        }
        // Stepping the payload bits by one moves to the adjacent float:
        // +1 away from zero on the positive side, -1 toward zero on the
        // negative side. Both zeros step to the smallest subnormal.
        let bits = x.to_bits();
        let next = if x == 0.0 {
            1
        } else if bits >> 31 == 0 {
            bits + 1
        } else {
            bits - 1
        };
        Self(f32::from_bits(next))
    }

    /// Get the bit representation.
    #[inline]
    #[must_use]
    pub const fn to_bits(&self) -> u32 {
        self.0.to_bits()
    }
}

// PartialEq: raw IEEE equality, NaN != NaN. No Eq implementation — that is
// intentional.
impl PartialEq for Float32 {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Float32 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl fmt::Display for Float32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            write!(f, "NaN")
        } else if self.0 == f32::INFINITY {
            write!(f, "Infinity")
        } else if self.0 == f32::NEG_INFINITY {
            write!(f, "-Infinity")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_platform_limits() {
        assert_eq!(Float32::MANT_DIG, 24);
        assert_eq!(Float32::DIG, 6);
        assert_eq!(Float32::MIN_EXP, -125);
        assert_eq!(Float32::MAX_EXP, 128);
        assert_eq!(Float32::MIN_10_EXP, -37);
        assert_eq!(Float32::MAX_10_EXP, 38);
        assert_eq!(Float32::MIN.value(), f32::MIN_POSITIVE);
        assert_eq!(Float32::MAX.value(), f32::MAX);
        assert_eq!(Float32::EPSILON.value(), f32::EPSILON);
        assert!(Float32::INFINITY.is_infinite());
        assert!(Float32::NAN.is_nan());
    }

    #[test]
    fn test_nan_not_equal() {
        assert_ne!(Float32::NAN, Float32::NAN);
        assert!(Float32::NAN.is_nan());
        assert!(!Float32::INFINITY.is_nan());
    }

    #[test]
    fn test_next_float_steps_by_one_ulp() {
        let one = Float32::new(1.0);
        assert_eq!(one.next_float().value() - 1.0, f32::EPSILON);

        let minus_one = Float32::new(-1.0);
        assert_eq!(minus_one.next_float().value() + 1.0, f32::EPSILON / 2.0);
    }

    #[test]
    fn test_next_float_edges() {
        assert_eq!(Float32::MAX.next_float().value(), f32::INFINITY);
        assert_eq!(Float32::INFINITY.next_float().value(), f32::INFINITY);
        assert_eq!(
            Float32::new(f32::NEG_INFINITY).next_float().value(),
            -f32::MAX
        );
        assert!(Float32::NAN.next_float().is_nan());

        let smallest = Float32::new(0.0).next_float();
        assert!(smallest.value() > 0.0);
        assert_eq!(smallest.value(), f32::from_bits(1));
        // -0.0 also steps to the smallest positive subnormal
        assert_eq!(Float32::new(-0.0).next_float().value(), f32::from_bits(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Float32::new(3.5).to_string(), "3.5");
        assert_eq!(Float32::NAN.to_string(), "NaN");
        assert_eq!(Float32::INFINITY.to_string(), "Infinity");
        assert_eq!(Float32::new(f32::NEG_INFINITY).to_string(), "-Infinity");
    }
}
