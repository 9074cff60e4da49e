//! The coercion engine: anything in the closed union into a Float32.

use crate::core::error::{ValueError, ValueResult};
use crate::core::float32::Float32;
use crate::core::parse::parse_str;
use crate::core::value::{Value, bigint_to_f64, rational_to_f64};

/// Convert a value into a Float32, the host-level `Float32()` constructor.
///
/// Strict mode: unconvertible inputs error. The lenient counterpart is
/// [`Float32::try_convert`].
pub fn float32(value: impl Into<Value>) -> ValueResult<Float32> {
    Float32::convert(&value.into())
}

impl Float32 {
    /// Convert a value into a Float32, erring on anything unconvertible.
    pub fn convert(value: &Value) -> ValueResult<Self> {
        match do_convert(value, true)? {
            Some(f) => Ok(f),
            // Raising conversions never produce the sentinel; kept total.
            None => Err(ValueError::type_conversion(value.type_name())),
        }
    }

    /// Convert a value into a Float32, reporting failure as the `None`
    /// sentinel instead of an error.
    ///
    /// The only remaining error is [`ValueError::NulByte`], which is fatal
    /// in every mode because it indicates corrupted input rather than an
    /// ordinary conversion failure.
    pub fn try_convert(value: &Value) -> ValueResult<Option<Self>> {
        do_convert(value, false)
    }
}

fn do_convert(value: &Value, raise: bool) -> ValueResult<Option<Float32>> {
    match value {
        // Machine integer: direct cast, silently rounded for large
        // magnitudes per the host convention.
        Value::Int(n) => Ok(Some(Float32::new(*n as f32))),

        // Big integer: through double, then narrowed.
        Value::BigInt(n) => Ok(Some(Float32::new(bigint_to_f64(n) as f32))),

        // Double: narrowed; overflow saturates to infinity, never raises.
        Value::Float(d) => Ok(Some(Float32::new(*d as f32))),

        // Rational: numerator and denominator narrowed independently.
        Value::Rational(r) => Ok(Some(Float32::new(rational_to_f64(r) as f32))),

        // String: strict grammar; the mode decides raise vs sentinel.
        Value::Text(s) => Ok(parse_str(s, true, raise)?.map(Float32::new)),

        // Already boxed.
        Value::Float32(f) => Ok(Some(*f)),

        Value::Nil | Value::Bool(_) => {
            if raise {
                Err(ValueError::type_conversion(value.type_name()))
            } else {
                Ok(None)
            }
        }

        // Unknown type: the capability handle decides. The mandatory
        // protocol propagates whatever error the handle raises.
        Value::Other(h) => {
            if raise {
                Ok(Some(Float32::new(h.to_double()? as f32)))
            } else {
                Ok(h.try_to_double().map(|d| Float32::new(d as f32)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ops::BinaryOp;
    use crate::core::traits::Coercible;
    use num_bigint::BigInt;

    #[test]
    fn test_int_direct_cast() {
        assert_eq!(float32(42i64).map(|f| f.value()), Ok(42.0));
        // Beyond the 24-bit exact range the cast rounds silently.
        let n = (1i64 << 24) + 1;
        assert_eq!(float32(n).map(|f| f.value()), Ok(n as f32));
    }

    #[test]
    fn test_bigint_through_double() {
        let n = BigInt::from(1) << 512;
        assert_eq!(
            float32(n).map(|f| f.value()),
            Ok(f32::INFINITY)
        );
        assert_eq!(
            float32(BigInt::from(1_000_000)).map(|f| f.value()),
            Ok(1_000_000.0)
        );
    }

    #[test]
    fn test_double_narrowing_saturates() {
        assert_eq!(float32(0.5f64).map(|f| f.value()), Ok(0.5));
        assert_eq!(float32(1e200f64).map(|f| f.value()), Ok(f32::INFINITY));
        assert_eq!(
            float32(-1e200f64).map(|f| f.value()),
            Ok(f32::NEG_INFINITY)
        );
    }

    #[test]
    fn test_rational_parts_narrowed_independently() {
        let v = Value::rational(BigInt::from(1), BigInt::from(3));
        assert_eq!(
            Float32::convert(&v).map(|f| f.value()),
            Ok((1.0f64 / 3.0) as f32)
        );
        let zero = Value::rational(BigInt::from(0), BigInt::from(1));
        assert_eq!(Float32::convert(&zero).map(|f| f.value()), Ok(0.0));
    }

    #[test]
    fn test_string_goes_through_strict_parser() {
        assert_eq!(float32("0.0").map(|f| f.value()), Ok(0.0));
        assert_eq!(float32("1_000").map(|f| f.value()), Ok(1000.0));
        assert_eq!(
            float32("3.14abc"),
            Err(ValueError::invalid_string("3.14abc"))
        );
        // Lenient mode reports the same failure as the sentinel.
        assert_eq!(Float32::try_convert(&Value::text("3.14abc")), Ok(None));
    }

    #[test]
    fn test_nil_and_bool_are_unconvertible() {
        assert_eq!(
            Float32::convert(&Value::Nil),
            Err(ValueError::type_conversion("nil"))
        );
        assert_eq!(
            Float32::convert(&Value::Bool(true)),
            Err(ValueError::type_conversion("true"))
        );
        assert_eq!(
            Float32::convert(&Value::Bool(false)),
            Err(ValueError::type_conversion("false"))
        );
        assert_eq!(Float32::try_convert(&Value::Nil), Ok(None));
        assert_eq!(Float32::try_convert(&Value::Bool(true)), Ok(None));
    }

    #[test]
    fn test_already_boxed_is_identity() {
        let f = float32(2.5f64).unwrap();
        let again = Float32::convert(&Value::Float32(f)).unwrap();
        assert_eq!(again.value(), 2.5);
    }

    #[test]
    fn test_nul_byte_is_fatal_in_both_modes() {
        assert_eq!(
            Float32::convert(&Value::text("1\u{0}")),
            Err(ValueError::NulByte)
        );
        assert_eq!(
            Float32::try_convert(&Value::text("1\u{0}")),
            Err(ValueError::NulByte)
        );
    }

    #[derive(Debug)]
    struct Celsius(f64);

    impl Coercible for Celsius {
        fn type_name(&self) -> &'static str {
            "Celsius"
        }
        fn try_to_double(&self) -> Option<f64> {
            Some(self.0)
        }
    }

    #[derive(Debug)]
    struct Opaque;

    impl Coercible for Opaque {
        fn type_name(&self) -> &'static str {
            "Opaque"
        }
        fn coerce_with(&self, _op: BinaryOp, _lhs: Float32) -> ValueResult<Value> {
            Ok(Value::Nil)
        }
    }

    #[test]
    fn test_other_uses_the_capability_handle() {
        let v = Value::other(Celsius(21.5));
        assert_eq!(Float32::convert(&v).map(|f| f.value()), Ok(21.5));
        assert_eq!(
            Float32::try_convert(&v).map(|o| o.map(|f| f.value())),
            Ok(Some(21.5))
        );

        let v = Value::other(Opaque);
        assert_eq!(
            Float32::convert(&v),
            Err(ValueError::type_conversion("Opaque"))
        );
        assert_eq!(Float32::try_convert(&v), Ok(None));
    }
}
