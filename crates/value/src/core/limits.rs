//! Read-only table of Float32 limits, established once per process.

use once_cell::sync::Lazy;

use crate::core::float32::Float32;

static LIMITS: Lazy<Float32Limits> = Lazy::new(Float32Limits::build);

/// Snapshot of the platform's single-precision limits.
///
/// Populated once on first access and read-only thereafter, so concurrent
/// unsynchronized reads are safe. The same numbers are available as
/// associated constants on [`Float32`]; this table is the form handed to
/// hosts that want the whole set at once.
#[derive(Debug, Clone, Copy)]
pub struct Float32Limits {
    /// Bits in the mantissa.
    pub mant_dig: u32,
    /// Decimal digits of precision.
    pub dig: u32,
    /// Minimum binary exponent.
    pub min_exp: i32,
    /// Maximum binary exponent.
    pub max_exp: i32,
    /// Minimum decimal exponent.
    pub min_10_exp: i32,
    /// Maximum decimal exponent.
    pub max_10_exp: i32,
    /// Smallest positive normal value.
    pub min: Float32,
    /// Largest finite value.
    pub max: Float32,
    /// Distance from 1.0 to the next representable value.
    pub epsilon: Float32,
    /// Positive infinity.
    pub infinity: Float32,
    /// Not a number.
    pub nan: Float32,
}

impl Float32Limits {
    fn build() -> Self {
        Self {
            mant_dig: Float32::MANT_DIG,
            dig: Float32::DIG,
            min_exp: Float32::MIN_EXP,
            max_exp: Float32::MAX_EXP,
            min_10_exp: Float32::MIN_10_EXP,
            max_10_exp: Float32::MAX_10_EXP,
            min: Float32::MIN,
            max: Float32::MAX,
            epsilon: Float32::EPSILON,
            infinity: Float32::INFINITY,
            nan: Float32::NAN,
        }
    }

    /// The process-wide table. Idempotent; later calls return the same
    /// reference.
    #[must_use]
    pub fn get() -> &'static Self {
        &LIMITS
    }
}
