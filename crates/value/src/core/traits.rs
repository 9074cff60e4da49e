//! Capability interface for operand types outside the closed union.

use std::fmt;

use crate::core::error::{ValueError, ValueResult};
use crate::core::float32::Float32;
use crate::core::ops::BinaryOp;
use crate::core::value::Value;

/// Capability handle for an operand whose type the coercion engine does not
/// know.
///
/// This models the host convention with two seams:
///
/// - the generic "convert to double" protocol, split into a lenient probe
///   ([`Coercible::try_to_double`]) and a mandatory form
///   ([`Coercible::to_double`]);
/// - the binary-coercion fallback ([`Coercible::coerce_with`]), invoked when
///   an operator's right-hand side is not a recognized numeric kind, letting
///   the other operand's type supply the authoritative mixed-type result.
pub trait Coercible: fmt::Debug + Send + Sync {
    /// Type name used in diagnostics.
    fn type_name(&self) -> &'static str;

    /// Lenient double-conversion probe. `None` when the type has no float
    /// form; the engine then returns the "no value" sentinel.
    fn try_to_double(&self) -> Option<f64> {
        None
    }

    /// Mandatory double conversion. The default defers to the probe and
    /// reports the type as unconvertible; implementations may raise their
    /// own error, which propagates unchanged.
    fn to_double(&self) -> ValueResult<f64> {
        self.try_to_double()
            .ok_or_else(|| ValueError::type_conversion(self.type_name()))
    }

    /// Binary-coercion fallback. `lhs` is the Float32 operand, `op` the
    /// operator being resolved; the returned value is taken as the result
    /// of the whole operation.
    fn coerce_with(&self, op: BinaryOp, lhs: Float32) -> ValueResult<Value> {
        let _ = lhs;
        Err(ValueError::operation_not_supported(
            op.symbol(),
            self.type_name(),
        ))
    }
}
