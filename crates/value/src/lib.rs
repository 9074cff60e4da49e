#![allow(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]

//! Boxed single-precision floats with numeric-tower coercion.
//!
//! The [`Float32`] type wraps an IEEE 754 binary32 value and converts
//! from the full operand union ([`Value`]): machine and big integers,
//! doubles, rationals, strings, and arbitrary types behind the
//! [`Coercible`] capability trait. Comparisons against integers are
//! exact at arbitrary precision; string conversion follows a strict
//! decimal grammar with a lenient best-effort variant.

pub mod core;

// Re-export core types
pub use crate::core::{
    convert::float32,
    error::{ValueError, ValueResult},
    float32::Float32,
    kind::ValueKind,
    limits::Float32Limits,
    ops::BinaryOp,
    traits::Coercible,
    value::Value,
};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{BinaryOp, Coercible, Float32, Value, ValueError, ValueKind, ValueResult};
    pub use crate::{Float32Limits, float32};
}
