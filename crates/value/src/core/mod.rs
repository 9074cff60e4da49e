//! Core value machinery.
//!
//! - [`float32`]: the boxed single-precision type and its IEEE surface
//! - [`value`]: the closed operand union
//! - [`convert`]: the coercion engine (strict and lenient)
//! - [`parse`]: the decimal string grammar
//! - [`ops`]: arithmetic, ordering, and exact integer comparison
//! - [`traits`]: the capability seam for unknown operand types
//! - [`limits`]: the runtime limits table
//! - [`error`]: the error taxonomy

pub mod convert;
pub mod error;
pub mod float32;
pub mod kind;
pub mod limits;
pub mod ops;
pub mod parse;
pub mod traits;
pub mod value;

#[cfg(feature = "serde")]
mod serde;

pub use error::{ValueError, ValueResult};
pub use float32::Float32;
pub use kind::ValueKind;
pub use limits::Float32Limits;
pub use ops::BinaryOp;
pub use traits::Coercible;
pub use value::Value;
