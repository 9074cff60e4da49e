//! Error types for Float32 conversion, parsing, and operators.
//!
//! Self-contained thiserror enum; no central error crate dependency.

use thiserror::Error;

/// Result alias used across the crate.
pub type ValueResult<T> = Result<T, ValueError>;

/// Errors produced by the coercion engine, the string parser, and the
/// value-level operators.
///
/// All errors are synchronous and raised at the point of failure. The
/// lenient conversion path (`Float32::try_convert`) reports every case as
/// the `None` sentinel instead, except [`ValueError::NulByte`], which is
/// fatal in every mode.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The input kind has no defined conversion to Float32.
    #[error("can't convert {from} into Float32")]
    TypeConversion { from: String },

    /// The string does not match the float grammar under strict parsing.
    #[error("invalid value for Float32(): {input:?}")]
    InvalidString { input: String },

    /// The string contains an embedded nul byte.
    #[error("string for Float32 contains null byte")]
    NulByte,

    /// Final-stage parse overflow or underflow in strict mode.
    ///
    /// `literal` is the original text, capped at 20 characters with a
    /// trailing `...` when longer.
    #[error("Float32 {literal} out of range")]
    OutOfRange { literal: String },

    /// An operator could not be resolved against the right-hand operand.
    #[error("operation '{op}' not supported between Float32 and {operand}")]
    OperationNotSupported { op: String, operand: String },
}

impl ValueError {
    /// Create a type-conversion error naming the offending input kind.
    pub fn type_conversion(from: impl Into<String>) -> Self {
        Self::TypeConversion { from: from.into() }
    }

    /// Create an invalid-string error carrying the full original input.
    pub fn invalid_string(input: impl Into<String>) -> Self {
        Self::InvalidString {
            input: input.into(),
        }
    }

    /// Create an out-of-range error; `literal` must already be ellipsized.
    pub fn out_of_range(literal: impl Into<String>) -> Self {
        Self::OutOfRange {
            literal: literal.into(),
        }
    }

    /// Create an operation-not-supported error for an operator symbol and
    /// the right-hand operand's type name.
    pub fn operation_not_supported(op: impl Into<String>, operand: impl Into<String>) -> Self {
        Self::OperationNotSupported {
            op: op.into(),
            operand: operand.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValueError::type_conversion("nil").to_string(),
            "can't convert nil into Float32"
        );
        assert_eq!(
            ValueError::invalid_string("3.14abc").to_string(),
            "invalid value for Float32(): \"3.14abc\""
        );
        assert_eq!(
            ValueError::NulByte.to_string(),
            "string for Float32 contains null byte"
        );
        assert_eq!(
            ValueError::out_of_range("1e9999999999999999999...").to_string(),
            "Float32 1e9999999999999999999... out of range"
        );
    }
}
