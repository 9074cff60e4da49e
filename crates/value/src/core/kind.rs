//! Value kind classification.

use std::fmt;

/// Lightweight classification for [`crate::Value`], used in dispatch and
/// diagnostics.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Nil,
    Bool,
    Int,
    BigInt,
    Float,
    Rational,
    Text,
    Float32,
    Other,
}

impl ValueKind {
    /// Human-readable name, as it appears in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "Bool",
            Self::Int => "Integer",
            Self::BigInt => "BigInt",
            Self::Float => "Float",
            Self::Rational => "Rational",
            Self::Text => "String",
            Self::Float32 => "Float32",
            Self::Other => "Object",
        }
    }

    /// Check if this kind participates in numeric coercion without
    /// delegation.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int | Self::BigInt | Self::Float | Self::Rational | Self::Float32
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
