//! Arithmetic and comparison for Float32 against the value union.
//!
//! Integer right-hand sides narrow through double for arithmetic but go
//! through an exact comparison for ordering and equality, so orderings
//! against integers beyond the 24-bit exactly-representable range stay
//! correct. Unrecognized operands delegate to their capability handle.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use num_bigint::BigInt;
use num_traits::FromPrimitive;

use crate::core::error::{ValueError, ValueResult};
use crate::core::float32::Float32;
use crate::core::traits::Coercible;
use crate::core::value::{Value, bigint_to_f64, rational_to_f64};

/// Operator being resolved, passed to the binary-coercion fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
}

impl BinaryOp {
    /// The operator's source-level spelling.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "==",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// Raw IEEE arithmetic between boxed values; overflow produces infinity,
// never an error.
impl Add for Float32 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value() + rhs.value())
    }
}

impl Sub for Float32 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value() - rhs.value())
    }
}

impl Mul for Float32 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.value() * rhs.value())
    }
}

impl Div for Float32 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.value() / rhs.value())
    }
}

impl Neg for Float32 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value())
    }
}

/// Arithmetic operand narrowed from a recognized numeric kind; `None`
/// means the kind must delegate.
fn narrow_operand(rhs: &Value) -> Option<f32> {
    match rhs {
        Value::Int(n) => Some(*n as f32),
        Value::BigInt(n) => Some(bigint_to_f64(n) as f32),
        Value::Float32(f) => Some(f.value()),
        _ => None,
    }
}

fn delegate(h: &Arc<dyn Coercible>, op: BinaryOp, lhs: Float32) -> ValueResult<Value> {
    h.coerce_with(op, lhs)
}

fn delegate_relop(h: &Arc<dyn Coercible>, op: BinaryOp, lhs: Float32) -> ValueResult<bool> {
    match delegate(h, op, lhs)? {
        Value::Bool(b) => Ok(b),
        other => Err(ValueError::operation_not_supported(
            op.symbol(),
            other.type_name(),
        )),
    }
}

impl Float32 {
    /// `self + rhs`, producing a new boxed value or the delegated result.
    pub fn add_value(&self, rhs: &Value) -> ValueResult<Value> {
        if let Some(b) = narrow_operand(rhs) {
            Ok(Value::Float32(Self::new(self.value() + b)))
        } else if let Value::Other(h) = rhs {
            delegate(h, BinaryOp::Add, *self)
        } else {
            Err(ValueError::operation_not_supported(
                BinaryOp::Add.symbol(),
                rhs.type_name(),
            ))
        }
    }

    /// `self - rhs`.
    pub fn sub_value(&self, rhs: &Value) -> ValueResult<Value> {
        if let Some(b) = narrow_operand(rhs) {
            Ok(Value::Float32(Self::new(self.value() - b)))
        } else if let Value::Other(h) = rhs {
            delegate(h, BinaryOp::Sub, *self)
        } else {
            Err(ValueError::operation_not_supported(
                BinaryOp::Sub.symbol(),
                rhs.type_name(),
            ))
        }
    }

    /// `self * rhs`.
    pub fn mul_value(&self, rhs: &Value) -> ValueResult<Value> {
        if let Some(b) = narrow_operand(rhs) {
            Ok(Value::Float32(Self::new(self.value() * b)))
        } else if let Value::Other(h) = rhs {
            delegate(h, BinaryOp::Mul, *self)
        } else {
            Err(ValueError::operation_not_supported(
                BinaryOp::Mul.symbol(),
                rhs.type_name(),
            ))
        }
    }

    /// `self / rhs`. Division by zero follows IEEE semantics.
    pub fn div_value(&self, rhs: &Value) -> ValueResult<Value> {
        if let Some(b) = narrow_operand(rhs) {
            Ok(Value::Float32(Self::new(self.value() / b)))
        } else if let Value::Other(h) = rhs {
            delegate(h, BinaryOp::Div, *self)
        } else {
            Err(ValueError::operation_not_supported(
                BinaryOp::Div.symbol(),
                rhs.type_name(),
            ))
        }
    }

    /// Exact ordering of `self` against a machine integer; `None` when
    /// `self` is NaN.
    ///
    /// The integer is never narrowed: the float is truncated, compared as
    /// a machine integer when its magnitude allows, and the fractional
    /// part breaks ties.
    #[must_use]
    pub fn cmp_i64(&self, n: i64) -> Option<Ordering> {
        let x = self.value();
        if x.is_nan() {
            return None;
        }
        if x.is_infinite() {
            return Some(if x > 0.0 {
                Ordering::Greater
            } else {
                Ordering::Less
            });
        }
        let xi = x.trunc();
        // i64::MAX as f32 is exactly 2^63; anything at or above it
        // exceeds every machine integer, and symmetrically below -2^63.
        if xi >= i64::MAX as f32 {
            return Some(Ordering::Greater);
        }
        if xi < i64::MIN as f32 {
            return Some(Ordering::Less);
        }
        match (xi as i64).cmp(&n) {
            Ordering::Equal => Some(tie_break(x - xi)),
            ord => Some(ord),
        }
    }

    /// Exact ordering of `self` against an arbitrary-precision integer;
    /// `None` when `self` is NaN.
    #[must_use]
    pub fn cmp_bigint(&self, n: &BigInt) -> Option<Ordering> {
        let x = self.value();
        if x.is_nan() {
            return None;
        }
        if x.is_infinite() {
            return Some(if x > 0.0 {
                Ordering::Greater
            } else {
                Ordering::Less
            });
        }
        let xi = x.trunc();
        // Exact: xi is integral and finite, so the conversion cannot
        // round.
        let xb = BigInt::from_f64(f64::from(xi))?;
        match xb.cmp(n) {
            Ordering::Equal => Some(tie_break(x - xi)),
            ord => Some(ord),
        }
    }

    /// `self > rhs`.
    pub fn gt_value(&self, rhs: &Value) -> ValueResult<bool> {
        self.relational(BinaryOp::Gt, rhs)
    }

    /// `self >= rhs`.
    pub fn ge_value(&self, rhs: &Value) -> ValueResult<bool> {
        self.relational(BinaryOp::Ge, rhs)
    }

    /// `self < rhs`.
    pub fn lt_value(&self, rhs: &Value) -> ValueResult<bool> {
        self.relational(BinaryOp::Lt, rhs)
    }

    /// `self <= rhs`.
    pub fn le_value(&self, rhs: &Value) -> ValueResult<bool> {
        self.relational(BinaryOp::Le, rhs)
    }

    fn relational(&self, op: BinaryOp, rhs: &Value) -> ValueResult<bool> {
        let ord = match rhs {
            Value::Int(n) => self.cmp_i64(*n),
            Value::BigInt(n) => self.cmp_bigint(n),
            Value::Float32(f) => self.value().partial_cmp(&f.value()),
            Value::Other(h) => return delegate_relop(h, op, *self),
            _ => {
                return Err(ValueError::operation_not_supported(
                    op.symbol(),
                    rhs.type_name(),
                ));
            }
        };
        // Unordered (NaN on either side) fails every relational operator.
        Ok(match ord {
            Some(ord) => match op {
                BinaryOp::Gt => ord.is_gt(),
                BinaryOp::Ge => ord.is_ge(),
                BinaryOp::Lt => ord.is_lt(),
                BinaryOp::Le => ord.is_le(),
                _ => false,
            },
            None => false,
        })
    }
}

fn tie_break(fract: f32) -> Ordering {
    if fract > 0.0 {
        Ordering::Greater
    } else if fract < 0.0 {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

// Semantic equality against the union. Never fails: a delegated result
// that is not Bool(true), including an error, reads as unequal. NaN is
// equal to nothing.
impl PartialEq<Value> for Float32 {
    fn eq(&self, rhs: &Value) -> bool {
        let b: f32 = match rhs {
            Value::Int(n) => *n as f32,
            Value::BigInt(n) => {
                // Exact equality: only an integral float can equal an
                // integer, and the check happens at big-integer width.
                return self.cmp_bigint(n) == Some(Ordering::Equal);
            }
            Value::Float(d) => *d as f32,
            Value::Rational(r) => rational_to_f64(r) as f32,
            Value::Float32(f) => f.value(),
            Value::Other(h) => {
                return matches!(h.coerce_with(BinaryOp::Eq, *self), Ok(Value::Bool(true)));
            }
            Value::Nil | Value::Bool(_) | Value::Text(_) => return false,
        };
        self.value() == b
    }
}
