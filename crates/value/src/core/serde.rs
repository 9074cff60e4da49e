//! Serde support, behind the `serde` feature.
//!
//! A [`Float32`] serializes as a plain `f32` and deserializes from one,
//! so it is wire-compatible with any format's native single-precision
//! float.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::float32::Float32;

impl Serialize for Float32 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f32(self.value())
    }
}

impl<'de> Deserialize<'de> for Float32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f32::deserialize(deserializer).map(Float32::new)
    }
}
