//! Value kinds for animated properties.
//!
//! Scalars, 2-D vectors, and colors interpolate; Bool/Text are step-only
//! (flags, overlay content).

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Vec2,
    Color,
    Bool,
    Text,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    Scalar(f32),
    Vec2([f32; 2]),
    /// RGBA color, components in [0,1].
    Color([f32; 4]),
    /// Step-only boolean value (no blending)
    Bool(bool),
    /// Step-only string value (no blending)
    Text(String),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::Color(_) => ValueKind::Color,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// True for kinds that interpolate continuously.
    #[inline]
    pub fn is_tweenable(&self) -> bool {
        matches!(self, Value::Scalar(_) | Value::Vec2(_) | Value::Color(_))
    }
}
