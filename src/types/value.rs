use std::fmt;

use num_bigint::BigInt;

use super::{Builder, Builders, Scalar};

/// A member value stored in a map-mode [`Builder`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Object(Builder),
    Array(Builders),
}

impl Value {
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Builder> {
        match self {
            Value::Object(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Builder> {
        match self {
            Value::Object(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Builders> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Builders> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Scalar::as_i64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_f64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Null))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Scalar(s) => s.type_name(),
            Value::Object(_) => "object",
            Value::Array(_) => "array",
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<Builder> for Value {
    fn from(b: Builder) -> Self {
        Value::Object(b)
    }
}

impl From<Builders> for Value {
    fn from(a: Builders) -> Self {
        Value::Array(a)
    }
}

macro_rules! value_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

value_from_scalar!(&str, String, i32, i64, u32, u64, BigInt, f64, bool);

/// Renders the value as it appears inside a map-mode object, so string
/// scalars are escaped.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encode::value_to_string(self))
    }
}
