use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;

use crate::num::number::{format_double, format_integer};

/// A leaf value produced by type inference or supplied by the caller.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Scalar {
    String(String),
    Integer(i64),
    /// Integer literal outside the `i64` range.
    BigInteger(BigInt),
    Double(f64),
    Boolean(bool),
    #[default]
    Null,
}

impl Scalar {
    pub const fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Scalar::String(_))
    }

    pub const fn is_number(&self) -> bool {
        matches!(
            self,
            Scalar::Integer(_) | Scalar::BigInteger(_) | Scalar::Double(_)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_big_integer(&self) -> Option<&BigInt> {
        match self {
            Scalar::BigInteger(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Double(f) => Some(*f),
            Scalar::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::String(_) => "string",
            Scalar::Integer(_) => "integer",
            Scalar::BigInteger(_) => "big integer",
            Scalar::Double(_) => "double",
            Scalar::Boolean(_) => "boolean",
            Scalar::Null => "null",
        }
    }
}

/// Canonical text of the scalar. Strings are written as is, without quotes.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Integer(i) => f.write_str(&format_integer(*i)),
            Scalar::BigInteger(i) => write!(f, "{i}"),
            Scalar::Double(d) => f.write_str(&format_double(*d)),
            Scalar::Boolean(b) => write!(f, "{b}"),
            Scalar::Null => f.write_str("null"),
        }
    }
}

/// Classifies the text the same way an unquoted member value is classified.
impl FromStr for Scalar {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(crate::decode::infer_scalar(s))
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Integer(n as i64)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Integer(n as i64)
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Scalar::Integer(n),
            Err(_) => Scalar::BigInteger(BigInt::from(n)),
        }
    }
}

impl From<BigInt> for Scalar {
    fn from(n: BigInt) -> Self {
        Scalar::BigInteger(n)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Double(n)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Boolean(b)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Null, Into::into)
    }
}
