//! `serde::Serialize` for the value types, so parsed values can be handed to
//! any serde data format.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::types::{Builder, Builders, Scalar, Value};
use crate::{Error, Result};

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Scalar::String(s) => serializer.serialize_str(s),
            Scalar::Integer(i) => serializer.serialize_i64(*i),
            // Decimal text keeps every digit.
            Scalar::BigInteger(i) => serializer.collect_str(i),
            Scalar::Double(d) => serializer.serialize_f64(*d),
            Scalar::Boolean(b) => serializer.serialize_bool(*b),
            Scalar::Null => serializer.serialize_unit(),
        }
    }
}

impl Serialize for Builder {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Builder::Scalar { value, .. } => value.serialize(serializer),
            Builder::Map(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (key, value) in members {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for Builders {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Scalar(scalar) => scalar.serialize(serializer),
            Value::Object(builder) => builder.serialize(serializer),
            Value::Array(array) => array.serialize(serializer),
        }
    }
}

/// Convert any of the value types into a `serde_json::Value`.
pub fn to_json_value<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|err| Error::unsupported(format!("serde_json conversion failed: {err}")))
}
