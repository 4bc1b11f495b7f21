use std::collections::hash_map::{self, HashMap};
use std::fmt;
use std::str::FromStr;

use super::{Scalar, Struct, Value};
use crate::tabular::Row;
use crate::{Error, ParseOptions, Result};

pub type Members = HashMap<String, Value>;

/// An object value.
///
/// In map mode it holds zero or more members whose enumeration order is
/// unspecified. In scalar mode it holds a single, optionally keyed, scalar;
/// that is how bare literals and primitive array elements are represented.
#[derive(Clone, Debug, PartialEq)]
pub enum Builder {
    Scalar { key: Option<String>, value: Scalar },
    Map(Members),
}

impl Default for Builder {
    fn default() -> Self {
        Builder::Map(Members::new())
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Builder::Map(Members::with_capacity(capacity))
    }

    /// An unkeyed scalar-mode value.
    pub fn scalar(value: impl Into<Scalar>) -> Self {
        Builder::Scalar {
            key: None,
            value: value.into(),
        }
    }

    pub fn keyed(key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Builder::Scalar {
            key: Some(key.into()),
            value: value.into(),
        }
    }

    pub const fn is_scalar(&self) -> bool {
        matches!(self, Builder::Scalar { .. })
    }

    pub const fn is_map(&self) -> bool {
        matches!(self, Builder::Map(_))
    }

    /// Key of a keyed scalar-mode value.
    pub fn key(&self) -> Option<&str> {
        match self {
            Builder::Scalar { key, .. } => key.as_deref(),
            Builder::Map(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Builder::Scalar { value, .. } => Some(value),
            Builder::Map(_) => None,
        }
    }

    pub fn members(&self) -> Option<&Members> {
        match self {
            Builder::Map(members) => Some(members),
            Builder::Scalar { .. } => None,
        }
    }

    /// Store `value` under `key`, returning the previous value for that key.
    ///
    /// A scalar-mode instance switches to map mode first. A keyed scalar is
    /// carried over as a member; an unkeyed one is discarded.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let (key, value) = (key.into(), value.into());
        if let Builder::Map(members) = self {
            return members.insert(key, value);
        }
        let mut members = self.take_members();
        let previous = members.insert(key, value);
        *self = Builder::Map(members);
        previous
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.members().and_then(|members| members.get(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Builder::Map(members) => members.get_mut(key),
            Builder::Scalar { .. } => None,
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        match self {
            Builder::Map(members) => members.remove(key),
            Builder::Scalar { .. } => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of members; a scalar-mode value counts as one.
    pub fn len(&self) -> usize {
        match self {
            Builder::Map(members) => members.len(),
            Builder::Scalar { .. } => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Iterate over map-mode members. Scalar-mode values yield nothing.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.members().map(|members| members.iter()),
        }
    }

    /// Move the contents out as members, leaving an empty map behind.
    fn take_members(&mut self) -> Members {
        match std::mem::take(self) {
            Builder::Map(members) => members,
            Builder::Scalar {
                key: Some(key),
                value,
            } => Members::from([(key, Value::Scalar(value))]),
            Builder::Scalar { key: None, value } => {
                log::debug!("discarding unkeyed scalar {value} on switch to map mode");
                Members::new()
            }
        }
    }
}

pub struct Iter<'a> {
    inner: Option<hash_map::Iter<'a, String, Value>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .as_mut()?
            .next()
            .map(|(key, value)| (key.as_str(), value))
    }
}

impl<'a> IntoIterator for &'a Builder {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Builder {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Builder::Map(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<Scalar> for Builder {
    fn from(value: Scalar) -> Self {
        Builder::scalar(value)
    }
}

impl Struct for Builder {
    fn parse_with_options(&mut self, text: &str, options: &ParseOptions) -> Result<()> {
        if text.trim().is_empty() {
            return Ok(());
        }
        match crate::decode::parse_object_with_options(text, options)? {
            Builder::Map(members) => {
                for (key, value) in members {
                    self.put(key, value);
                }
            }
            scalar => *self = scalar,
        }
        Ok(())
    }

    fn to_row(&self) -> Result<Row> {
        match self {
            Builder::Scalar {
                key: Some(key),
                value,
            } => {
                let mut row = Row::with_capacity(1);
                row.push(key.clone(), value.clone());
                Ok(row)
            }
            Builder::Scalar { key: None, .. } => Err(Error::unsupported(
                "an unkeyed scalar cannot be flattened into a row",
            )),
            Builder::Map(members) => Ok(Row::from_members(members)),
        }
    }
}

impl FromStr for Builder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::decode::parse_object(s)
    }
}

impl fmt::Display for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encode::builder_to_string(self))
    }
}
