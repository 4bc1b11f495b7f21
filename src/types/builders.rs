use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::{Builder, Members, Scalar, Struct, Value};
use crate::tabular::Row;
use crate::{Error, ParseOptions, Result};

/// An array value: an ordered sequence of object values.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Builders {
    items: Vec<Builder>,
}

impl Builders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, item: impl Into<Builder>) {
        self.items.push(item.into());
    }

    pub fn insert(&mut self, index: usize, item: impl Into<Builder>) {
        self.items.insert(index, item.into());
    }

    pub fn remove(&mut self, index: usize) -> Option<Builder> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Builder> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Builder> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Builder> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Builder> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[Builder] {
        &self.items
    }

    /// Scalars of the unkeyed scalar-mode elements, in order. Other elements are skipped.
    pub fn scalars(&self) -> impl Iterator<Item = &Scalar> {
        self.items.iter().filter_map(|item| match item {
            Builder::Scalar { key: None, value } => Some(value),
            _ => None,
        })
    }
}

/// Fold an array into a map-mode object keyed by element position (`"0"`, `"1"`, ...).
///
/// Unkeyed scalar-mode elements become plain scalar members; every other
/// element is stored as a nested object value. This is how the parser stores
/// an array nested directly inside another array.
pub fn array_to_indexed_object(array: Builders) -> Builder {
    let mut members = Members::with_capacity(array.len());
    for (index, item) in array.items.into_iter().enumerate() {
        let value = match item {
            Builder::Scalar { key: None, value } => Value::Scalar(value),
            other => Value::Object(other),
        };
        members.insert(index.to_string(), value);
    }
    log::debug!("folded nested array of {} elements into an indexed object", members.len());
    Builder::Map(members)
}

/// Inverse of [`array_to_indexed_object`].
///
/// Returns `None` unless `object` is in map mode and its keys are exactly
/// `"0"` through `"len - 1"`.
pub fn indexed_object_to_array(object: &Builder) -> Option<Builders> {
    let members = object.members()?;
    let mut array = Builders::with_capacity(members.len());
    for index in 0..members.len() {
        let item = match members.get(index.to_string().as_str())? {
            Value::Scalar(scalar) => Builder::scalar(scalar.clone()),
            Value::Object(builder) => builder.clone(),
            Value::Array(nested) => array_to_indexed_object(nested.clone()),
        };
        array.items.push(item);
    }
    Some(array)
}

impl Index<usize> for Builders {
    type Output = Builder;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl IndexMut<usize> for Builders {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.items[index]
    }
}

impl IntoIterator for Builders {
    type Item = Builder;
    type IntoIter = std::vec::IntoIter<Builder>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Builders {
    type Item = &'a Builder;
    type IntoIter = std::slice::Iter<'a, Builder>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Into<Builder>> FromIterator<T> for Builders {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<Builder>> Extend<T> for Builders {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl From<Vec<Builder>> for Builders {
    fn from(items: Vec<Builder>) -> Self {
        Self { items }
    }
}

impl Struct for Builders {
    fn parse_with_options(&mut self, text: &str, options: &ParseOptions) -> Result<()> {
        let parsed = crate::decode::parse_array_with_options(text, options)?;
        self.extend(parsed);
        Ok(())
    }

    fn to_row(&self) -> Result<Row> {
        Err(Error::unsupported("an array value cannot be flattened into a row"))
    }
}

impl FromStr for Builders {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::decode::parse_array(s)
    }
}

impl fmt::Display for Builders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encode::builders_to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Builders {
        let mut array = Builders::new();
        array.add(Scalar::from(1));
        array.add(Builder::from_iter([("x", 2)]));
        array.add(Scalar::from("three"));
        array
    }

    #[rstest::rstest]
    fn test_add_preserves_order() {
        let array = sample();
        assert_eq!(array.len(), 3);
        assert_eq!(array[0].as_scalar(), Some(&Scalar::Integer(1)));
        assert!(array[1].is_map());
        assert_eq!(array[2].as_scalar(), Some(&Scalar::from("three")));
    }

    #[rstest::rstest]
    fn test_remove_out_of_bounds() {
        let mut array = sample();
        assert!(array.remove(10).is_none());
        assert!(array.remove(0).is_some());
        assert_eq!(array.len(), 2);
    }

    #[rstest::rstest]
    fn test_scalars_skips_objects() {
        let array = sample();
        let scalars: Vec<&Scalar> = array.scalars().collect();
        assert_eq!(scalars, vec![&Scalar::Integer(1), &Scalar::from("three")]);
    }

    #[rstest::rstest]
    fn test_indexed_folding() {
        let folded = array_to_indexed_object(sample());
        assert_eq!(folded.get("0"), Some(&Value::from(1)));
        assert!(folded.get("1").is_some_and(Value::is_object));
        assert_eq!(folded.get("2").and_then(Value::as_str), Some("three"));

        let unfolded = indexed_object_to_array(&folded).unwrap();
        assert_eq!(unfolded, sample());
    }

    #[rstest::rstest]
    fn test_unfold_rejects_non_indexed_keys() {
        let object = Builder::from_iter([("0", 1), ("name", 2)]);
        assert!(indexed_object_to_array(&object).is_none());
        assert!(indexed_object_to_array(&Builder::scalar(1)).is_none());
    }

    #[rstest::rstest]
    fn test_to_row_unsupported() {
        let err = sample().to_row().unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Unsupported);
    }

    #[rstest::rstest]
    fn test_parse_appends_elements() {
        let mut array = sample();
        array.parse("[4, {\"y\":5}]").unwrap();
        assert_eq!(array.len(), 5);
        assert_eq!(array[0].as_scalar(), Some(&Scalar::Integer(1)));
        assert_eq!(array[3].as_scalar(), Some(&Scalar::Integer(4)));
        assert_eq!(array[4].get("y").and_then(Value::as_i64), Some(5));
    }

    #[rstest::rstest]
    fn test_failed_parse_appends_nothing() {
        let mut array = sample();
        assert!(array.parse("[4, 5").is_err());
        assert_eq!(array, sample());
    }
}
