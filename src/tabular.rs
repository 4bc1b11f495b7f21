//! Flat rows of named scalar fields, the shape handed to the repository and
//! RPC layers.

use serde::Serialize;

use crate::types::{Members, Scalar, Value};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub value: Scalar,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Row {
    fields: Vec<Field>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Scalar members of `members`, sorted by name. Nested object and array
    /// members are skipped.
    pub(crate) fn from_members(members: &Members) -> Self {
        let mut row = Self::with_capacity(members.len());
        for (name, value) in members {
            match value {
                Value::Scalar(scalar) => row.push(name.clone(), scalar.clone()),
                nested => log::debug!("skipping {} member {name} while flattening", nested.type_name()),
            }
        }
        row.fields.sort_by(|a, b| a.name.cmp(&b.name));
        row
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Scalar>) {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
