use std::fmt::Display;

use crate::tabular::Row;
use crate::{ParseOptions, Result};

/// Operations shared by object and array values.
///
/// `Display` renders the compact wire form.
pub trait Struct: Display {
    /// Merge the value parsed from `text` into `self`.
    ///
    /// Objects store each parsed member with `put`, overwriting members of
    /// the same name; arrays append the parsed elements. On error `self` is
    /// left untouched.
    fn parse_with_options(&mut self, text: &str, options: &ParseOptions) -> Result<()>;

    fn parse(&mut self, text: &str) -> Result<()> {
        self.parse_with_options(text, &ParseOptions::default())
    }

    /// Flatten the scalar members into a single row of named fields.
    fn to_row(&self) -> Result<Row>;
}
