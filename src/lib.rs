pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod num;
pub mod options;
pub mod serialize;
pub mod tabular;
pub mod text;
pub mod types;

use std::io::{Read, Write};

pub use crate::decode::{
    infer_scalar, parse_array, parse_array_with_options, parse_object, parse_object_with_options,
};
pub use crate::error::{Error, ErrorKind, Location};
pub use crate::options::{ParseOptions, ScanMode};
pub use crate::serialize::to_json_value;
pub use crate::tabular::{Field, Row};
pub use crate::types::{
    array_to_indexed_object, indexed_object_to_array, Builder, Builders, Scalar, Struct, Value,
};

pub type Result<T> = std::result::Result<T, Error>;

pub fn to_string(builder: &Builder) -> String {
    encode::builder_to_string(builder)
}

pub fn array_to_string(array: &Builders) -> String {
    encode::builders_to_string(array)
}

pub fn to_writer<W: Write>(writer: W, builder: &Builder) -> Result<()> {
    encode::to_writer(writer, builder)
}

pub fn array_to_writer<W: Write>(writer: W, array: &Builders) -> Result<()> {
    encode::array_to_writer(writer, array)
}

pub fn from_slice(input: &[u8]) -> Result<Builder> {
    from_slice_with_options(input, &ParseOptions::default())
}

pub fn from_slice_with_options(input: &[u8], options: &ParseOptions) -> Result<Builder> {
    decode::object_from_slice(input, options)
}

pub fn array_from_slice(input: &[u8]) -> Result<Builders> {
    array_from_slice_with_options(input, &ParseOptions::default())
}

pub fn array_from_slice_with_options(input: &[u8], options: &ParseOptions) -> Result<Builders> {
    decode::array_from_slice(input, options)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Builder> {
    from_reader_with_options(reader, &ParseOptions::default())
}

pub fn from_reader_with_options<R: Read>(reader: R, options: &ParseOptions) -> Result<Builder> {
    decode::object_from_reader(reader, options)
}

pub fn array_from_reader<R: Read>(reader: R) -> Result<Builders> {
    array_from_reader_with_options(reader, &ParseOptions::default())
}

pub fn array_from_reader_with_options<R: Read>(
    reader: R,
    options: &ParseOptions,
) -> Result<Builders> {
    decode::array_from_reader(reader, options)
}
