mod writer;

use std::io::Write;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::types::{Builder, Builders, Value};
use crate::{Error, Result};
use writer::Writer;

#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 256;

/// Render an object value in its compact wire form.
///
/// Scalar mode writes the bare scalar, quoting strings without escaping them.
/// Map mode writes `{"key":value,...}` with string members escaped. Member
/// order follows the map's iteration order and is not stable across
/// instances.
pub fn builder_to_string(builder: &Builder) -> String {
    let mut writer = Writer::new();
    write_builder(&mut writer, builder);
    writer.finish()
}

/// Render an array value as `[elem,elem]`, or `[]` when empty.
pub fn builders_to_string(array: &Builders) -> String {
    let mut writer = Writer::with_capacity(array.len() * 8 + 2);
    write_builders(&mut writer, array);
    writer.finish()
}

pub fn value_to_string(value: &Value) -> String {
    let mut writer = Writer::new();
    write_value(&mut writer, value);
    writer.finish()
}

pub fn to_writer<W: Write>(mut out: W, builder: &Builder) -> Result<()> {
    out.write_all(builder_to_string(builder).as_bytes())
        .map_err(|err| Error::io(err.to_string()))
}

pub fn array_to_writer<W: Write>(mut out: W, array: &Builders) -> Result<()> {
    out.write_all(builders_to_string(array).as_bytes())
        .map_err(|err| Error::io(err.to_string()))
}

fn write_builder(writer: &mut Writer, builder: &Builder) {
    match builder {
        Builder::Scalar { value, .. } => writer.write_scalar(value, false),
        Builder::Map(members) => {
            writer.write_char('{');
            for (idx, (key, value)) in members.iter().enumerate() {
                if idx > 0 {
                    writer.write_char(',');
                }
                writer.write_key(key);
                write_value(writer, value);
            }
            writer.write_char('}');
        }
    }
}

fn write_value(writer: &mut Writer, value: &Value) {
    match value {
        Value::Scalar(scalar) => writer.write_scalar(scalar, true),
        Value::Object(builder) => write_builder(writer, builder),
        Value::Array(array) => write_builders(writer, array),
    }
}

fn write_builders(writer: &mut Writer, array: &Builders) {
    #[cfg(feature = "parallel")]
    {
        if array.len() >= PARALLEL_THRESHOLD {
            let rendered: Vec<String> = array.as_slice().par_iter().map(builder_to_string).collect();
            writer.write_char('[');
            writer.write_str(&rendered.join(","));
            writer.write_char(']');
            return;
        }
    }

    writer.write_char('[');
    for (idx, item) in array.iter().enumerate() {
        if idx > 0 {
            writer.write_char(',');
        }
        write_builder(writer, item);
    }
    writer.write_char(']');
}
