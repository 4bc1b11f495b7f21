use crate::num::number::format_double;
use crate::text::string::escape_string_into;
use crate::types::Scalar;

pub(crate) struct Writer {
    buffer: String,
}

impl Writer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    pub fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    pub fn write_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    /// `"key":` with the key escaped like a map-mode string.
    pub fn write_key(&mut self, key: &str) {
        self.write_escaped_string(key);
        self.write_char(':');
    }

    pub fn write_escaped_string(&mut self, s: &str) {
        self.write_char('"');
        escape_string_into(&mut self.buffer, s);
        self.write_char('"');
    }

    pub fn write_raw_string(&mut self, s: &str) {
        self.write_char('"');
        self.write_str(s);
        self.write_char('"');
    }

    /// Write a scalar; strings are quoted, escaped only when `escape` is set.
    pub fn write_scalar(&mut self, scalar: &Scalar, escape: bool) {
        match scalar {
            Scalar::String(s) if escape => self.write_escaped_string(s),
            Scalar::String(s) => self.write_raw_string(s),
            Scalar::Integer(i) => {
                let mut buf = itoa::Buffer::new();
                self.write_str(buf.format(*i));
            }
            Scalar::BigInteger(i) => self.write_str(&i.to_string()),
            Scalar::Double(d) => self.write_str(&format_double(*d)),
            Scalar::Boolean(b) => self.write_str(if *b { "true" } else { "false" }),
            Scalar::Null => self.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_writer_basic() {
        let mut writer = Writer::new();
        writer.write_char('{');
        writer.write_key("a");
        writer.write_str("1");
        writer.write_char('}');
        assert_eq!(writer.finish(), "{\"a\":1}");
    }

    #[rstest::rstest]
    fn test_write_strings() {
        let mut writer = Writer::new();
        writer.write_escaped_string("a{b}");
        writer.write_char(',');
        writer.write_raw_string("a{b}");
        assert_eq!(writer.finish(), "\"a\\{b\\}\",\"a{b}\"");
    }

    #[rstest::rstest]
    #[case(Scalar::Integer(-12), "-12")]
    #[case(Scalar::Double(0.5), "0.5")]
    #[case(Scalar::Double(f64::NAN), "null")]
    #[case(Scalar::Boolean(true), "true")]
    #[case(Scalar::Null, "null")]
    #[case(Scalar::from("it's"), "\"it\\'s\"")]
    fn test_write_scalar_escaped(#[case] scalar: Scalar, #[case] expected: &str) {
        let mut writer = Writer::with_capacity(8);
        writer.write_scalar(&scalar, true);
        assert_eq!(writer.finish(), expected);
    }

    #[rstest::rstest]
    fn test_write_key_escapes() {
        let mut writer = Writer::new();
        writer.write_key("a\"b{c}");
        assert_eq!(writer.finish(), r#""a\"b\{c\}":"#);
    }
}
