mod cursor;
mod infer;
mod parser;
mod scan;

use std::io::Read;

pub use infer::infer_scalar;

use crate::types::{Builder, Builders};
use crate::{Error, ParseOptions, Result};
use parser::Parser;

pub fn parse_object(input: &str) -> Result<Builder> {
    parse_object_with_options(input, &ParseOptions::default())
}

pub fn parse_object_with_options(input: &str, options: &ParseOptions) -> Result<Builder> {
    Parser::new(input, options).parse_root_object()
}

pub fn parse_array(input: &str) -> Result<Builders> {
    parse_array_with_options(input, &ParseOptions::default())
}

pub fn parse_array_with_options(input: &str, options: &ParseOptions) -> Result<Builders> {
    Parser::new(input, options).parse_root_array()
}

pub fn object_from_slice(input: &[u8], options: &ParseOptions) -> Result<Builder> {
    parse_object_with_options(utf8(input)?, options)
}

pub fn array_from_slice(input: &[u8], options: &ParseOptions) -> Result<Builders> {
    parse_array_with_options(utf8(input)?, options)
}

pub fn object_from_reader<R: Read>(reader: R, options: &ParseOptions) -> Result<Builder> {
    parse_object_with_options(&read_to_string(reader)?, options)
}

pub fn array_from_reader<R: Read>(reader: R, options: &ParseOptions) -> Result<Builders> {
    parse_array_with_options(&read_to_string(reader)?, options)
}

fn utf8(input: &[u8]) -> Result<&str> {
    std::str::from_utf8(input).map_err(|err| Error::malformed(format!("invalid utf-8: {err}")))
}

fn read_to_string<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|err| Error::io(err.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Scalar, Value};
    use crate::{ErrorKind, ScanMode};

    #[rstest::rstest]
    fn test_parse_simple_object() {
        let object = parse_object("{\"name\":\"Ada\",\"age\":37,\"admin\":true}").unwrap();
        assert_eq!(object.get("name").and_then(Value::as_str), Some("Ada"));
        assert_eq!(object.get("age").and_then(Value::as_i64), Some(37));
        assert_eq!(object.get("admin").and_then(Value::as_bool), Some(true));
    }

    #[rstest::rstest]
    fn test_parse_tolerates_whitespace() {
        let object = parse_object(" {\n  \"a\" : 1 ,\n  \"b\" : [ 1 , 2 ]\n} ").unwrap();
        assert_eq!(object.get("a").and_then(Value::as_i64), Some(1));
        assert_eq!(object.get("b").and_then(Value::as_array).map(Builders::len), Some(2));
    }

    #[rstest::rstest]
    fn test_parse_quoted_literal_is_scalar_mode() {
        let object = parse_object("\"hello\"").unwrap();
        assert_eq!(object, Builder::scalar("hello"));
    }

    #[rstest::rstest]
    fn test_parse_unquoted_key() {
        let object = parse_object("{id: 5}").unwrap();
        assert_eq!(object.get("id").and_then(Value::as_i64), Some(5));
    }

    #[rstest::rstest]
    fn test_last_write_wins() {
        let object = parse_object("{\"a\":1,\"a\":2}").unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("a").and_then(Value::as_i64), Some(2));
    }

    #[rstest::rstest]
    fn test_member_strings_are_unescaped() {
        let object = parse_object(r#"{"a":"x\{y\}","b":"it\'s"}"#).unwrap();
        assert_eq!(object.get("a").and_then(Value::as_str), Some("x{y}"));
        assert_eq!(object.get("b").and_then(Value::as_str), Some("it's"));
    }

    #[rstest::rstest]
    fn test_element_strings_are_kept_verbatim() {
        let array = parse_array(r#"["a\"b"]"#).unwrap();
        assert_eq!(array[0].as_scalar(), Some(&Scalar::from("a\\\"b")));
    }

    #[rstest::rstest]
    #[case("{\"a\":1")]
    #[case("{unterminated")]
    #[case("{\"a\":}")]
    #[case("{\"a\" 1}")]
    #[case("{\"a\":\"x}")]
    #[case("{\"a\":1}{\"b\":2}")]
    #[case("{\"a\":\"x\" \"y\"}")]
    #[case("[1]")]
    fn test_malformed_object(#[case] input: &str) {
        let err = parse_object(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[rstest::rstest]
    #[case("[1,2")]
    #[case("[1]x")]
    #[case("1,2")]
    #[case("[\"a\" 1]")]
    #[case("{\"a\":1},x")]
    #[case("[{\"a\":1]")]
    fn test_malformed_array(#[case] input: &str) {
        let err = parse_array(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[rstest::rstest]
    fn test_malformed_location() {
        let err = parse_object("{\n\"a\" 1}").unwrap_err();
        let location = err.location().unwrap();
        assert_eq!((location.line, location.column), (2, 5));
    }

    #[rstest::rstest]
    fn test_string_aware_scan_mode() {
        let input = "{\"a\":\"}\",\"b\":1}";
        assert!(parse_object(input).is_err());

        let options = ParseOptions::new().with_scan_mode(ScanMode::StringAware);
        let object = parse_object_with_options(input, &options).unwrap();
        assert_eq!(object.get("a").and_then(Value::as_str), Some("}"));
        assert_eq!(object.get("b").and_then(Value::as_i64), Some(1));
    }

    #[rstest::rstest]
    fn test_depth_limit() {
        let options = ParseOptions::new().with_max_depth(Some(2));
        assert!(parse_array_with_options("[[1]]", &options).is_ok());
        let err = parse_array_with_options("[[[1]]]", &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DepthLimitExceeded);
    }

    #[rstest::rstest]
    fn test_from_slice_rejects_invalid_utf8() {
        let err = object_from_slice(&[b'{', 0xff, b'}'], &ParseOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[rstest::rstest]
    fn test_from_reader() {
        let array =
            array_from_reader("[1,2,3]".as_bytes(), &ParseOptions::default()).unwrap();
        assert_eq!(array.len(), 3);
    }
}
