use std::borrow::Cow;

use crate::constants::{is_escaped_char, ESCAPE_CHAR};

/// Append `value` to `out`, prefixing every backslash, quote, apostrophe,
/// bracket and brace with a backslash.
pub fn escape_string_into(out: &mut String, value: &str) {
    let bytes = value.as_bytes();
    let mut start = 0;
    for (idx, &byte) in bytes.iter().enumerate() {
        if !is_escaped_char(byte) {
            continue;
        }
        if start < idx {
            out.push_str(&value[start..idx]);
        }
        out.push(ESCAPE_CHAR as char);
        out.push(byte as char);
        start = idx + 1;
    }
    if start < value.len() {
        out.push_str(&value[start..]);
    }
}

pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    escape_string_into(&mut out, value);
    out
}

/// Undo [`escape_string_into`]. A backslash followed by anything other than
/// one of the escaped characters is kept as is.
pub fn unescape_string(value: &str) -> Cow<'_, str> {
    if memchr::memchr(ESCAPE_CHAR, value.as_bytes()).is_none() {
        return Cow::Borrowed(value);
    }
    let bytes = value.as_bytes();
    let mut out = String::with_capacity(value.len());
    let mut start = 0;
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == ESCAPE_CHAR && idx + 1 < bytes.len() && is_escaped_char(bytes[idx + 1]) {
            out.push_str(&value[start..idx]);
            start = idx + 1;
            idx += 2;
        } else {
            idx += 1;
        }
    }
    out.push_str(&value[start..]);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case("plain", "plain")]
    #[case("a{b}", "a\\{b\\}")]
    #[case("[x]", "\\[x\\]")]
    #[case("say \"hi\"", "say \\\"hi\\\"")]
    #[case("it's", "it\\'s")]
    #[case("back\\slash", "back\\\\slash")]
    #[case("C:\\", "C:\\\\")]
    fn test_escape_string(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_string(input), expected);
    }

    #[rstest::rstest]
    #[case("plain")]
    #[case("a{b}")]
    #[case("mixed 'quotes' and \"more\" [1]")]
    #[case("ünïcödé {ok}")]
    #[case("C:\\")]
    #[case("it\\'s")]
    #[case("\\\\{")]
    fn test_unescape_reverses_escape(#[case] input: &str) {
        assert_eq!(unescape_string(&escape_string(input)), input);
    }

    #[rstest::rstest]
    fn test_unescape_keeps_unknown_sequences() {
        assert_eq!(unescape_string("a\\nb"), "a\\nb");
        assert_eq!(unescape_string("trailing\\"), "trailing\\");
        assert_eq!(unescape_string("a\\\\b"), "a\\b");
        assert!(matches!(unescape_string("none"), Cow::Borrowed(_)));
    }
}
