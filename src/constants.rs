pub const MAX_DEPTH: usize = 256;

pub const ESCAPE_CHAR: u8 = b'\\';

pub const QUOTE: u8 = b'"';

/// Characters a map-mode string value escapes with a leading backslash.
pub const ESCAPED_CHARS: &[u8] = b"\\\"'[]{}";

pub const NULL_LITERAL: &str = "null";

#[inline]
pub fn is_escaped_char(byte: u8) -> bool {
    ESCAPED_CHARS.contains(&byte)
}
