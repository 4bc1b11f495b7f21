use crate::constants::QUOTE;
use crate::error::Location;
use crate::text::string::unescape_string;
use crate::types::{array_to_indexed_object, Builder, Builders, Members, Scalar, Value};
use crate::{Error, ParseOptions, Result};

use super::cursor::{trim_span, Cursor};
use super::infer::infer_scalar;
use super::scan::{find_closing_quote, find_matching};

/// Recursive-descent parser over a single input buffer.
///
/// Every routine works on an absolute `start..end` span of `input`.
pub(crate) struct Parser<'a> {
    input: &'a str,
    options: &'a ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: &'a ParseOptions) -> Self {
        Self { input, options }
    }

    pub fn parse_root_object(&self) -> Result<Builder> {
        self.parse_object(0, self.input.len(), 1)
    }

    pub fn parse_root_array(&self) -> Result<Builders> {
        self.parse_array(0, self.input.len(), 1)
    }

    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    fn cursor(&self, start: usize, end: usize) -> Cursor<'a> {
        Cursor::new(self.input, start, end)
    }

    fn check_depth(&self, depth: usize, offset: usize) -> Result<()> {
        match self.options.max_depth {
            Some(max_depth) if depth > max_depth => {
                Err(Error::depth_limit(max_depth, Location::of(self.input, offset)))
            }
            _ => Ok(()),
        }
    }

    fn malformed(&self, message: &str, offset: usize) -> Error {
        Error::malformed_at(message, Location::of(self.input, offset))
    }

    /// Index of the delimiter closing the one at `open_idx`.
    fn matching(&self, open_idx: usize, end: usize, open: u8, close: u8) -> Result<usize> {
        find_matching(self.bytes(), open_idx, end, open, close, self.options.scan_mode).ok_or_else(
            || {
                let message = format!("no matching '{}' for '{}'", close as char, open as char);
                self.malformed(&message, open_idx)
            },
        )
    }

    fn closing_quote(&self, open_idx: usize, end: usize) -> Result<usize> {
        find_closing_quote(self.bytes(), open_idx + 1, end)
            .ok_or_else(|| self.malformed("unterminated string", open_idx))
    }

    pub fn parse_object(&self, start: usize, end: usize, depth: usize) -> Result<Builder> {
        let bytes = self.bytes();
        let (start, end) = trim_span(bytes, start, end);
        if start == end {
            return Ok(Builder::new());
        }
        self.check_depth(depth, start)?;

        if bytes[start] == QUOTE {
            let inner_end = if end - start >= 2 && bytes[end - 1] == QUOTE {
                end - 1
            } else {
                end
            };
            return Ok(Builder::scalar(&self.input[start + 1..inner_end]));
        }

        if bytes[start] != b'{' || bytes[end - 1] != b'}' {
            return Err(self.malformed("expected an object enclosed in '{' and '}'", start));
        }
        let close = self.matching(start, end, b'{', b'}')?;
        if close != end - 1 {
            return Err(self.malformed("unexpected content after the closing '}'", close + 1));
        }

        let mut members = Members::new();
        self.parse_members(start + 1, close, depth, &mut members)?;
        Ok(Builder::Map(members))
    }

    fn parse_members(
        &self,
        start: usize,
        end: usize,
        depth: usize,
        members: &mut Members,
    ) -> Result<()> {
        let mut cursor = self.cursor(start, end);
        loop {
            cursor.skip_separators();
            if cursor.is_at_end() {
                return Ok(());
            }
            let key = self.parse_key(&mut cursor)?;
            cursor.skip_whitespace();
            if !cursor.eat(b':') {
                return Err(self.malformed("expected ':' after member key", cursor.position()));
            }
            cursor.skip_whitespace();
            let value = self.parse_member_value(&mut cursor, depth)?;
            self.expect_separator(&mut cursor, "expected ',' between members")?;
            members.insert(key, value);
        }
    }

    fn parse_key(&self, cursor: &mut Cursor<'a>) -> Result<String> {
        let start = cursor.position();
        if cursor.peek() == Some(QUOTE) {
            let close = self.closing_quote(start, cursor.end())?;
            cursor.advance_to(close + 1);
            return Ok(unescape_string(cursor.slice(start + 1, close)).into_owned());
        }
        let colon = cursor
            .find(b':')
            .ok_or_else(|| self.malformed("expected a member key", start))?;
        cursor.advance_to(colon);
        let key = cursor.slice(start, colon).trim_end();
        Ok(key.to_string())
    }

    fn parse_member_value(&self, cursor: &mut Cursor<'a>, depth: usize) -> Result<Value> {
        let start = cursor.position();
        match cursor.peek() {
            Some(QUOTE) => {
                let close = self.closing_quote(start, cursor.end())?;
                cursor.advance_to(close + 1);
                let text = unescape_string(cursor.slice(start + 1, close));
                Ok(Value::Scalar(Scalar::String(text.into_owned())))
            }
            Some(b'{') => {
                let close = self.matching(start, cursor.end(), b'{', b'}')?;
                cursor.advance_to(close + 1);
                Ok(Value::Object(self.parse_object(start, close + 1, depth + 1)?))
            }
            Some(b'[') => {
                let close = self.matching(start, cursor.end(), b'[', b']')?;
                cursor.advance_to(close + 1);
                Ok(Value::Array(self.parse_array(start, close + 1, depth + 1)?))
            }
            _ => Ok(Value::Scalar(self.parse_primitive(cursor)?)),
        }
    }

    /// Scan to the next comma or the end of the span and classify the token.
    fn parse_primitive(&self, cursor: &mut Cursor<'a>) -> Result<Scalar> {
        let start = cursor.position();
        let end = cursor.find(b',').unwrap_or(cursor.end());
        cursor.advance_to(end);
        let token = cursor.slice(start, end).trim();
        if token.is_empty() {
            return Err(self.malformed("missing value", start));
        }
        Ok(infer_scalar(token))
    }

    fn expect_separator(&self, cursor: &mut Cursor<'a>, message: &str) -> Result<()> {
        cursor.skip_whitespace();
        if cursor.is_at_end() || cursor.peek() == Some(b',') {
            Ok(())
        } else {
            Err(self.malformed(message, cursor.position()))
        }
    }

    pub fn parse_array(&self, start: usize, end: usize, depth: usize) -> Result<Builders> {
        let bytes = self.bytes();
        let (start, end) = trim_span(bytes, start, end);
        if start == end {
            return Ok(Builders::new());
        }
        self.check_depth(depth, start)?;

        match bytes[start] {
            b'[' => {
                let close = self.matching(start, end, b'[', b']')?;
                if close != end - 1 {
                    return Err(
                        self.malformed("unexpected content after the closing ']'", close + 1)
                    );
                }
                self.parse_elements(start + 1, close, depth)
            }
            b'{' => self.parse_object_stream(start, end, depth),
            _ => Err(self.malformed("expected an array enclosed in '[' and ']'", start)),
        }
    }

    fn parse_elements(&self, start: usize, end: usize, depth: usize) -> Result<Builders> {
        let mut cursor = self.cursor(start, end);
        let mut items = Builders::new();
        loop {
            cursor.skip_separators();
            if cursor.is_at_end() {
                return Ok(items);
            }
            items.add(self.parse_element(&mut cursor, depth)?);
            self.expect_separator(&mut cursor, "expected ',' between elements")?;
        }
    }

    fn parse_element(&self, cursor: &mut Cursor<'a>, depth: usize) -> Result<Builder> {
        let start = cursor.position();
        match cursor.peek() {
            Some(QUOTE) => {
                let close = self.closing_quote(start, cursor.end())?;
                cursor.advance_to(close + 1);
                Ok(Builder::scalar(cursor.slice(start + 1, close)))
            }
            Some(b'{') => {
                let close = self.matching(start, cursor.end(), b'{', b'}')?;
                cursor.advance_to(close + 1);
                self.parse_object(start, close + 1, depth + 1)
            }
            Some(b'[') => {
                let close = self.matching(start, cursor.end(), b'[', b']')?;
                cursor.advance_to(close + 1);
                let nested = self.parse_array(start, close + 1, depth + 1)?;
                Ok(array_to_indexed_object(nested))
            }
            _ => Ok(Builder::scalar(self.parse_primitive(cursor)?)),
        }
    }

    /// `{...},{...}` without enclosing brackets: one element per object.
    fn parse_object_stream(&self, start: usize, end: usize, depth: usize) -> Result<Builders> {
        let mut cursor = self.cursor(start, end);
        let mut items = Builders::new();
        loop {
            cursor.skip_separators();
            let open = cursor.position();
            match cursor.peek() {
                None => return Ok(items),
                Some(b'{') => {
                    let close = self.matching(open, end, b'{', b'}')?;
                    cursor.advance_to(close + 1);
                    items.add(self.parse_object(open, close + 1, depth + 1)?);
                    self.expect_separator(&mut cursor, "expected ',' between objects")?;
                }
                Some(_) => return Err(self.malformed("expected '{' in object stream", open)),
            }
        }
    }
}
