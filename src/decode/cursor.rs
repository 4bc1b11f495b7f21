/// A position within a bounded span of the shared input.
///
/// Nested spans are parsed by creating a new cursor over the same input
/// with narrower bounds, so no substring is ever copied.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    position: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= input.len());
        Self {
            input,
            position: start,
            end,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.end
    }

    pub fn peek(&self) -> Option<u8> {
        if self.is_at_end() {
            return None;
        }
        self.bytes().get(self.position).copied()
    }

    pub fn advance_to(&mut self, position: usize) {
        self.position = position.min(self.end);
    }

    /// Consume `byte` if it is next.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.position += 1;
        }
    }

    /// Skip whitespace and commas between members or elements.
    pub fn skip_separators(&mut self) {
        while let Some(byte) = self.peek() {
            if !byte.is_ascii_whitespace() && byte != b',' {
                break;
            }
            self.position += 1;
        }
    }

    /// Absolute index of the next `byte` at or after the cursor, within bounds.
    pub fn find(&self, byte: u8) -> Option<usize> {
        let window = &self.bytes()[self.position..self.end];
        memchr::memchr(byte, window).map(|idx| self.position + idx)
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }
}

/// Shrink `start..end` until neither end is ASCII whitespace.
pub(crate) fn trim_span(bytes: &[u8], mut start: usize, mut end: usize) -> (usize, usize) {
    while start < end && bytes[start].is_ascii_whitespace() {
        start += 1;
    }
    while end > start && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    (start, end)
}
