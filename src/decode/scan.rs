//! Depth scanning: locating the end of a `{...}` or `[...]` span by counting
//! delimiters instead of tokenizing the content.

use memchr::memchr;

use crate::constants::{ESCAPE_CHAR, QUOTE};
use crate::options::ScanMode;

/// True when an odd run of backslashes directly precedes `idx`.
#[inline]
fn is_escaped(bytes: &[u8], idx: usize) -> bool {
    let run = bytes[..idx]
        .iter()
        .rev()
        .take_while(|&&byte| byte == ESCAPE_CHAR)
        .count();
    run % 2 == 1
}

/// Index of the delimiter closing the one opened at `open_idx`, searching no
/// further than `end` (exclusive).
///
/// Only `open` and `close` affect the depth; a delimiter preceded by an odd
/// number of backslashes is ignored. Under [`ScanMode::Legacy`] delimiters inside
/// quoted strings are counted too.
pub(crate) fn find_matching(
    bytes: &[u8],
    open_idx: usize,
    end: usize,
    open: u8,
    close: u8,
    mode: ScanMode,
) -> Option<usize> {
    debug_assert_eq!(bytes.get(open_idx), Some(&open));
    let mut depth = 1usize;
    let mut in_string = false;
    for (idx, &byte) in bytes.iter().enumerate().take(end).skip(open_idx + 1) {
        if is_escaped(bytes, idx) {
            continue;
        }
        if mode == ScanMode::StringAware && byte == QUOTE {
            in_string = !in_string;
            continue;
        }
        if in_string {
            continue;
        }
        if byte == open {
            depth += 1;
        } else if byte == close {
            depth -= 1;
            if depth == 0 {
                return Some(idx);
            }
        }
    }
    None
}

/// Index of the first quote at or after `from` that is not preceded by a
/// backslash, searching no further than `end` (exclusive).
pub(crate) fn find_closing_quote(bytes: &[u8], from: usize, end: usize) -> Option<usize> {
    let mut start = from;
    while start < end {
        let idx = start + memchr(QUOTE, &bytes[start..end])?;
        if !is_escaped(bytes, idx) {
            return Some(idx);
        }
        start = idx + 1;
    }
    None
}
