use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    Unsupported,
    DepthLimitExceeded,
    Io,
}

/// Byte offset plus 1-based line and column of a position in the parsed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Compute the location of `offset` within `input`.
    pub fn of(input: &str, offset: usize) -> Self {
        let offset = offset.min(input.len());
        let before = &input.as_bytes()[..offset];
        let line = memchr::memchr_iter(b'\n', before).count() + 1;
        let line_start = memchr::memrchr(b'\n', before).map_or(0, |idx| idx + 1);
        let column = before[line_start..]
            .iter()
            .filter(|byte| (**byte & 0xC0) != 0x80)
            .count()
            + 1;
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("malformed input: {message}{}", display_location(.location))]
    MalformedInput {
        message: String,
        location: Option<Location>,
    },

    #[error("unsupported operation: {0}")]
    Unsupported(String),

    #[error("maximum nesting depth of {max_depth} exceeded{}", display_location(.location))]
    DepthLimitExceeded {
        max_depth: usize,
        location: Option<Location>,
    },

    #[error("read failed: {0}")]
    Io(String),
}

fn display_location(location: &Option<Location>) -> String {
    match location {
        Some(location) => format!(" at {location}"),
        None => String::new(),
    }
}

impl Error {
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedInput {
            message: message.into(),
            location: None,
        }
    }

    pub fn malformed_at(message: impl Into<String>, location: Location) -> Self {
        Error::MalformedInput {
            message: message.into(),
            location: Some(location),
        }
    }

    pub fn unsupported(context: impl Into<String>) -> Self {
        Error::Unsupported(context.into())
    }

    pub fn depth_limit(max_depth: usize, location: Location) -> Self {
        Error::DepthLimitExceeded {
            max_depth,
            location: Some(location),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Error::Io(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedInput { .. } => ErrorKind::MalformedInput,
            Error::Unsupported(_) => ErrorKind::Unsupported,
            Error::DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    pub fn location(&self) -> Option<Location> {
        match self {
            Error::MalformedInput { location, .. } | Error::DepthLimitExceeded { location, .. } => {
                *location
            }
            Error::Unsupported(_) | Error::Io(_) => None,
        }
    }
}
