use crate::constants::MAX_DEPTH;

/// How the depth scanners treat quoted content while matching `{...}` and `[...]` spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Count every brace or bracket not preceded by a backslash, including
    /// ones inside quoted strings. Raw structural characters inside string
    /// values therefore desynchronise the match; escaped ones do not.
    #[default]
    Legacy,
    /// Skip over quoted strings while counting.
    StringAware,
}

#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub scan_mode: ScanMode,
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scan_mode(mut self, scan_mode: ScanMode) -> Self {
        self.scan_mode = scan_mode;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            scan_mode: ScanMode::default(),
            max_depth: Some(MAX_DEPTH),
        }
    }
}
