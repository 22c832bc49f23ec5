use crate::types::TerminalId;

/// Scan driver settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanOptions {
    /// Terminal consumed without producing a token (usually whitespace)
    pub separator: Option<TerminalId>,
    /// Maximum number of lexical errors kept; later ones are counted only
    pub max_errors: Option<usize>,
    /// Whether a `$` token is produced at the end of input
    pub emit_end: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            separator: None,
            max_errors: None,
            emit_end: true,
        }
    }
}

impl ScanOptions {
    pub fn with_separator(mut self, separator: TerminalId) -> Self {
        self.separator = Some(separator);
        self
    }

    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = Some(max_errors);
        self
    }

    pub fn without_end(mut self) -> Self {
        self.emit_end = false;
        self
    }
}
