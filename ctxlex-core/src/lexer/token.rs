use thiserror::Error;

use crate::text::{Text, TextPosition, TextSpan};
use crate::types::{ContextId, TerminalId};

/// A token produced by the scan driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Index of the matched terminal
    pub terminal: TerminalId,
    /// Context the winning match belongs to; may be an ancestor of the
    /// context that was active when scanning
    pub context: ContextId,
    pub span: TextSpan,
}

impl Token {
    pub fn new(terminal: TerminalId, context: ContextId, span: TextSpan) -> Self {
        Self {
            terminal,
            context,
            span,
        }
    }

    /// Whether this is the end-of-input token
    pub fn is_end(&self) -> bool {
        self.terminal == TerminalId::DOLLAR
    }

    /// The matched text
    pub fn value<'t>(&self, text: &'t Text<'_>) -> &'t str {
        text.value(self.span).unwrap_or_default()
    }
}

/// Input that no terminal valid in the active context matches
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unexpected character {unexpected:?} at {position} in context {context}")]
pub struct LexicalError {
    pub position: TextPosition,
    pub span: TextSpan,
    pub unexpected: char,
    pub context: ContextId,
}
