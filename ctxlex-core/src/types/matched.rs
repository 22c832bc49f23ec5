use std::fmt;

use super::ids::{ContextId, TerminalId};

/// A terminal matched by an accepting automaton state, together with the
/// lexical context it belongs to
///
/// Equality, hashing and ordering are structural on `(context, index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchedTerminal {
    context: ContextId,
    index: TerminalId,
}

impl MatchedTerminal {
    /// Creates a matched terminal; ids are checked by the scan driver, not here
    pub const fn new(context: ContextId, index: TerminalId) -> Self {
        Self { context, index }
    }

    /// Gets the context of the matched terminal
    pub const fn context(&self) -> ContextId {
        self.context
    }

    /// Gets the index of the matched terminal
    pub const fn index(&self) -> TerminalId {
        self.index
    }
}

impl From<(ContextId, TerminalId)> for MatchedTerminal {
    fn from((context, index): (ContextId, TerminalId)) -> Self {
        Self::new(context, index)
    }
}

impl fmt::Display for MatchedTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in context {}", self.index, self.context)
    }
}
