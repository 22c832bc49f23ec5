use crate::error::{Error, Result};

use super::ids::{ContextId, TerminalId};
use super::matched::MatchedTerminal;
use super::terminals::TerminalTable;

/// Id space declared by a compiled grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerBounds {
    /// Number of declared contexts
    pub contexts: usize,
    /// Number of declared terminals, including ε and $
    pub terminals: usize,
}

impl LexerBounds {
    pub fn new(contexts: usize, terminals: usize) -> Self {
        Self {
            contexts,
            terminals,
        }
    }

    /// Bounds covering a terminal table and `contexts` contexts
    pub fn for_table(table: &TerminalTable, contexts: usize) -> Self {
        Self::new(contexts, table.len())
    }

    pub fn contains_context(&self, context: ContextId) -> bool {
        context.as_usize() < self.contexts
    }

    pub fn contains_terminal(&self, terminal: TerminalId) -> bool {
        terminal.as_usize() < self.terminals
    }

    /// Checks that both ids of a candidate lie in the declared space
    pub fn check(&self, candidate: &MatchedTerminal) -> Result<()> {
        if !self.contains_context(candidate.context()) {
            return Err(Error::UnknownContext(candidate.context()));
        }
        if !self.contains_terminal(candidate.index()) {
            return Err(Error::UnknownTerminal(candidate.index()));
        }
        Ok(())
    }
}
