use crate::error::{Error, Result};
use crate::types::ContextId;

/// Stack of lexical contexts opened by the parser
///
/// The base context stays on the stack; only contexts pushed on top of it can
/// be popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextStack {
    base: ContextId,
    opened: Vec<ContextId>,
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextStack {
    /// Creates a stack based on the default context
    pub fn new() -> Self {
        Self::with_base(ContextId::DEFAULT)
    }

    pub fn with_base(base: ContextId) -> Self {
        Self {
            base,
            opened: Vec::new(),
        }
    }

    pub fn base(&self) -> ContextId {
        self.base
    }

    /// The innermost open context
    pub fn active(&self) -> ContextId {
        self.opened.last().copied().unwrap_or(self.base)
    }

    pub fn push(&mut self, context: ContextId) {
        self.opened.push(context);
    }

    /// Closes the innermost context and returns it
    pub fn pop(&mut self) -> Result<ContextId> {
        self.opened.pop().ok_or(Error::ContextStackUnderflow)
    }

    /// Number of contexts pushed above the base
    pub fn depth(&self) -> usize {
        self.opened.len()
    }
}
