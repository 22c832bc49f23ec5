use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::ContextId;

/// Static parent relation between lexical contexts
///
/// Terminals matched in a context are also valid in its descendants. Every
/// context has at most one parent, so the ancestors of a context form a chain.
/// A context that was never declared has no parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextHierarchy {
    parents: HashMap<ContextId, ContextId>,
}

impl ContextHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a hierarchy from `(child, parent)` pairs
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (ContextId, ContextId)>,
    {
        let mut hierarchy = Self::new();
        for (child, parent) in edges {
            hierarchy.add(child, parent)?;
        }
        Ok(hierarchy)
    }

    /// Declares `parent` as the parent of `child`, replacing any previous one
    pub fn add(&mut self, child: ContextId, parent: ContextId) -> Result<()> {
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(Error::HierarchyCycle(child));
        }
        self.parents.insert(child, parent);
        Ok(())
    }

    pub fn parent_of(&self, context: ContextId) -> Option<ContextId> {
        self.parents.get(&context).copied()
    }

    /// The context itself, then its parent, grand-parent and so on
    pub fn ancestors(&self, context: ContextId) -> Ancestors<'_> {
        Ancestors {
            hierarchy: self,
            next: Some(context),
        }
    }

    /// Whether `ancestor` is `context` or one of its ancestors
    pub fn is_ancestor(&self, ancestor: ContextId, context: ContextId) -> bool {
        self.ancestors(context).any(|c| c == ancestor)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Iterator over a context's ancestor chain, nearest first
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    hierarchy: &'a ContextHierarchy,
    next: Option<ContextId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ContextId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.hierarchy.parent_of(current);
        Some(current)
    }
}
