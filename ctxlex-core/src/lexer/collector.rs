use crate::error::{Error, Result};
use crate::types::{ContextId, MatchedTerminal};

/// Terminals matched at one scan position, at most one per context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    entries: Vec<MatchedTerminal>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from candidates, rejecting duplicate contexts
    pub fn from_matches<I>(matches: I) -> Result<Self>
    where
        I: IntoIterator<Item = MatchedTerminal>,
    {
        let mut set = Self::new();
        for candidate in matches {
            set.insert(candidate)?;
        }
        Ok(set)
    }

    /// Gets the entry recorded for a context
    pub fn for_context(&self, context: ContextId) -> Option<MatchedTerminal> {
        self.entries
            .iter()
            .find(|entry| entry.context() == context)
            .copied()
    }

    pub fn contains_context(&self, context: ContextId) -> bool {
        self.for_context(context).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were recorded
    pub fn iter(&self) -> impl Iterator<Item = &MatchedTerminal> {
        self.entries.iter()
    }

    fn insert(&mut self, candidate: MatchedTerminal) -> Result<()> {
        if let Some(existing) = self.for_context(candidate.context()) {
            return Err(Error::DuplicateContext {
                context: candidate.context(),
                existing: existing.index(),
                candidate: candidate.index(),
            });
        }
        self.entries.push(candidate);
        Ok(())
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a MatchedTerminal;
    type IntoIter = std::slice::Iter<'a, MatchedTerminal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Accumulates the candidates reported by the automaton for one scan position
///
/// The scan driver calls [`reset`](Self::reset) at each new position, then
/// [`record`](Self::record) once per candidate. A duplicate context means the
/// automaton was built from an inconsistent grammar and is reported as
/// [`Error::DuplicateContext`].
#[derive(Debug, Clone, Default)]
pub struct MatchCollector {
    current: MatchSet,
}

impl MatchCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, candidate: MatchedTerminal) -> Result<()> {
        self.current.insert(candidate)
    }

    pub fn reset(&mut self) {
        self.current.clear();
    }

    pub fn for_context(&self, context: ContextId) -> Option<MatchedTerminal> {
        self.current.for_context(context)
    }

    /// The candidates recorded since the last reset
    pub fn match_set(&self) -> &MatchSet {
        &self.current
    }
}
