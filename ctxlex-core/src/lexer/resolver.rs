use crate::error::{Error, Result};
use crate::types::{ContextId, MatchedTerminal};

use super::collector::MatchSet;
use super::hierarchy::ContextHierarchy;

/// Picks the terminal that applies in the parser's active context
///
/// The active context's own entry wins. Otherwise the nearest ancestor with an
/// entry wins. Terminal indices never take part in the decision, so the result
/// does not depend on the order terminals were declared in.
#[derive(Debug, Clone, Copy)]
pub struct ContextResolver<'h> {
    hierarchy: &'h ContextHierarchy,
}

impl<'h> ContextResolver<'h> {
    pub fn new(hierarchy: &'h ContextHierarchy) -> Self {
        Self { hierarchy }
    }

    pub fn hierarchy(&self) -> &'h ContextHierarchy {
        self.hierarchy
    }

    pub fn resolve(&self, matches: &MatchSet, active: ContextId) -> Result<MatchedTerminal> {
        if matches.is_empty() {
            return Err(Error::NoApplicableTerminal { context: active });
        }
        self.hierarchy
            .ancestors(active)
            .find_map(|context| matches.for_context(context))
            .ok_or(Error::NoApplicableTerminal { context: active })
    }
}
