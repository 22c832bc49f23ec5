use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::text::{Text, TextSpan};
use crate::types::{ContextId, LexerBounds, MatchedTerminal, TerminalId, TerminalTable};

use super::automaton::Automaton;
use super::collector::MatchCollector;
use super::hierarchy::ContextHierarchy;
use super::options::ScanOptions;
use super::resolver::ContextResolver;
use super::stack::ContextStack;
use super::token::{LexicalError, Token};

/// Runs an automaton over a text and produces context-resolved tokens
///
/// At each position the automaton is advanced as far as it goes. Every
/// accepting state on the way is collected and resolved against the active
/// context; the longest one that resolves wins. A position where nothing
/// resolves is reported as a [`LexicalError`] and skipped one character at a
/// time.
pub struct ScanDriver<'a, A: Automaton> {
    text: &'a Text<'a>,
    automaton: &'a A,
    resolver: ContextResolver<'a>,
    terminals: &'a TerminalTable,
    bounds: LexerBounds,
    options: ScanOptions,
    collector: MatchCollector,
    contexts: ContextStack,
    position: usize,
    finished: bool,
    errors: Vec<LexicalError>,
    dropped_errors: usize,
}

impl<'a, A: Automaton> ScanDriver<'a, A> {
    pub fn new(
        text: &'a Text<'a>,
        automaton: &'a A,
        hierarchy: &'a ContextHierarchy,
        terminals: &'a TerminalTable,
        bounds: LexerBounds,
    ) -> Self {
        Self {
            text,
            automaton,
            resolver: ContextResolver::new(hierarchy),
            terminals,
            bounds,
            options: ScanOptions::default(),
            collector: MatchCollector::new(),
            contexts: ContextStack::new(),
            position: 0,
            finished: false,
            errors: Vec::new(),
            dropped_errors: 0,
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Context matches are currently resolved against
    pub fn active_context(&self) -> ContextId {
        self.contexts.active()
    }

    /// Opens a context; subsequent tokens are resolved against it
    pub fn push_context(&mut self, context: ContextId) -> Result<()> {
        if !self.bounds.contains_context(context) {
            return Err(Error::UnknownContext(context));
        }
        debug!("Entering context {}", context);
        self.contexts.push(context);
        Ok(())
    }

    /// Closes the innermost context
    pub fn pop_context(&mut self) -> Result<ContextId> {
        let context = self.contexts.pop()?;
        debug!("Leaving context {}", context);
        Ok(context)
    }

    /// Byte offset of the next scan
    pub fn position(&self) -> usize {
        self.position
    }

    /// Lexical errors recorded so far
    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    /// Lexical errors past `max_errors` that were not kept
    pub fn dropped_errors(&self) -> usize {
        self.dropped_errors
    }

    pub fn terminals(&self) -> &'a TerminalTable {
        self.terminals
    }

    /// Produces the next token, or `None` once the input is exhausted
    ///
    /// A [`Error::DuplicateContext`] or out-of-bounds candidate aborts the
    /// scan: the error is returned and the driver yields nothing afterwards.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            if self.finished {
                return Ok(None);
            }
            if self.text.is_end(self.position) {
                self.finished = true;
                if !self.options.emit_end {
                    return Ok(None);
                }
                let token = Token::new(
                    TerminalId::DOLLAR,
                    self.contexts.active(),
                    TextSpan::new(self.text.len(), 0),
                );
                debug!("End of input {}", token.span);
                return Ok(Some(token));
            }

            let longest = match self.longest_match() {
                Ok(longest) => longest,
                Err(error) => {
                    self.finished = true;
                    return Err(error);
                }
            };

            match longest {
                Some((matched, length)) => {
                    let span = TextSpan::new(self.position, length);
                    self.position += length;
                    if self.options.separator == Some(matched.index()) {
                        trace!("Skipping separator {}", span);
                        continue;
                    }
                    debug!(
                        "Token {} ({}) {} in context {}",
                        self.terminals.name_of(matched.index()).unwrap_or("?"),
                        matched.index(),
                        span,
                        matched.context()
                    );
                    return Ok(Some(Token::new(matched.index(), matched.context(), span)));
                }
                None => self.skip_unexpected(),
            }
        }
    }

    /// Scans the rest of the input with the current context stack
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Longest resolvable match from the current position, with its length
    fn longest_match(&mut self) -> Result<Option<(MatchedTerminal, usize)>> {
        let text = self.text;
        let automaton = self.automaton;
        let active = self.contexts.active();

        let mut state = automaton.initial_state();
        let mut best = None;
        for (offset, c) in text.tail(self.position).char_indices() {
            state = match automaton.transition(state, c) {
                Some(next) => next,
                None => break,
            };
            let candidates = automaton.matches(state);
            if candidates.is_empty() {
                continue;
            }

            self.collector.reset();
            for candidate in candidates {
                self.bounds.check(candidate)?;
                self.collector.record(*candidate)?;
            }

            let length = offset + c.len_utf8();
            match self.resolver.resolve(self.collector.match_set(), active) {
                Ok(matched) => {
                    trace!("Accepting {} with length {}", matched, length);
                    best = Some((matched, length));
                }
                Err(Error::NoApplicableTerminal { .. }) => {
                    trace!(
                        "No terminal applies in context {} at length {}",
                        active,
                        length
                    );
                }
                Err(error) => return Err(error),
            }
        }
        Ok(best)
    }

    /// Records a lexical error for the character at the current position and
    /// moves past it
    fn skip_unexpected(&mut self) {
        let Some(unexpected) = self.text.tail(self.position).chars().next() else {
            self.position = self.text.len();
            return;
        };
        let error = LexicalError {
            position: self.text.position_at(self.position),
            span: TextSpan::new(self.position, unexpected.len_utf8()),
            unexpected,
            context: self.contexts.active(),
        };
        warn!("{}", error);
        self.position += unexpected.len_utf8();

        match self.options.max_errors {
            Some(max) if self.errors.len() >= max => self.dropped_errors += 1,
            _ => self.errors.push(error),
        }
    }
}

impl<A: Automaton> Iterator for ScanDriver<'_, A> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
