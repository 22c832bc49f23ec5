//! A small in-memory DFA for driving the scanner in tests

use std::collections::HashMap;

use ctxlex_core::{Automaton, MatchedTerminal};

#[derive(Debug, Default)]
struct TestState {
    transitions: HashMap<char, usize>,
    matches: Vec<MatchedTerminal>,
}

/// DFA with explicit states; state 0 is the initial state
#[derive(Debug)]
pub struct TestAutomaton {
    states: Vec<TestState>,
}

impl Default for TestAutomaton {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TestAutomaton {
    pub fn new() -> Self {
        Self {
            states: vec![TestState::default()],
        }
    }

    /// Adds a state with the given matches and returns its index
    pub fn add_state(&mut self, matches: &[MatchedTerminal]) -> usize {
        self.states.push(TestState {
            transitions: HashMap::new(),
            matches: matches.to_vec(),
        });
        self.states.len() - 1
    }

    pub fn add_transition(&mut self, from: usize, c: char, to: usize) {
        self.states[from].transitions.insert(c, to);
    }

    /// Adds the path for `text` from the initial state, reusing existing
    /// states, and appends `matches` to its last state
    pub fn literal(&mut self, text: &str, matches: &[MatchedTerminal]) -> usize {
        let mut state = 0;
        for c in text.chars() {
            state = match self.states[state].transitions.get(&c) {
                Some(&next) => next,
                None => {
                    let next = self.add_state(&[]);
                    self.add_transition(state, c, next);
                    next
                }
            };
        }
        self.states[state].matches.extend_from_slice(matches);
        state
    }

    /// One or more characters of `chars`
    pub fn repeat(&mut self, chars: &str, matches: &[MatchedTerminal]) -> usize {
        let state = self.add_state(matches);
        for c in chars.chars() {
            self.add_transition(0, c, state);
            self.add_transition(state, c, state);
        }
        state
    }

    /// Lowercase words matched as `identifier`, with keywords whose last state
    /// additionally carries the keyword matches
    pub fn words(&mut self, identifier: MatchedTerminal, keywords: &[(&str, &[MatchedTerminal])]) {
        let ident = self.add_state(&[identifier]);
        for c in 'a'..='z' {
            self.add_transition(ident, c, ident);
        }

        let mut trie = vec![0];
        for (keyword, matches) in keywords {
            let mut state = 0;
            for c in keyword.chars() {
                state = match self.states[state].transitions.get(&c) {
                    Some(&next) => next,
                    None => {
                        let next = self.add_state(&[identifier]);
                        self.add_transition(state, c, next);
                        trie.push(next);
                        next
                    }
                };
            }
            self.states[state].matches.extend_from_slice(matches);
        }

        for state in trie {
            for c in 'a'..='z' {
                self.states[state].transitions.entry(c).or_insert(ident);
            }
        }
    }
}

impl Automaton for TestAutomaton {
    type State = usize;

    fn initial_state(&self) -> usize {
        0
    }

    fn transition(&self, state: usize, c: char) -> Option<usize> {
        self.states[state].transitions.get(&c).copied()
    }

    fn matches(&self, state: usize) -> &[MatchedTerminal] {
        &self.states[state].matches
    }
}
