#![allow(dead_code)]

mod automaton;

pub use automaton::TestAutomaton;

use ctxlex_core::{
    ContextHierarchy, ContextId, LexerBounds, LexicalError, MatchSet, MatchedTerminal, ScanDriver,
    ScanOptions, Symbol, TerminalId, TerminalTable, Text, Token,
};

pub const DEFAULT: ContextId = ContextId::DEFAULT;
pub const CODE: ContextId = ContextId(1);
pub const QUERY: ContextId = ContextId(2);
/// Declared in the grammar but outside the hierarchy
pub const DETACHED: ContextId = ContextId(3);

pub const NAME: TerminalId = TerminalId(2);
pub const IF: TerminalId = TerminalId(3);
pub const SELECT: TerminalId = TerminalId(4);
pub const FROM: TerminalId = TerminalId(5);
pub const WHITESPACE: TerminalId = TerminalId(6);
pub const LBRACE: TerminalId = TerminalId(7);
pub const RBRACE: TerminalId = TerminalId(8);
pub const INTEGER: TerminalId = TerminalId(9);
pub const EQUALS: TerminalId = TerminalId(10);
pub const GREATER: TerminalId = TerminalId(11);
pub const ARROW: TerminalId = TerminalId(12);

/// Install a test logger; safe to call from every test
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn matched(context: ContextId, terminal: TerminalId) -> MatchedTerminal {
    MatchedTerminal::new(context, terminal)
}

pub fn match_set(matches: &[(ContextId, TerminalId)]) -> MatchSet {
    MatchSet::from_matches(matches.iter().map(|&pair| MatchedTerminal::from(pair)))
        .expect("match set without duplicate contexts")
}

pub fn hierarchy(edges: &[(ContextId, ContextId)]) -> ContextHierarchy {
    ContextHierarchy::from_edges(edges.iter().copied()).expect("acyclic hierarchy")
}

/// Everything a scan needs, as produced by a grammar compiler
pub struct Grammar {
    pub automaton: TestAutomaton,
    pub hierarchy: ContextHierarchy,
    pub terminals: TerminalTable,
    pub bounds: LexerBounds,
}

impl Grammar {
    pub fn driver<'a>(&'a self, text: &'a Text<'a>) -> ScanDriver<'a, TestAutomaton> {
        ScanDriver::new(text, &self.automaton, &self.hierarchy, &self.terminals, self.bounds)
            .with_options(ScanOptions::default().with_separator(WHITESPACE))
    }
}

/// Sample grammar with context-scoped keywords:
///
/// - `DEFAULT`: names, integers, whitespace, braces, `=` and `>`
/// - `CODE` (child of `DEFAULT`): keyword `if` and `=>`
/// - `QUERY` (child of `DEFAULT`): keywords `select` and `from`
pub fn sample_grammar() -> Grammar {
    let terminals = TerminalTable::with_terminals([
        Symbol::new(0x0A, "NAME"),
        Symbol::new(0x0B, "if"),
        Symbol::new(0x0C, "select"),
        Symbol::new(0x0D, "from"),
        Symbol::new(0x0E, "WHITESPACE"),
        Symbol::new(0x0F, "{"),
        Symbol::new(0x10, "}"),
        Symbol::new(0x11, "INTEGER"),
        Symbol::new(0x12, "="),
        Symbol::new(0x13, ">"),
        Symbol::new(0x14, "=>"),
    ])
    .expect("terminal table");

    let mut automaton = TestAutomaton::new();
    automaton.words(
        matched(DEFAULT, NAME),
        &[
            ("if", &[matched(CODE, IF)][..]),
            ("select", &[matched(QUERY, SELECT)][..]),
            ("from", &[matched(QUERY, FROM)][..]),
        ],
    );
    automaton.repeat(" \t\n", &[matched(DEFAULT, WHITESPACE)]);
    automaton.repeat("0123456789", &[matched(DEFAULT, INTEGER)]);
    automaton.literal("{", &[matched(DEFAULT, LBRACE)]);
    automaton.literal("}", &[matched(DEFAULT, RBRACE)]);
    automaton.literal("=", &[matched(DEFAULT, EQUALS)]);
    automaton.literal(">", &[matched(DEFAULT, GREATER)]);
    automaton.literal("=>", &[matched(CODE, ARROW)]);

    Grammar {
        automaton,
        hierarchy: hierarchy(&[(CODE, DEFAULT), (QUERY, DEFAULT)]),
        bounds: LexerBounds::for_table(&terminals, 4),
        terminals,
    }
}

/// Scans `input` with `context` pushed on top of the default context
pub fn scan(grammar: &Grammar, input: &str, context: Option<ContextId>) -> (Vec<Token>, Vec<LexicalError>) {
    init_logger();
    let text = Text::new(input);
    let mut driver = grammar.driver(&text);
    if let Some(context) = context {
        driver.push_context(context).expect("declared context");
    }
    let tokens = driver.tokenize().expect("scan without grammar defects");
    (tokens, driver.errors().to_vec())
}

/// Terminals of a token stream, without the end token
pub fn kinds(tokens: &[Token]) -> Vec<TerminalId> {
    tokens
        .iter()
        .filter(|token| !token.is_end())
        .map(|token| token.terminal)
        .collect()
}
