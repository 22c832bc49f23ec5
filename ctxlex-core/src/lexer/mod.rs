//! Context-sensitive lexing
//!
//! The automaton reports, for each accepting state, the terminals it matched
//! in every lexical context. This module collects those candidates per scan
//! position, resolves them against the parser's active context and drives the
//! automaton over an input text.

mod automaton;
mod collector;
mod driver;
mod hierarchy;
mod options;
mod resolver;
mod stack;
mod token;

pub use automaton::Automaton;
pub use collector::{MatchCollector, MatchSet};
pub use driver::ScanDriver;
pub use hierarchy::{Ancestors, ContextHierarchy};
pub use options::ScanOptions;
pub use resolver::ContextResolver;
pub use stack::ContextStack;
pub use token::{LexicalError, Token};
