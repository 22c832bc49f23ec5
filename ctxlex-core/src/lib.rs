pub mod types;
pub mod error;
pub mod text;
pub mod lexer;

pub use types::*;

// Re-export commonly used types
pub use error::{Error, Result};
pub use text::{Text, TextContext, TextPosition, TextSpan};
pub use lexer::{
    Automaton, ContextHierarchy, ContextResolver, ContextStack, LexicalError, MatchCollector,
    MatchSet, ScanDriver, ScanOptions, Token,
};
