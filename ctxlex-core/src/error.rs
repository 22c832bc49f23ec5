//! Error types for context-sensitive lexing

use thiserror::Error;

use crate::types::{ContextId, TerminalId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Duplicate match for context {context}: terminal {existing} already recorded, got {candidate}")]
    DuplicateContext {
        context: ContextId,
        existing: TerminalId,
        candidate: TerminalId,
    },

    #[error("No applicable terminal in context {context}")]
    NoApplicableTerminal { context: ContextId },

    #[error("{kind} id out of range: {value} (max: {max})", max = u16::MAX)]
    IdOutOfRange { kind: &'static str, value: usize },

    #[error("Unknown context: {0}")]
    UnknownContext(ContextId),

    #[error("Unknown terminal: {0}")]
    UnknownTerminal(TerminalId),

    #[error("Context hierarchy cycle through {0}")]
    HierarchyCycle(ContextId),

    #[error("Context stack underflow")]
    ContextStackUnderflow,
}

pub type Result<T> = std::result::Result<T, Error>;
