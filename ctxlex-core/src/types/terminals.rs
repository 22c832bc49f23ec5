use crate::error::Result;

use super::ids::TerminalId;

/// A grammar symbol known to the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Grammar-wide symbol id
    pub id: u32,
    /// Display name
    pub name: String,
}

impl Symbol {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Terminals in automaton order, so that a `TerminalId` indexes this table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalTable {
    symbols: Vec<Symbol>,
}

impl Default for TerminalTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalTable {
    /// Creates a table holding only the reserved ε and $ terminals
    pub fn new() -> Self {
        Self {
            symbols: vec![Symbol::new(0x0001, "ε"), Symbol::new(0x0002, "$")],
        }
    }

    /// Creates a table with the reserved terminals followed by `terminals`
    pub fn with_terminals<I>(terminals: I) -> Result<Self>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut table = Self::new();
        for symbol in terminals {
            table.push(symbol)?;
        }
        Ok(table)
    }

    /// Appends a terminal and returns its index
    pub fn push(&mut self, symbol: Symbol) -> Result<TerminalId> {
        let index = TerminalId::try_from(self.symbols.len())?;
        self.symbols.push(symbol);
        Ok(index)
    }

    pub fn get(&self, index: TerminalId) -> Option<&Symbol> {
        self.symbols.get(index.as_usize())
    }

    /// Gets the name of a terminal, if it exists
    pub fn name_of(&self, index: TerminalId) -> Option<&str> {
        self.get(index).map(|symbol| symbol.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TerminalId, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| (TerminalId(index as u16), symbol))
    }
}
