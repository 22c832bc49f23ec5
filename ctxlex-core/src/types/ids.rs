//! Bounded identifiers for lexical contexts and terminals
//!
//! Both id spaces are dense and assigned when the grammar is compiled. They are
//! stored as `u16`; conversions from wider integers are checked and never
//! truncate.

use std::fmt;

use crate::error::Error;

macro_rules! define_id {
    ($name:ident, $kind:literal, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        #[repr(transparent)]
        pub struct $name(pub u16);

        impl $name {
            pub const fn new(id: u16) -> Self {
                Self(id)
            }

            /// Gets the raw value
            pub const fn raw(self) -> u16 {
                self.0
            }

            /// Gets the value as a table index
            pub const fn as_usize(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u16> for $name {
            fn from(id: u16) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u16 {
            fn from(id: $name) -> u16 {
                id.0
            }
        }

        impl TryFrom<usize> for $name {
            type Error = Error;

            fn try_from(value: usize) -> Result<Self, Self::Error> {
                u16::try_from(value)
                    .map(Self)
                    .map_err(|_| Error::IdOutOfRange { kind: $kind, value })
            }
        }

        impl TryFrom<u32> for $name {
            type Error = Error;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                Self::try_from(value as usize)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:#06X}", self.0)
            }
        }
    };
}

define_id!(ContextId, "context", "Identifier of a lexical context.");
define_id!(TerminalId, "terminal", "Index of a terminal in the lexer's terminal table.");

impl ContextId {
    /// The grammar's default context
    pub const DEFAULT: Self = Self(0);
}

impl TerminalId {
    /// The empty terminal (ε)
    pub const EPSILON: Self = Self(0);
    /// End of input ($)
    pub const DOLLAR: Self = Self(1);
}
