//! Kind tags for values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The active variant of a [`Value`](crate::Value).
///
/// The discriminants are the codes used on the wire and in the variable
/// registry, so they must never be renumbered.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Kind {
    /// No value has been assigned.
    #[default]
    Invalid = 0,
    /// A single number (stored as a 1x1 cell).
    Number = 1,
    /// A one-dimensional list of numbers.
    Array = 2,
    /// A two-dimensional row-major grid of numbers.
    Matrix = 3,
    /// A nested name-keyed table.
    Table = 4,
    /// A text value.
    String = 5,
}

impl Kind {
    /// All kinds, in wire-code order.
    pub const ALL: [Kind; 6] = [
        Kind::Invalid,
        Kind::Number,
        Kind::Array,
        Kind::Matrix,
        Kind::Table,
        Kind::String,
    ];

    /// Returns the wire code for this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a kind by wire code.
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Invalid),
            1 => Some(Self::Number),
            2 => Some(Self::Array),
            3 => Some(Self::Matrix),
            4 => Some(Self::Table),
            5 => Some(Self::String),
            _ => None,
        }
    }

    /// Returns true for the kinds backed by a numeric buffer.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Array | Self::Matrix)
    }

    /// Lower-case name used in messages and listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Number => "number",
            Self::Array => "array",
            Self::Matrix => "matrix",
            Self::Table => "table",
            Self::String => "string",
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
