//! Frame tags.
//!
//! Every serialized unit is laid out as
//!
//! ```text
//! tag(1) version(1) payload... tag(1)
//! ```
//!
//! where the trailing tag repeats the leading one. A mismatch means the
//! payload was truncated, corrupted, or misparsed.

use std::fmt;

/// Format version written in every frame.
pub const FORMAT_VERSION: u8 = 1;

/// The unit types carried on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A single value.
    Value,
    /// A name-keyed table.
    Table,
    /// One variable's metadata record.
    VarInfo,
    /// A registry of metadata records.
    Database,
}

impl Unit {
    /// The sentinel byte framing this unit.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::Value => 0xF2,
            Self::Table => 0xF9,
            Self::VarInfo => 0xE1,
            Self::Database => 0xF8,
        }
    }

    /// Identifies a unit from its leading tag.
    #[must_use]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0xF2 => Some(Self::Value),
            0xF9 => Some(Self::Table),
            0xE1 => Some(Self::VarInfo),
            0xF8 => Some(Self::Database),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "value",
            Self::Table => "table",
            Self::VarInfo => "varinfo",
            Self::Database => "database",
        })
    }
}

/// Which end of a frame a tag was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    /// The tag before the payload.
    Leading,
    /// The tag after the payload.
    Trailing,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Leading => "leading",
            Self::Trailing => "trailing",
        })
    }
}
