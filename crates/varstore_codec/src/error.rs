//! Typed decode errors.

use std::io;

use thiserror::Error;
use varstore_foundation::{Error, ErrorKind};

use crate::frame::{Marker, Unit};

/// Why a binary stream could not be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A frame tag did not match what was expected.
    #[error("{marker} {unit} tag mismatch: expected {expected:#04x}, found {found:#04x}")]
    FrameMismatch {
        /// The unit being decoded.
        unit: Unit,
        /// Which end of the frame.
        marker: Marker,
        /// The tag that should have been there.
        expected: u8,
        /// The tag actually read.
        found: u8,
    },

    /// A numeric payload declared fewer than one cell.
    #[error("invalid dimensions {rows}x{cols}")]
    InvalidDimensions {
        /// Declared rows.
        rows: u32,
        /// Declared columns.
        cols: u32,
    },

    /// A kind code outside the known set.
    #[error("unknown kind code {0}")]
    UnknownKind(u32),

    /// A declared size exceeded the configured decode limit.
    #[error("{what} of {value} exceeds limit {limit}")]
    LimitExceeded {
        /// What was being sized.
        what: &'static str,
        /// The declared size.
        value: u64,
        /// The configured limit.
        limit: u64,
    },

    /// The stream ended mid-unit.
    #[error("unexpected end of stream")]
    UnexpectedEof,

    /// The underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for DecodeError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Self::UnexpectedEof
        } else {
            Self::Io(e)
        }
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::new(ErrorKind::Decode(e.to_string()))
    }
}
