//! Encoding traits and the fail-soft persistence surface.

use std::io::{self, Read, Write};

use tracing::warn;

use crate::config::DecodeLimits;
use crate::error::DecodeError;
use crate::wire::{WireReader, WireWriter};

/// Types with a wire encoding.
pub trait Encode {
    /// Writes this unit, frame tags included.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    fn encode<W: Write>(&self, w: &mut WireWriter<W>) -> io::Result<()>;
}

/// Types decodable from the wire.
pub trait Decode: Sized {
    /// Reads one unit, checking its frame tags.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] describing the first problem found.
    fn decode<R: Read>(r: &mut WireReader<R>) -> Result<Self, DecodeError>;
}

/// Byte-level and boolean persistence for every encodable unit.
///
/// `read_from` is the fail-soft entry point: it reports failure as `false`
/// and leaves the target empty rather than half-filled.
pub trait Persist: Encode + Decode + Default {
    /// Writes this unit to a byte sink.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    fn write_to<W: Write>(&self, out: W) -> io::Result<()> {
        let mut w = WireWriter::new(out);
        self.encode(&mut w)?;
        w.flush()
    }

    /// Replaces `self` with a unit read from `input`. Returns false on failure.
    fn read_from<R: Read>(&mut self, input: R) -> bool {
        self.read_from_with(input, DecodeLimits::default())
    }

    /// [`read_from`](Self::read_from) with explicit limits.
    fn read_from_with<R: Read>(&mut self, input: R, limits: DecodeLimits) -> bool {
        match Self::decode(&mut WireReader::with_limits(input, limits)) {
            Ok(v) => {
                *self = v;
                true
            }
            Err(e) => {
                warn!(error = %e, "decode failed");
                *self = Self::default();
                false
            }
        }
    }

    /// Encodes this unit to a byte vector.
    ///
    /// # Errors
    ///
    /// Fails only for strings or collections longer than `u32::MAX`.
    fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut w = WireWriter::new(Vec::new());
        self.encode(&mut w)?;
        Ok(w.into_inner())
    }

    /// Decodes a unit from bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] describing the first problem found.
    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::decode(&mut WireReader::new(bytes))
    }

    /// Decodes a unit from bytes with explicit limits.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] describing the first problem found.
    fn from_bytes_with(bytes: &[u8], limits: DecodeLimits) -> Result<Self, DecodeError> {
        Self::decode(&mut WireReader::with_limits(bytes, limits))
    }
}

impl<T: Encode + Decode + Default> Persist for T {}
