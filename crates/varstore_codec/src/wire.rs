//! Little-endian primitive readers and writers.
//!
//! Integers are unsigned 32-bit, numeric cells are IEEE-754 single
//! precision, and strings are a 32-bit byte length followed by UTF-8.

use std::io::{self, Read, Write};

use tracing::trace;

use crate::config::DecodeLimits;
use crate::error::DecodeError;
use crate::frame::{FORMAT_VERSION, Marker, Unit};

/// Writes wire primitives to a byte sink.
#[derive(Debug)]
pub struct WireWriter<W> {
    inner: W,
}

impl<W: Write> WireWriter<W> {
    /// Wraps a byte sink.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwraps the byte sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    pub fn u8(&mut self, v: u8) -> io::Result<()> {
        self.inner.write_all(&[v])
    }

    /// Writes a little-endian `u32`.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    pub fn u32(&mut self, v: u32) -> io::Result<()> {
        self.inner.write_all(&v.to_le_bytes())
    }

    /// Writes a length or count as `u32`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `n` does not fit in 32 bits.
    pub fn length(&mut self, n: usize) -> io::Result<()> {
        let n = u32::try_from(n).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("length {n} exceeds u32"))
        })?;
        self.u32(n)
    }

    /// Writes a little-endian `f32`.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    pub fn f32(&mut self, v: f32) -> io::Result<()> {
        self.inner.write_all(&v.to_le_bytes())
    }

    /// Writes a length-prefixed UTF-8 string.
    ///
    /// # Errors
    ///
    /// Propagates sink errors, or `InvalidInput` for strings over 4 GiB.
    pub fn string(&mut self, s: &str) -> io::Result<()> {
        self.length(s.len())?;
        self.inner.write_all(s.as_bytes())
    }

    /// Writes a unit's leading tag and the format version.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    pub fn open(&mut self, unit: Unit) -> io::Result<()> {
        self.u8(unit.tag())?;
        self.u8(FORMAT_VERSION)
    }

    /// Writes a unit's trailing tag.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    pub fn close(&mut self, unit: Unit) -> io::Result<()> {
        self.u8(unit.tag())
    }

    /// Flushes the sink.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Reads wire primitives from a byte source, enforcing [`DecodeLimits`].
#[derive(Debug)]
pub struct WireReader<R> {
    inner: R,
    limits: DecodeLimits,
    depth: usize,
}

impl<R: Read> WireReader<R> {
    /// Wraps a byte source with default limits.
    pub fn new(inner: R) -> Self {
        Self::with_limits(inner, DecodeLimits::default())
    }

    /// Wraps a byte source with explicit limits.
    pub fn with_limits(inner: R, limits: DecodeLimits) -> Self {
        Self {
            inner,
            limits,
            depth: 0,
        }
    }

    /// The limits in force.
    #[must_use]
    pub fn limits(&self) -> &DecodeLimits {
        &self.limits
    }

    /// Unwraps the byte source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// `UnexpectedEof` at end of stream, `Io` otherwise.
    pub fn u8(&mut self) -> Result<u8, DecodeError> {
        let mut buf = [0u8; 1];
        self.inner.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    /// Reads exactly `len` bytes. The buffer grows with the bytes present,
    /// not with the declared length.
    fn bytes(&mut self, len: usize) -> Result<Vec<u8>, DecodeError> {
        let mut buf = Vec::new();
        self.inner.by_ref().take(len as u64).read_to_end(&mut buf)?;
        if buf.len() < len {
            return Err(DecodeError::UnexpectedEof);
        }
        Ok(buf)
    }

    /// Reads a little-endian `u32`.
    ///
    /// # Errors
    ///
    /// `UnexpectedEof` at end of stream, `Io` otherwise.
    pub fn u32(&mut self) -> Result<u32, DecodeError> {
        let mut buf = [0u8; 4];
        self.inner.read_exact(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Reads a little-endian `f32`.
    ///
    /// # Errors
    ///
    /// `UnexpectedEof` at end of stream, `Io` otherwise.
    pub fn f32(&mut self) -> Result<f32, DecodeError> {
        let mut buf = [0u8; 4];
        self.inner.read_exact(&mut buf)?;
        Ok(f32::from_le_bytes(buf))
    }

    /// Reads an entry count, checked against `max_entries`.
    ///
    /// # Errors
    ///
    /// `LimitExceeded` if the count is over the limit.
    pub fn count(&mut self) -> Result<usize, DecodeError> {
        let n = self.u32()?;
        Self::check("entry count", u64::from(n), self.limits.max_entries)?;
        Ok(n as usize)
    }

    /// Reads `n` cells, checked against `max_cells`.
    ///
    /// # Errors
    ///
    /// `LimitExceeded` if `n` is over the limit.
    pub fn cells(&mut self, n: u64) -> Result<Vec<f32>, DecodeError> {
        Self::check("cell count", n, self.limits.max_cells)?;
        let byte_len = n
            .checked_mul(4)
            .and_then(|b| usize::try_from(b).ok())
            .ok_or(DecodeError::LimitExceeded {
                what: "cell count",
                value: n,
                limit: self.limits.max_cells as u64,
            })?;
        let bytes = self.bytes(byte_len)?;
        Ok(bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect())
    }

    /// Reads a length-prefixed string. Invalid UTF-8 is replaced lossily.
    ///
    /// # Errors
    ///
    /// `LimitExceeded` for over-long strings, or a stream error.
    pub fn string(&mut self) -> Result<String, DecodeError> {
        let len = self.u32()?;
        Self::check("string length", u64::from(len), self.limits.max_string_len)?;
        let buf = self.bytes(len as usize)?;
        Ok(match String::from_utf8(buf) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }

    /// Reads and checks a unit's leading tag, returning the format version.
    ///
    /// # Errors
    ///
    /// `FrameMismatch` if the tag is not the unit's.
    pub fn open(&mut self, unit: Unit) -> Result<u8, DecodeError> {
        let found = self.u8()?;
        if found != unit.tag() {
            return Err(DecodeError::FrameMismatch {
                unit,
                marker: Marker::Leading,
                expected: unit.tag(),
                found,
            });
        }
        let version = self.u8()?;
        trace!(%unit, version, "frame open");
        Ok(version)
    }

    /// Reads and checks a unit's trailing tag.
    ///
    /// # Errors
    ///
    /// `FrameMismatch` if the tag does not repeat the leading one.
    pub fn close(&mut self, unit: Unit) -> Result<(), DecodeError> {
        let found = self.u8()?;
        if found != unit.tag() {
            return Err(DecodeError::FrameMismatch {
                unit,
                marker: Marker::Trailing,
                expected: unit.tag(),
                found,
            });
        }
        trace!(%unit, "frame close");
        Ok(())
    }

    /// Runs `f` one nesting level deeper, checked against `max_depth`.
    ///
    /// # Errors
    ///
    /// `LimitExceeded` if nesting is too deep, or whatever `f` returns.
    pub fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        Self::check("nesting depth", (self.depth + 1) as u64, self.limits.max_depth)?;
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn check(what: &'static str, value: u64, limit: usize) -> Result<(), DecodeError> {
        let limit = limit as u64;
        if value > limit {
            return Err(DecodeError::LimitExceeded { what, value, limit });
        }
        Ok(())
    }
}
