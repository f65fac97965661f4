//! Reading and writing units to files.
//!
//! `load_file`/`save_file` keep the boolean contract of the fail-soft
//! surface; `read_file`/`write_file` report why they failed.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::{debug, warn};
use varstore_foundation::{Error, ErrorContext, ErrorKind, Result};

use crate::persist::{Decode, Persist};
use crate::wire::WireReader;

/// Replaces `target` with the unit stored at `path`.
///
/// Returns false if the file cannot be opened or does not decode.
pub fn load_file<T: Persist, P: AsRef<Path>>(target: &mut T, path: P) -> bool {
    match read_file(path.as_ref()) {
        Ok(v) => {
            *target = v;
            true
        }
        Err(e) => {
            warn!(path = %path.as_ref().display(), error = %e, "load failed");
            *target = T::default();
            false
        }
    }
}

/// Writes `unit` to `path`, creating or truncating it.
///
/// Returns false if the file cannot be written.
pub fn save_file<T: Persist, P: AsRef<Path>>(unit: &T, path: P) -> bool {
    match write_file(unit, path.as_ref()) {
        Ok(()) => true,
        Err(e) => {
            warn!(path = %path.as_ref().display(), error = %e, "save failed");
            false
        }
    }
}

/// Reads one unit from a file.
///
/// # Errors
///
/// Returns `IoError` if the file cannot be opened, `Decode` if it is corrupt.
pub fn read_file<T: Decode, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to open file '{}': {e}",
            path.display()
        )))
    })?;

    let mut reader = WireReader::new(BufReader::new(file));
    let unit = T::decode(&mut reader).map_err(|e| {
        Error::from(e).with_context(ErrorContext::new().with_source(path.display().to_string()))
    })?;
    debug!(path = %path.display(), "loaded");
    Ok(unit)
}

/// Writes one unit to a file, creating or truncating it.
///
/// # Errors
///
/// Returns `IoError` if the file cannot be created or written to.
pub fn write_file<T: Persist, P: AsRef<Path>>(unit: &T, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to create file '{}': {e}",
            path.display()
        )))
    })?;

    unit.write_to(BufWriter::new(file)).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to write to file '{}': {e}",
            path.display()
        )))
    })?;
    debug!(path = %path.display(), "saved");
    Ok(())
}
